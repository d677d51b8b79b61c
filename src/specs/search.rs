// src/specs/search.rs
//! Scraping spec for the tennis-court search results page.
//!
//! Selector contract (agreed with the portal markup, replacing the old
//! trial-and-error selector probing):
//! - one result item = one `<div class="item">…</div>` block, flat (no
//!   nested `div`s inside an item);
//! - the item title is the first `<strong>`, `<h3>` or `<h4>` block, in
//!   that order of preference;
//! - the item's detail blob is the text of its `<p>` blocks, joined with
//!   single spaces;
//! - pagination is the numeric anchors inside `<div class="pagination">`.
//!
//! An item without a usable title yields `None`; the caller logs and
//! skips it.

use log::warn;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;
use crate::extract;
use crate::model::CourtListing;

const ITEM_OPEN: &str = r#"<div class="item""#;
const TITLE_TAGS: [(&str, &str); 3] = [("<strong", "</strong>"), ("<h3", "</h3>"), ("<h4", "</h4>")];

/// Walk every result item in `doc` and append the listings that parse
/// into `acc` (the caller owns the accumulator). Returns how many items
/// were appended.
pub fn parse_results(doc: &str, acc: &mut Vec<CourtListing>) -> usize {
    let mut appended = 0;
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, ITEM_OPEN, "</div>", pos) {
        pos = e;
        match parse_item(&doc[s..e]) {
            Some(listing) => {
                acc.push(listing);
                appended += 1;
            }
            None => warn!("skipping result item without a title (offset {s})"),
        }
    }
    appended
}

fn parse_item(item: &str) -> Option<CourtListing> {
    let name = item_title(item)?;
    let detail = item_detail(item);
    Some(extract::listing_from_text(&name, &detail))
}

fn item_title(item: &str) -> Option<String> {
    for (open, close) in TITLE_TAGS {
        if let Some((s, e)) = next_tag_block_ci(item, open, close, 0) {
            let title = strip_tags(&normalize_entities(&inner_after_open_tag(&item[s..e])));
            if !title.is_empty() {
                return Some(title);
            }
        }
    }
    None
}

fn item_detail(item: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(item, "<p", "</p>", pos) {
        pos = e;
        let text = strip_tags(&normalize_entities(&inner_after_open_tag(&item[s..e])));
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join(" ")
}

/// Highest page number advertised by the pagination block; 1 when the
/// block is missing or carries no numeric anchors.
pub fn last_page(doc: &str) -> u32 {
    let Some((s, e)) = next_tag_block_ci(doc, r#"<div class="pagination""#, "</div>", 0) else {
        return 1;
    };
    let block = &doc[s..e];

    let mut max = 1u32;
    let mut pos = 0usize;
    while let Some((a_s, a_e)) = next_tag_block_ci(block, "<a", "</a>", pos) {
        pos = a_e;
        let text = strip_tags(&inner_after_open_tag(&block[a_s..a_e]));
        if let Ok(n) = text.parse::<u32>() {
            max = max.max(n);
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r##"
        <div class="list">
          <div class="item">
            <strong>한남테니스장(용산구) 3번코트 주간</strong>
            <p>이용대상: 제한없음 접수기간: 02.01~02.15</p>
            <p>이용기간: 03월 상세보기</p>
          </div>
          <div class="item">
            <h3>광나루 한강공원 테니스장(강동구) 8번 코트 주말</h3>
            <p>전화 문의 / 무료 개방</p>
          </div>
          <div class="item">
            <span>제목 없는 항목</span>
          </div>
        </div>
        <div class="pagination">
          <a href="#">1</a> <a href="#">2</a> <a href="#">다음</a>
        </div>
    "##;

    #[test]
    fn parses_items_per_selector_contract() {
        let mut acc = Vec::new();
        let n = parse_results(FIXTURE, &mut acc);
        assert_eq!(n, 2);

        let first = &acc[0];
        assert_eq!(first.name, "한남테니스장(용산구) 3번코트 주간");
        assert_eq!(first.region, "용산구");
        assert_eq!(first.court_number, "3");
        assert_eq!(first.time_period, "주간");
        assert_eq!(first.target, "제한없음");
        assert_eq!(first.reservation_period, "02.01~02.15");
        assert_eq!(first.use_period, "03월");

        let second = &acc[1];
        assert_eq!(second.region, "강동구");
        assert_eq!(second.time_period, "주말/공휴일");
        assert_eq!(second.reservation_method, "전화");
        assert_eq!(second.fee_info, "무료");
    }

    #[test]
    fn titleless_items_are_skipped_not_fatal() {
        let mut acc = Vec::new();
        parse_results(FIXTURE, &mut acc);
        assert!(acc.iter().all(|l| !l.name.is_empty()));
    }

    #[test]
    fn accumulator_grows_across_pages() {
        let mut acc = Vec::new();
        parse_results(FIXTURE, &mut acc);
        let after_first = acc.len();
        parse_results(FIXTURE, &mut acc);
        assert_eq!(acc.len(), after_first * 2);
    }

    #[test]
    fn last_page_reads_numeric_anchors() {
        assert_eq!(last_page(FIXTURE), 2);
        assert_eq!(last_page("<p>no pagination</p>"), 1);
    }
}
