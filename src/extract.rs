// src/extract.rs
//
// Field extraction from raw listing text (display name + free-text
// detail blob). Every function here is total: a pattern that does not
// match yields the documented default or an empty string, never an error.

use crate::model::{CourtListing, DEFAULT_FEE, DEFAULT_METHOD, DEFAULT_TARGET};

pub const PERIOD_DAY: &str = "주간";
pub const PERIOD_NIGHT: &str = "야간";
pub const PERIOD_WEEKEND: &str = "주말/공휴일";
pub const PERIOD_WEEKDAY: &str = "평일";

// Labeled sections of the detail blob, in page order.
const LABEL_TARGET: &str = "이용대상";
const LABEL_RESERVATION: &str = "접수기간";
const LABEL_USE: &str = "이용기간";
const LABEL_DETAIL_LINK: &str = "상세보기";

/// Interior of the first parenthesized substring, e.g.
/// `"한남테니스장(용산구)"` → `"용산구"`. Empty when no parentheses.
pub fn region(text: &str) -> String {
    let Some(open) = text.find('(') else { return s!() };
    let after = &text[open + '('.len_utf8()..];
    match after.find(')') {
        Some(close) => s!(&after[..close]),
        None => s!(),
    }
}

/// First run of digits immediately followed by `번`, e.g.
/// `"3번코트"` → `"3"`. Empty when the pattern is absent.
pub fn court_number(text: &str) -> String {
    let mut digits = s!();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if ch == '번' && !digits.is_empty() {
            return digits;
        } else {
            digits.clear();
        }
    }
    s!()
}

/// Keyword scan in fixed priority order: 주간, 야간, 주말|공휴일, 평일.
/// First match wins — text containing both 주간 and 평일 resolves to 주간.
pub fn time_period(text: &str) -> String {
    if text.contains(PERIOD_DAY) {
        s!(PERIOD_DAY)
    } else if text.contains(PERIOD_NIGHT) {
        s!(PERIOD_NIGHT)
    } else if text.contains("주말") || text.contains("공휴일") {
        s!(PERIOD_WEEKEND)
    } else if text.contains(PERIOD_WEEKDAY) {
        s!(PERIOD_WEEKDAY)
    } else {
        s!()
    }
}

/// Substring following `label` up to (excluding) `next_label`, with the
/// `:`/whitespace separator after the label skipped and the result trimmed.
/// `None` when `label` itself is absent.
fn labeled_section(text: &str, label: &str, next_label: &str) -> Option<String> {
    let start = text.find(label)? + label.len();
    let rest = text[start..].trim_start_matches([':', ' ', '\t']);
    let end = rest.find(next_label).unwrap_or(rest.len());
    Some(s!(rest[..end].trim()))
}

/// Usage-eligibility text; `제한없음` when the 이용대상 label is absent.
pub fn target(detail: &str) -> String {
    labeled_section(detail, LABEL_TARGET, LABEL_RESERVATION)
        .unwrap_or_else(|| s!(DEFAULT_TARGET))
}

/// 접수기간 section; empty when absent.
pub fn reservation_period(detail: &str) -> String {
    labeled_section(detail, LABEL_RESERVATION, LABEL_USE).unwrap_or_default()
}

/// 이용기간 section; empty when absent.
pub fn use_period(detail: &str) -> String {
    labeled_section(detail, LABEL_USE, LABEL_DETAIL_LINK).unwrap_or_default()
}

/// Default 온라인; 전화 checked before 현장 when both substrings occur.
pub fn reservation_method(detail: &str) -> String {
    if detail.contains("전화") {
        s!("전화")
    } else if detail.contains("현장") {
        s!("현장")
    } else {
        s!(DEFAULT_METHOD)
    }
}

/// Default 유료; 무료 only on an explicit 무료 mention.
pub fn fee_info(detail: &str) -> String {
    if detail.contains("무료") { s!("무료") } else { s!(DEFAULT_FEE) }
}

/// Normalize one scraped listing: region, court number and time period
/// come from the display name; eligibility, periods, method and fee from
/// the detail blob. The raw detail text is retained verbatim.
pub fn listing_from_text(name: &str, detail: &str) -> CourtListing {
    CourtListing {
        name: s!(name),
        region: region(name),
        court_number: court_number(name),
        time_period: time_period(name),
        target: target(detail),
        reservation_period: reservation_period(detail),
        use_period: use_period(detail),
        reservation_method: reservation_method(detail),
        fee_info: fee_info(detail),
        detail_text: s!(detail),
        ..CourtListing::default()
    }
}
