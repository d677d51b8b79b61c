// src/catalog.rs
//
// Deduplication and summary over an ordered set of listings. The dedupe
// merge is deliberately lossy: later duplicates contribute only a distinct
// court number, nothing else (the first-seen record is authoritative).

use std::collections::{BTreeMap, HashMap};

use log::info;

use crate::model::CourtListing;

/// Collapse listings sharing an identity key (`name_region`), preserving
/// first-seen key order.
///
/// A later duplicate whose court number is non-empty and not yet collected
/// is folded into the retained record's `court_numbers` (seeded with the
/// retained record's own number on first merge). Everything else about the
/// duplicate is dropped.
pub fn dedupe(listings: Vec<CourtListing>) -> Vec<CourtListing> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<CourtListing> = Vec::with_capacity(listings.len());

    for listing in listings {
        let key = listing.identity_key();
        match index.get(&key) {
            None => {
                index.insert(key, out.len());
                out.push(listing);
            }
            Some(&at) => {
                let kept = &mut out[at];
                let number = listing.court_number;
                if number.is_empty() || number == kept.court_number {
                    continue; // plain duplicate
                }
                if kept.court_numbers.contains(&number) {
                    continue;
                }
                if kept.court_numbers.is_empty() {
                    let own = kept.court_number.clone();
                    kept.court_numbers.push(own);
                }
                kept.court_numbers.push(number);
            }
        }
    }

    out
}

/// Catalog counts by region, time period and facility, sorted for stable
/// display. Empty periods are counted under 미분류.
pub struct Summary {
    pub total: usize,
    pub by_region: BTreeMap<String, usize>,
    pub by_period: BTreeMap<String, usize>,
    pub by_facility: BTreeMap<String, usize>,
}

pub fn summarize(listings: &[CourtListing]) -> Summary {
    let mut by_region = BTreeMap::new();
    let mut by_period = BTreeMap::new();
    let mut by_facility = BTreeMap::new();

    for l in listings {
        let region = if l.region.is_empty() { s!("미분류") } else { l.region.clone() };
        let period = if l.time_period.is_empty() { s!("미분류") } else { l.time_period.clone() };
        *by_region.entry(region).or_insert(0) += 1;
        *by_period.entry(period).or_insert(0) += 1;
        let courts = l.court_numbers.len().max(1);
        *by_facility.entry(l.name.clone()).or_insert(0) += courts;
    }

    Summary { total: listings.len(), by_region, by_period, by_facility }
}

impl Summary {
    pub fn log(&self) {
        info!("총 테니스장 수: {}", self.total);
        for (region, count) in &self.by_region {
            info!("  지역 {region}: {count}개");
        }
        for (period, count) in &self.by_period {
            info!("  시간대 {period}: {count}개");
        }
        for (facility, count) in &self.by_facility {
            info!("  시설 {facility}: 코트 {count}개");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, region: &str, court: &str) -> CourtListing {
        CourtListing {
            name: s!(name),
            region: s!(region),
            court_number: s!(court),
            ..CourtListing::default()
        }
    }

    #[test]
    fn merges_court_numbers_preserving_first_seen_order() {
        let input = vec![
            listing("A", "X", "1"),
            listing("B", "Y", ""),
            listing("A", "X", "2"),
        ];
        let out = dedupe(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "A");
        assert_eq!(out[0].court_numbers, vec!["1", "2"]);
        assert_eq!(out[1].name, "B");
    }

    #[test]
    fn identical_court_number_is_a_plain_duplicate() {
        let out = dedupe(vec![listing("A", "X", "1"), listing("A", "X", "1")]);
        assert_eq!(out.len(), 1);
        assert!(out[0].court_numbers.is_empty());
    }

    #[test]
    fn later_fields_are_discarded() {
        let mut second = listing("A", "X", "2");
        second.fee_info = s!("무료");
        second.target = s!("어린이");
        let out = dedupe(vec![listing("A", "X", "1"), second]);
        assert_eq!(out[0].fee_info, "유료");
        assert_eq!(out[0].target, "제한없음");
    }

    #[test]
    fn empty_court_number_never_merges() {
        let out = dedupe(vec![listing("A", "X", "1"), listing("A", "X", "")]);
        assert_eq!(out.len(), 1);
        assert!(out[0].court_numbers.is_empty());
    }

    #[test]
    fn dedupe_is_idempotent() {
        let input = vec![
            listing("A", "X", "1"),
            listing("A", "X", "2"),
            listing("B", "Y", "3"),
        ];
        let once = dedupe(input);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn summary_counts_courts_per_facility() {
        let input = vec![
            listing("A", "X", "1"),
            listing("A", "X", "2"),
            listing("B", "Y", "1"),
        ];
        let summary = summarize(&dedupe(input));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.by_facility["A"], 2);
        assert_eq!(summary.by_facility["B"], 1);
        assert_eq!(summary.by_region["X"], 1);
        assert_eq!(summary.by_period["미분류"], 2);
    }
}
