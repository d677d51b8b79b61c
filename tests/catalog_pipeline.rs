// tests/catalog_pipeline.rs
//
// Pipeline invariants over the real manual dataset: normalize → dedupe.

use std::collections::HashSet;

use court_scrape::{catalog, manual};

#[test]
fn identity_keys_are_unique_after_dedupe() {
    let listings = catalog::dedupe(manual::dataset());
    let mut seen = HashSet::new();
    for l in &listings {
        assert!(seen.insert(l.identity_key()), "duplicate key {}", l.identity_key());
    }
}

#[test]
fn facilities_keep_first_seen_order() {
    let listings = catalog::dedupe(manual::dataset());
    assert_eq!(listings[0].name, "한남테니스장");
    assert_eq!(listings[1].name, "광나루 한강공원 테니스장");
    // 12 facilities in the manual table.
    assert_eq!(listings.len(), 12);
}

#[test]
fn hannam_courts_merge_into_court_numbers() {
    let listings = catalog::dedupe(manual::dataset());
    let hannam = listings.iter().find(|l| l.name == "한남테니스장").unwrap();
    assert_eq!(hannam.court_number, "3번코트");
    assert_eq!(hannam.court_numbers, vec!["3번코트", "4번코트", "6번코트"]);
    // First-seen record's other fields are authoritative.
    assert_eq!(hannam.time_period, "주간");
    assert_eq!(hannam.region, "용산구");
}

#[test]
fn dedupe_twice_changes_nothing() {
    let once = catalog::dedupe(manual::dataset());
    let twice = catalog::dedupe(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn summary_totals_match_catalog() {
    let listings = catalog::dedupe(manual::dataset());
    let summary = catalog::summarize(&listings);
    assert_eq!(summary.total, listings.len());
    // Every original entry is still represented as a court row.
    let courts: usize = summary.by_facility.values().sum();
    assert_eq!(courts, manual::dataset().len());
}
