// tests/export_files.rs
//
// File-level checks on the three exporters.

use std::fs;
use std::path::PathBuf;

use court_scrape::csv::{parse_rows, UTF8_BOM};
use court_scrape::{catalog, export, manual, CourtListing};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("court_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_catalog() -> Vec<CourtListing> {
    catalog::dedupe(manual::dataset())
}

#[test]
fn json_export_round_trips() {
    let dir = tmp_dir("json");
    let path = dir.join("courts.json");
    let listings = sample_catalog();

    export::write_json(&path, &listings).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    // Korean text must be literal, not \u-escaped.
    assert!(text.contains("한남테니스장"));
    assert!(!text.contains("\\uD55C") && !text.contains("\\ud55c"));
    // 2-space indent.
    assert!(text.contains("\n  {"));

    let decoded: Vec<CourtListing> = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, listings);
}

#[test]
fn csv_export_has_bom_header_and_one_row_per_record() {
    let dir = tmp_dir("csv");
    let path = dir.join("courts.csv");
    let listings = sample_catalog();

    export::write_csv(&path, &listings).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(UTF8_BOM));

    let rows = parse_rows(&text);
    assert_eq!(rows.len(), listings.len() + 1);
    assert_eq!(rows[0][0], "name");
    assert_eq!(rows[0][2], "courtNumber");

    // Merged court numbers stay inside one cell of one row.
    let hannam = rows.iter().find(|r| r[0] == "한남테니스장").unwrap();
    assert_eq!(hannam[3], "3번코트,4번코트,6번코트");
}

#[test]
fn sheets_export_explodes_one_row_per_court() {
    let dir = tmp_dir("sheets");
    let path = dir.join("sheets.csv");
    // The sheets view takes the raw per-court records, not the merged catalog.
    let raw = manual::dataset();

    export::write_sheets_csv(&path, &raw).unwrap();
    let rows = parse_rows(&fs::read_to_string(&path).unwrap());

    // Header + one row per per-court record.
    assert_eq!(rows.len(), raw.len() + 1);
    assert_eq!(rows[0][0], "시설명");

    let hannam: Vec<_> = rows.iter().filter(|r| r[0] == "한남테니스장").collect();
    assert_eq!(hannam.len(), 3);
    for row in hannam {
        // Facility-level fields repeat on every exploded row.
        assert_eq!(row[1], "용산구");
        assert_eq!(row[2], "서울특별시 용산구 한남동");
        assert_eq!(row[3], "02-120");
    }
}

#[test]
fn sheets_rows_keep_each_courts_own_schedule() {
    let dir = tmp_dir("sheets_schedule");
    let path = dir.join("sheets.csv");
    let raw = manual::dataset();

    export::write_sheets_csv(&path, &raw).unwrap();
    let rows = parse_rows(&fs::read_to_string(&path).unwrap());

    // A night court must not inherit the facility's first (day) record.
    let jamsil_3 = rows
        .iter()
        .find(|r| r[0] == "잠실 한강공원 테니스장" && r[4] == "3번 코트")
        .unwrap();
    assert_eq!(jamsil_3[5], "야간");
    assert_eq!(jamsil_3[9], "잠실 한강공원 테니스장 3번 코트 야간 이용");

    let jamsil_1 = rows
        .iter()
        .find(|r| r[0] == "잠실 한강공원 테니스장" && r[4] == "1번 코트")
        .unwrap();
    assert_eq!(jamsil_1[5], "주간");
}
