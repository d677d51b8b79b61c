// src/export.rs
//
// Catalog serialization: JSON (canonical), flat CSV, and the denormalized
// sheets CSV. JSON and flat CSV take the deduplicated catalog; the sheets
// CSV takes the raw per-court records so each row keeps its own schedule.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::csv::to_csv_string;
use crate::error::Error;
use crate::model::CourtListing;

/// JSON array, 2-space indent, Korean text kept literal (serde_json does
/// not escape non-ASCII).
pub fn write_json(path: &Path, listings: &[CourtListing]) -> Result<(), Error> {
    ensure_parent(path)?;
    let mut text = serde_json::to_string_pretty(listings)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

/// Flat CSV: BOM + header row + one row per record. A record with merged
/// court numbers stays one row here.
pub fn write_csv(path: &Path, listings: &[CourtListing]) -> Result<(), Error> {
    ensure_parent(path)?;
    let rows: Vec<Vec<String>> = listings.iter().map(CourtListing::csv_row).collect();
    fs::write(path, to_csv_string(&CourtListing::csv_headers(), &rows))?;
    Ok(())
}

/// Spreadsheet-oriented CSV: one row per court record, Korean headers.
/// Takes the raw (pre-dedupe) records: rows are grouped by facility in
/// first-seen order, the facility-level columns (name, region, address,
/// phone) come from the facility's first record, and the per-court columns
/// (court number, period, target, method, fee, description) come from each
/// record itself.
pub fn write_sheets_csv(path: &Path, listings: &[CourtListing]) -> Result<(), Error> {
    ensure_parent(path)?;
    let headers: Vec<String> = [
        "시설명", "지역", "주소", "전화번호", "코트번호",
        "시간대", "이용대상", "예약방법", "요금정보", "설명",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    let mut rows = Vec::new();
    for group in group_by_facility(listings) {
        let head = group[0];
        for l in group {
            rows.push(vec![
                head.name.clone(),
                head.region.clone(),
                head.address.clone(),
                head.phone.clone(),
                l.court_number.clone(),
                l.time_period.clone(),
                l.target.clone(),
                l.reservation_method.clone(),
                l.fee_info.clone(),
                l.detail_text.clone(),
            ]);
        }
    }
    fs::write(path, to_csv_string(&headers, &rows))?;
    Ok(())
}

/// Buckets per-court records by facility identity, facilities in first-seen
/// order, courts in input order within each facility.
fn group_by_facility(listings: &[CourtListing]) -> Vec<Vec<&CourtListing>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<&CourtListing>> = Vec::new();
    for l in listings {
        let key = l.identity_key();
        match index.get(&key) {
            Some(&i) => groups[i].push(l),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![l]);
            }
        }
    }
    groups
}

fn ensure_parent(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
