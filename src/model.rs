// src/model.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET: &str = "제한없음";
pub const DEFAULT_METHOD: &str = "온라인";
pub const DEFAULT_FEE: &str = "유료";

/// One canonical court listing.
///
/// Serialized field names are the catalog's JSON contract (camelCase).
/// Values for `time_period` / `reservation_method` / `fee_info` come from
/// closed keyword sets but are deliberately NOT validated here: directly
/// supplied fields pass through verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtListing {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub court_number: String,
    /// Populated only when duplicates under one identity key merged with
    /// differing court numbers; omitted from JSON otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub court_numbers: Vec<String>,
    #[serde(default)]
    pub time_period: String,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default)]
    pub reservation_period: String,
    #[serde(default)]
    pub use_period: String,
    #[serde(default = "default_method")]
    pub reservation_method: String,
    #[serde(default = "default_fee")]
    pub fee_info: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    /// Raw concatenated source text, kept for traceability.
    #[serde(default)]
    pub detail_text: String,
}

fn default_target() -> String { s!(DEFAULT_TARGET) }
fn default_method() -> String { s!(DEFAULT_METHOD) }
fn default_fee() -> String { s!(DEFAULT_FEE) }

impl Default for CourtListing {
    fn default() -> Self {
        Self {
            name: s!(),
            region: s!(),
            court_number: s!(),
            court_numbers: Vec::new(),
            time_period: s!(),
            target: default_target(),
            reservation_period: s!(),
            use_period: s!(),
            reservation_method: default_method(),
            fee_info: default_fee(),
            address: s!(),
            phone: s!(),
            detail_text: s!(),
        }
    }
}

impl CourtListing {
    /// Duplicate-detection key: `name + "_" + region`.
    pub fn identity_key(&self) -> String {
        join!(&*self.name, "_", &self.region)
    }

    /// Column headers for the flat CSV export, matching the JSON field names.
    pub fn csv_headers() -> Vec<String> {
        [
            "name", "region", "courtNumber", "courtNumbers", "timePeriod",
            "target", "reservationPeriod", "usePeriod", "reservationMethod",
            "feeInfo", "address", "phone", "detailText",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    /// One flat CSV row. `court_numbers` stays a single cell (joined with
    /// commas); row explosion belongs to the sheets export only.
    pub fn csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.region.clone(),
            self.court_number.clone(),
            self.court_numbers.join(","),
            self.time_period.clone(),
            self.target.clone(),
            self.reservation_period.clone(),
            self.use_period.clone(),
            self.reservation_method.clone(),
            self.fee_info.clone(),
            self.address.clone(),
            self.phone.clone(),
            self.detail_text.clone(),
        ]
    }
}
