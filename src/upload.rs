// src/upload.rs
//
// Push a previously exported JSON catalog to the spreadsheet-backed
// ingestion API. One synchronous POST, no retry; every failure mode maps
// to its own UploadError variant so the operator report stays specific.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::info;
use serde::Deserialize;

use crate::config::consts::UPLOAD_TIMEOUT_SECS;
use crate::error::UploadError;
use crate::model::CourtListing;

#[derive(Deserialize)]
struct ApiResponse {
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

/// Read the catalog at `path` and POST it to `endpoint` as
/// `{"courts": [...]}`. Returns the server's success message.
///
/// The input file is checked before any network activity.
pub fn upload_catalog(path: &Path, endpoint: &str) -> Result<String, UploadError> {
    if !path.exists() {
        return Err(UploadError::MissingCatalog(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let courts: Vec<CourtListing> = serde_json::from_str(&text)?;
    info!("loaded {} listings from {}", courts.len(), path.display());

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
        .build()
        .map_err(UploadError::Http)?;

    let response = client
        .post(endpoint)
        .json(&serde_json::json!({ "courts": courts }))
        .send()
        .map_err(|e| {
            if e.is_timeout() {
                UploadError::Timeout(UPLOAD_TIMEOUT_SECS)
            } else if e.is_connect() {
                UploadError::Connect(e)
            } else {
                UploadError::Http(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(UploadError::Status(status));
    }

    let api: ApiResponse = response.json().map_err(UploadError::Http)?;
    if api.success {
        Ok(api.message.unwrap_or_default())
    } else {
        Err(UploadError::Rejected(api.error.unwrap_or_else(|| s!("no error message"))))
    }
}
