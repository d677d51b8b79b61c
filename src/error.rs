// src/error.rs
//
// Library-level error types. Extraction itself never fails (missing
// patterns yield defaults); these cover I/O, HTTP and serialization at
// the pipeline edges, plus the per-mode upload failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from fetching, exporting and decoding.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Upload failures, one variant per reportable mode.
///
/// All of these are terminal for the run — the client never retries —
/// but the operator message differs per variant.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("catalog file not found: {0} (export a catalog first)")]
    MissingCatalog(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("catalog file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not connect to endpoint (is the server running?): {0}")]
    Connect(reqwest::Error),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("server rejected upload: {0}")]
    Rejected(String),
}
