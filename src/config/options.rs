// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Build the hardcoded manual dataset and export it.
    Manual,
    /// Scrape the booking portal and export what was found.
    Scrape,
    /// POST a previously exported JSON catalog to the ingestion endpoint.
    Upload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub command: Command,
    /// Export directory (manual/scrape) and default upload-input location.
    pub out: PathBuf,
    /// Explicit upload input; defaults to `<out>/<JSON_FILE>`.
    pub input: Option<PathBuf>,
    pub endpoint: String,
}

impl Params {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            out: PathBuf::from(DEFAULT_OUT_DIR),
            input: None,
            endpoint: s!(DEFAULT_ENDPOINT),
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.out.join(JSON_FILE)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.out.join(CSV_FILE)
    }

    pub fn sheets_path(&self) -> PathBuf {
        self.out.join(SHEETS_FILE)
    }

    pub fn upload_input(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| self.json_path())
    }
}
