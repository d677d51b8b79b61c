// src/runner.rs
//
// Top-level dispatch: run one command end to end. The record accumulator
// flows collect → sheets export → dedupe → summarize → JSON/CSV export;
// nothing here holds state between runs.

use std::path::PathBuf;

use log::{error, info};

use crate::config::options::{Command, Params};
use crate::core::net::Portal;
use crate::error::Error;
use crate::model::CourtListing;
use crate::{catalog, export, manual, scrape, upload};

/// Paths written by an export run.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

pub fn run(params: &Params) -> Result<RunSummary, Error> {
    match params.command {
        Command::Manual => {
            info!("building manual dataset");
            export_catalog(params, manual::dataset())
        }
        Command::Scrape => {
            let portal = Portal::new()?;
            let listings = scrape::collect_listings(&portal)?;
            info!("collected {} raw listings", listings.len());
            export_catalog(params, listings)
        }
        Command::Upload => run_upload(params),
    }
}

fn export_catalog(params: &Params, raw: Vec<CourtListing>) -> Result<RunSummary, Error> {
    let json = params.json_path();
    let csv = params.csv_path();
    let sheets = params.sheets_path();

    // The sheets view needs the per-court records before merging collapses
    // each facility's schedules into one row.
    export::write_sheets_csv(&sheets, &raw)?;
    info!("wrote {}", sheets.display());

    let listings = catalog::dedupe(raw);
    catalog::summarize(&listings).log();

    export::write_json(&json, &listings)?;
    info!("wrote {}", json.display());
    export::write_csv(&csv, &listings)?;
    info!("wrote {}", csv.display());

    Ok(RunSummary { files_written: vec![json, csv, sheets] })
}

fn run_upload(params: &Params) -> Result<RunSummary, Error> {
    let input = params.upload_input();
    match upload::upload_catalog(&input, &params.endpoint) {
        Ok(message) => {
            info!("upload succeeded: {message}");
            Ok(RunSummary { files_written: Vec::new() })
        }
        Err(e) => {
            // The variant message is the operator report; the caller turns
            // this into exit code 1.
            error!("{e}");
            Err(Error::Upload(e))
        }
    }
}
