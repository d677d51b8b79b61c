// src/scrape.rs
//
// Collection driver: fetch search pages strictly sequentially, thread one
// accumulator through the parsing, and hand the raw listings back to the
// caller. No dedup or export here.

use std::thread;
use std::time::Duration;

use log::{error, info};

use crate::config::consts::REQUEST_PAUSE_MS;
use crate::core::net::Portal;
use crate::error::Error;
use crate::model::CourtListing;
use crate::specs;

/// Collect every listing the portal search returns.
///
/// Page 1 must succeed (it carries the pagination); after that, a failed
/// page fetch is logged and skipped and the run continues. Pages are
/// fetched one at a time with a fixed pause in between.
pub fn collect_listings(portal: &Portal) -> Result<Vec<CourtListing>, Error> {
    let mut listings: Vec<CourtListing> = Vec::new();

    let first = portal.search_page(1)?;
    let found = specs::search::parse_results(&first, &mut listings);
    let last = specs::search::last_page(&first);
    info!("page 1/{last}: {found} listings");

    for page in 2..=last {
        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
        match portal.search_page(page) {
            Ok(doc) => {
                let found = specs::search::parse_results(&doc, &mut listings);
                info!("page {page}/{last}: {found} listings");
            }
            Err(e) => error!("page {page}/{last} failed, skipping: {e}"),
        }
    }

    Ok(listings)
}
