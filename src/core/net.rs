// src/core/net.rs
//
// Thin blocking HTTP layer over the booking portal. One client, fixed
// endpoint, fixed query parameters except the page index.

use std::time::Duration;

use crate::config::consts::{
    DETAIL_CODE, FETCH_TIMEOUT_SECS, PAGE_SIZE, PORTAL_BASE, SEARCH_CONDITION, SEARCH_PATH,
    SERVICE_CODE, USER_AGENT,
};
use crate::error::Error;

pub struct Portal {
    client: reqwest::blocking::Client,
    base: String,
}

impl Portal {
    pub fn new() -> Result<Self, Error> {
        Self::with_base(PORTAL_BASE)
    }

    /// Point the client at a different host (tests, mirrors).
    pub fn with_base(base: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base: s!(base) })
    }

    /// Fetch one page of tennis-court search results as raw HTML.
    pub fn search_page(&self, page_index: u32) -> Result<String, Error> {
        let url = join!(&*self.base, SEARCH_PATH);
        let page_index = page_index.to_string();
        let page_size = PAGE_SIZE.to_string();
        let body = self
            .client
            .get(&url)
            .query(&[
                ("code", SERVICE_CODE),
                ("dCode", DETAIL_CODE),
                ("searchCondition", SEARCH_CONDITION),
                ("searchKeyword", ""),
                ("pageIndex", page_index.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}
