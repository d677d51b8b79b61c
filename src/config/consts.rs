// src/config/consts.rs

// Portal
pub const PORTAL_BASE: &str = "https://yeyak.seoul.go.kr";
pub const SEARCH_PATH: &str = "/web/search/selectPageListDetailSearchImg.do";
pub const SERVICE_CODE: &str = "T100";
pub const DETAIL_CODE: &str = "T108";
pub const SEARCH_CONDITION: &str = "tennis";
pub const PAGE_SIZE: u32 = 1000;
pub const USER_AGENT: &str = "court_scrape/0.2";

// Pacing
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite between pages

// Upload
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/tennis-courts";
pub const UPLOAD_TIMEOUT_SECS: u64 = 30;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const JSON_FILE: &str = "seoul_tennis_courts.json";
pub const CSV_FILE: &str = "seoul_tennis_courts.csv";
pub const SHEETS_FILE: &str = "seoul_tennis_courts_sheets.csv";
