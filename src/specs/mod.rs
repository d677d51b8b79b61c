// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! Each spec encodes *where the ground truth lives in the HTML* of one
//! portal page and how to extract it tolerantly with the `core::html`
//! helpers. Specs only read markup and shape records; networking pacing,
//! deduplication, caching and export all live in higher layers.
//!
//! Conventions:
//! - case-insensitive tag detection, local scanning within known blocks;
//! - a spec is testable offline against a captured/synthetic fixture;
//! - items that fail to parse are skipped by the caller, never fatal.

pub mod search;
