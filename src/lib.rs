// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod catalog;
pub mod csv;
pub mod error;
pub mod export;
pub mod extract;
pub mod manual;
pub mod model;
pub mod runner;
pub mod scrape;
pub mod upload;

pub use error::Error;
pub use model::CourtListing;
