// src/scrape/mod.rs
mod crawl;
mod matcher;

pub use crawl::{CrawlReport, Crawler, MatchStatus, RunContext};
pub use matcher::{extract_description, match_product};
