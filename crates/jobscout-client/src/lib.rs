//! HTTP client for the upstream job scraper backend.

pub mod upstream;

pub use upstream::{ScraperConfig, UpstreamScraper};
