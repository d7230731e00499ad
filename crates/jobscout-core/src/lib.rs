//! Core types and orchestration for the jobscout search API.

pub mod error;
pub mod models;
pub mod search;
pub mod testutil;
pub mod traits;

pub use error::AppError;
pub use models::{DescriptionFormat, JobPosting, JobType, SearchOutcome, SearchQuery, Site};
pub use search::SearchService;
pub use traits::JobScraper;
