use std::future::Future;

use crate::error::AppError;
use crate::models::{JobPosting, SearchQuery};

/// The external scraping capability this service wraps.
///
/// Implementations own everything site-specific: fetching, pagination,
/// rate-limit handling, and normalization. This layer only shapes the
/// query and passes the postings through.
pub trait JobScraper: Send + Sync + Clone {
    /// Run the search across the sites named in `query` and return the
    /// postings in the order the backend produced them.
    fn scrape(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<JobPosting>, AppError>> + Send;
}
