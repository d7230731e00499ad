use std::time::Instant;

use crate::error::AppError;
use crate::models::{SearchOutcome, SearchQuery};
use crate::traits::JobScraper;

/// Orchestrates one search: validate, delegate to the scraping backend,
/// wrap the result with timing.
///
/// Generic over the backend via [`JobScraper`], so tests run against a
/// mock instead of live upstream calls. No retry, backoff, or
/// cancellation here: a started search runs to completion or failure,
/// and any resilience belongs to the backend.
pub struct SearchService<S: JobScraper> {
    scraper: S,
}

impl<S: JobScraper> SearchService<S> {
    pub fn new(scraper: S) -> Self {
        Self { scraper }
    }

    /// Run a validated search and return the postings plus timing.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, AppError> {
        query.validate()?;

        tracing::info!(
            search_term = %query.search_term,
            sites = query.sites.len(),
            results_wanted = query.results_wanted,
            "Starting job search"
        );

        let started = Instant::now();
        let jobs = self.scraper.scrape(query).await?;
        let elapsed_secs = started.elapsed().as_secs_f64();

        tracing::info!("Found {} jobs in {:.2} seconds", jobs.len(), elapsed_secs);

        Ok(SearchOutcome {
            total: jobs.len(),
            jobs,
            elapsed_secs,
        })
    }
}
