//! Test utilities: a mock implementation of the scraper seam.
//!
//! Handwritten mock for dependency injection in unit and integration
//! tests. Uses `Arc<Mutex<_>>` for interior mutability so tests can
//! assert on recorded queries.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{JobPosting, SearchQuery};
use crate::traits::JobScraper;

/// Mock scraper that returns queued responses and records every query.
#[derive(Clone)]
pub struct MockScraper {
    /// Queue of responses. Each call pops the first element; when the
    /// queue is empty, calls return no postings.
    responses: Arc<Mutex<Vec<Result<Vec<JobPosting>, AppError>>>>,
    pub queries: Arc<Mutex<Vec<SearchQuery>>>,
}

impl MockScraper {
    /// Scraper whose next call returns the given postings.
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self::with_responses(vec![Ok(jobs)])
    }

    /// Scraper that returns no postings.
    pub fn empty() -> Self {
        Self::with_responses(Vec::new())
    }

    /// Scraper whose next call fails with the given error.
    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<Vec<JobPosting>, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A posting carrying the fields every board is expected to produce.
    pub fn make_posting(title: &str, company: &str) -> JobPosting {
        serde_json::json!({
            "title": title,
            "company": company,
            "location": "Remote",
            "job_url": format!("https://example.com/jobs/{}", title.replace(' ', "-")),
            "date_posted": "2025-06-01",
        })
    }
}

impl JobScraper for MockScraper {
    async fn scrape(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, AppError> {
        self.queries.lock().unwrap().push(query.clone());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Vec::new())
        } else {
            responses.remove(0)
        }
    }
}
