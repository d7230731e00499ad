use std::time::Duration;

use jobscout_core::error::AppError;
use jobscout_core::models::{JobPosting, SearchQuery};
use jobscout_core::traits::JobScraper;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Default request timeout, sized to the reverse proxy's read-timeout
/// budget so the proxy gives up first.
const DEFAULT_SCRAPE_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for the upstream scraper connection.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ScraperConfig {
    /// Read configuration from environment variables.
    ///
    /// - `SCRAPER_BASE_URL` (required)
    /// - `SCRAPER_TIMEOUT_SECS` (optional, defaults to 300)
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = std::env::var("SCRAPER_BASE_URL").map_err(|_| {
            AppError::Config(
                "SCRAPER_BASE_URL not set. Required to reach the scraping backend.".into(),
            )
        })?;

        let timeout_secs = match std::env::var("SCRAPER_TIMEOUT_SECS") {
            Err(_) => DEFAULT_SCRAPE_TIMEOUT.as_secs(),
            Ok(raw) => {
                let parsed: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!(
                        "Invalid SCRAPER_TIMEOUT_SECS '{raw}': must be a positive integer"
                    ))
                })?;
                if parsed == 0 {
                    return Err(AppError::Config(
                        "SCRAPER_TIMEOUT_SECS must be at least 1".into(),
                    ));
                }
                parsed
            }
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

// ---- wire types ----

#[derive(Deserialize)]
struct ScrapePayload {
    jobs: Vec<JobPosting>,
}

#[derive(Deserialize)]
struct UpstreamErrorBody {
    error: String,
}

/// Client for the upstream scraper service.
///
/// The entire search is delegated over JSON/HTTP: the query serializes to
/// the backend's parameter names and the backend answers `{"jobs": [...]}`.
/// No retries or backoff here; whatever resilience exists is the backend's.
#[derive(Clone, Debug)]
pub struct UpstreamScraper {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl UpstreamScraper {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_timeout(base_url, DEFAULT_SCRAPE_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        // Reject a malformed URL at startup instead of on the first search.
        Url::parse(base_url).map_err(|e| {
            AppError::Config(format!("Invalid scraper base URL '{base_url}': {e}"))
        })?;

        let client = Client::builder()
            .user_agent(concat!("jobscout/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, AppError> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }
}

impl JobScraper for UpstreamScraper {
    async fn scrape(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, AppError> {
        let url = format!("{}/scrape", self.base_url);

        tracing::debug!(%url, search_term = %query.search_term, "Delegating search upstream");

        let response = self
            .client
            .post(&url)
            .json(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::Network(format!("Connection failed: {e}"))
                } else {
                    AppError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();

            if status_code == 429 {
                return Err(AppError::RateLimited);
            }

            let message = serde_json::from_str::<UpstreamErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("HTTP {status_code}: {body}"));

            return Err(AppError::Upstream {
                message,
                status_code,
            });
        }

        let payload: ScrapePayload = response.json().await.map_err(|e| {
            AppError::Network(format!("Failed to parse scraper response: {e}"))
        })?;

        tracing::debug!(jobs = payload.jobs.len(), "Upstream scrape finished");

        Ok(payload.jobs)
    }
}
