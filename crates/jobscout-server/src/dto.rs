use serde::{Deserialize, Serialize};

use jobscout_core::error::AppError;
use jobscout_core::models::{
    self, DescriptionFormat, JobPosting, JobType, SearchOutcome, SearchQuery, Site,
};

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Body of `POST /search`. Everything except `search_term` is optional and
/// falls back to the documented defaults.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SearchRequest {
    /// Job search term
    pub search_term: String,
    /// Specific search term for Google Jobs (required for Google)
    #[serde(default)]
    pub google_search_term: Option<String>,
    /// Job location
    #[serde(default)]
    pub location: Option<String>,
    /// Sites to search; defaults to all known sites
    #[serde(default)]
    pub site_name: Option<Vec<String>>,
    /// Number of results per site (1..=1000, default 20)
    #[serde(default)]
    pub results_wanted: Option<u32>,
    /// Only postings newer than this many hours
    #[serde(default)]
    pub hours_old: Option<u32>,
    /// fulltime, parttime, internship, contract
    #[serde(default)]
    pub job_type: Option<String>,
    /// Filter for remote jobs
    #[serde(default)]
    pub is_remote: Option<bool>,
    /// Search distance in miles (default 50)
    #[serde(default)]
    pub distance: Option<u32>,
    /// Country board for Indeed/Glassdoor (default USA)
    #[serde(default)]
    pub country_indeed: Option<String>,
    /// Filter for easy-apply postings
    #[serde(default)]
    pub easy_apply: Option<bool>,
    /// markdown or html (default markdown)
    #[serde(default)]
    pub description_format: Option<String>,
    /// Fetch full LinkedIn descriptions (slower)
    #[serde(default)]
    pub linkedin_fetch_description: Option<bool>,
    /// Restrict LinkedIn results to specific company IDs
    #[serde(default)]
    pub linkedin_company_ids: Option<Vec<u64>>,
    /// Start the search from this offset in the result stream
    #[serde(default)]
    pub offset: Option<u32>,
    /// Convert wages to annual salary
    #[serde(default)]
    pub enforce_annual_salary: Option<bool>,
    /// Proxies in "user:pass@host:port" form
    #[serde(default)]
    pub proxies: Option<Vec<String>>,
    /// Path to a CA certificate file for the proxies
    #[serde(default)]
    pub ca_cert: Option<String>,
    /// Backend verbosity (0..=2, default 1)
    #[serde(default)]
    pub verbose: Option<u8>,
}

impl TryFrom<SearchRequest> for SearchQuery {
    type Error = AppError;

    fn try_from(req: SearchRequest) -> Result<Self, Self::Error> {
        let sites = match req.site_name {
            None => Site::all(),
            Some(names) => names
                .iter()
                .map(|name| name.parse())
                .collect::<Result<Vec<Site>, String>>()
                .map_err(|e| AppError::validation("site_name", e))?,
        };

        let job_type = req
            .job_type
            .map(|s| s.parse::<JobType>())
            .transpose()
            .map_err(|e| AppError::validation("job_type", e))?;

        let description_format = req
            .description_format
            .map(|s| s.parse::<DescriptionFormat>())
            .transpose()
            .map_err(|e| AppError::validation("description_format", e))?
            .unwrap_or_default();

        let query = SearchQuery {
            search_term: req.search_term,
            google_search_term: req.google_search_term,
            location: req.location,
            sites,
            results_wanted: req
                .results_wanted
                .unwrap_or(models::DEFAULT_RESULTS_WANTED),
            hours_old: req.hours_old,
            job_type,
            is_remote: req.is_remote,
            distance: req.distance.unwrap_or(models::DEFAULT_DISTANCE_MILES),
            country_indeed: req
                .country_indeed
                .unwrap_or_else(|| models::DEFAULT_COUNTRY_INDEED.to_string()),
            easy_apply: req.easy_apply,
            description_format,
            linkedin_fetch_description: req.linkedin_fetch_description.unwrap_or(false),
            linkedin_company_ids: req.linkedin_company_ids,
            offset: req.offset,
            enforce_annual_salary: req.enforce_annual_salary,
            proxies: req.proxies,
            ca_cert: req.ca_cert,
            verbose: req.verbose.unwrap_or(models::DEFAULT_VERBOSE),
        };

        query.validate()?;
        Ok(query)
    }
}

/// Response envelope for `POST /search`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub total_jobs: usize,
    /// Postings exactly as the backend produced them
    pub jobs: Vec<JobPosting>,
    /// The normalized parameters the search actually ran with
    pub search_params: serde_json::Value,
    pub execution_time: f64,
    pub message: String,
}

impl SearchResponse {
    pub fn from_outcome(outcome: SearchOutcome, query: &SearchQuery) -> Result<Self, AppError> {
        Ok(Self {
            success: true,
            total_jobs: outcome.total,
            jobs: outcome.jobs,
            search_params: serde_json::to_value(query)?,
            execution_time: outcome.elapsed_secs,
            message: format!("Successfully found {} jobs", outcome.total),
        })
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SitesResponse {
    pub supported_sites: Vec<&'static str>,
    pub job_types: Vec<&'static str>,
    pub description_formats: Vec<&'static str>,
    pub sites: Vec<SiteInfoResponse>,
    /// Countries with dedicated Indeed/Glassdoor boards
    pub indeed_glassdoor_countries: Vec<&'static str>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SiteInfoResponse {
    pub name: &'static str,
    pub coverage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limitations: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Set when the error is about a specific request field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
