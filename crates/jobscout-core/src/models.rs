use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A job posting as produced by the upstream scraper.
///
/// Postings are opaque to this layer: whatever fields the backend emitted
/// (title, company, location, job_url, date_posted, salary columns when
/// present) pass through unmodified.
pub type JobPosting = serde_json::Value;

pub const DEFAULT_RESULTS_WANTED: u32 = 20;
pub const MAX_RESULTS_WANTED: u32 = 1000;
pub const DEFAULT_DISTANCE_MILES: u32 = 50;
pub const DEFAULT_COUNTRY_INDEED: &str = "USA";
pub const DEFAULT_VERBOSE: u8 = 1;
pub const MAX_VERBOSE: u8 = 2;

// ---------------------------------------------------------------------------
// Site
// ---------------------------------------------------------------------------

/// Supported job boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    Linkedin,
    Indeed,
    Glassdoor,
    ZipRecruiter,
    Google,
    Bayt,
    Naukri,
}

impl Site {
    /// Every known site, in documentation order.
    pub fn all() -> Vec<Site> {
        vec![
            Site::Linkedin,
            Site::Indeed,
            Site::Glassdoor,
            Site::ZipRecruiter,
            Site::Google,
            Site::Bayt,
            Site::Naukri,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Linkedin => "linkedin",
            Site::Indeed => "indeed",
            Site::Glassdoor => "glassdoor",
            Site::ZipRecruiter => "zip_recruiter",
            Site::Google => "google",
            Site::Bayt => "bayt",
            Site::Naukri => "naukri",
        }
    }

    /// Geographic coverage note, surfaced by `GET /sites`.
    pub fn coverage(&self) -> &'static str {
        match self {
            Site::Linkedin => "Global (uses the location parameter)",
            Site::Indeed | Site::Glassdoor => {
                "Per-country boards, selected via country_indeed"
            }
            Site::ZipRecruiter => "US/Canada only",
            Site::Google => "Global (requires google_search_term)",
            Site::Bayt => "International",
            Site::Naukri => "India focused",
        }
    }

    /// Known restriction on filter combinations, when the board has one.
    pub fn limitations(&self) -> Option<&'static str> {
        match self {
            Site::Indeed => {
                Some("Only one of: hours_old, (job_type & is_remote), easy_apply")
            }
            Site::Linkedin => {
                Some("Only one of: hours_old, easy_apply. Rate limited around 10 pages per IP")
            }
            Site::Google => Some("Requires specific google_search_term syntax"),
            _ => None,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linkedin" => Ok(Site::Linkedin),
            "indeed" => Ok(Site::Indeed),
            "glassdoor" => Ok(Site::Glassdoor),
            "zip_recruiter" => Ok(Site::ZipRecruiter),
            "google" => Ok(Site::Google),
            "bayt" => Ok(Site::Bayt),
            "naukri" => Ok(Site::Naukri),
            other => Err(format!(
                "unknown site '{other}', expected one of: linkedin, indeed, glassdoor, \
                 zip_recruiter, google, bayt, naukri"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// JobType / DescriptionFormat
// ---------------------------------------------------------------------------

/// Employment type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Fulltime,
    Parttime,
    Internship,
    Contract,
}

impl JobType {
    /// Every accepted employment type.
    pub fn all() -> Vec<JobType> {
        vec![
            JobType::Fulltime,
            JobType::Parttime,
            JobType::Internship,
            JobType::Contract,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Fulltime => "fulltime",
            JobType::Parttime => "parttime",
            JobType::Internship => "internship",
            JobType::Contract => "contract",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fulltime" => Ok(JobType::Fulltime),
            "parttime" => Ok(JobType::Parttime),
            "internship" => Ok(JobType::Internship),
            "contract" => Ok(JobType::Contract),
            other => Err(format!(
                "unknown job type '{other}', expected one of: fulltime, parttime, \
                 internship, contract"
            )),
        }
    }
}

/// Output format for job descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionFormat {
    #[default]
    Markdown,
    Html,
}

impl DescriptionFormat {
    pub fn all() -> Vec<DescriptionFormat> {
        vec![DescriptionFormat::Markdown, DescriptionFormat::Html]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionFormat::Markdown => "markdown",
            DescriptionFormat::Html => "html",
        }
    }
}

impl fmt::Display for DescriptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DescriptionFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(DescriptionFormat::Markdown),
            "html" => Ok(DescriptionFormat::Html),
            other => Err(format!(
                "unknown description format '{other}', expected markdown or html"
            )),
        }
    }
}

/// Countries with dedicated Indeed/Glassdoor boards, selectable via
/// the `country_indeed` parameter.
pub const INDEED_COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Bahrain", "Belgium", "Brazil",
    "Canada", "Chile", "China", "Colombia", "Costa Rica", "Czech Republic",
    "Denmark", "Ecuador", "Egypt", "Finland", "France", "Germany", "Greece",
    "Hong Kong", "Hungary", "India", "Indonesia", "Ireland", "Israel",
    "Italy", "Japan", "Kuwait", "Luxembourg", "Malaysia", "Mexico",
    "Morocco", "Netherlands", "New Zealand", "Nigeria", "Norway", "Oman",
    "Pakistan", "Panama", "Peru", "Philippines", "Poland", "Portugal",
    "Qatar", "Romania", "Saudi Arabia", "Singapore", "South Africa",
    "South Korea", "Spain", "Sweden", "Switzerland", "Taiwan", "Thailand",
    "Turkey", "Ukraine", "United Arab Emirates", "UK", "USA", "Uruguay",
    "Venezuela", "Vietnam",
];

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// A validated job search, ready to hand to a
/// [`JobScraper`](crate::traits::JobScraper).
///
/// Serialized field names match the parameter names the upstream scraper
/// expects, so one serialization doubles as the `search_params` echo in
/// API responses. `None` options are omitted entirely.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "site_name")]
    pub sites: Vec<Site>,
    pub results_wanted: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_old: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_remote: Option<bool>,
    pub distance: u32,
    pub country_indeed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_apply: Option<bool>,
    pub description_format: DescriptionFormat,
    pub linkedin_fetch_description: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_company_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_annual_salary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<String>,
    pub verbose: u8,
}

impl SearchQuery {
    /// New query for `search_term` with every documented default applied:
    /// all known sites, 20 results, 50 mile radius, USA Indeed board,
    /// markdown descriptions.
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            google_search_term: None,
            location: None,
            sites: Site::all(),
            results_wanted: DEFAULT_RESULTS_WANTED,
            hours_old: None,
            job_type: None,
            is_remote: None,
            distance: DEFAULT_DISTANCE_MILES,
            country_indeed: DEFAULT_COUNTRY_INDEED.to_string(),
            easy_apply: None,
            description_format: DescriptionFormat::Markdown,
            linkedin_fetch_description: false,
            linkedin_company_ids: None,
            offset: None,
            enforce_annual_salary: None,
            proxies: None,
            ca_cert: None,
            verbose: DEFAULT_VERBOSE,
        }
    }

    /// Check the construction invariants.
    ///
    /// Every entry point that builds a query from external input calls this
    /// before the query is used.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.search_term.trim().is_empty() {
            return Err(AppError::validation("search_term", "must not be empty"));
        }
        if self.results_wanted < 1 || self.results_wanted > MAX_RESULTS_WANTED {
            return Err(AppError::validation(
                "results_wanted",
                format!("must be between 1 and {MAX_RESULTS_WANTED}"),
            ));
        }
        if self.sites.is_empty() {
            return Err(AppError::validation(
                "site_name",
                "must name at least one site",
            ));
        }
        if self.verbose > MAX_VERBOSE {
            return Err(AppError::validation(
                "verbose",
                format!("must be between 0 and {MAX_VERBOSE}"),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Result of one delegated search: postings in upstream order plus timing.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub jobs: Vec<JobPosting>,
    pub total: usize,
    pub elapsed_secs: f64,
}
