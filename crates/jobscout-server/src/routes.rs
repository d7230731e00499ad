use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use chrono::Utc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use jobscout_core::models::{
    DescriptionFormat, INDEED_COUNTRIES, JobType, SearchQuery, Site,
};
use jobscout_core::traits::JobScraper;

use crate::dto::{
    HealthResponse, SearchRequest, SearchResponse, SiteInfoResponse, SitesResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router<S>(state: Arc<AppState<S>>) -> Router
where
    S: JobScraper + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/sites", get(sites))
        .route("/search", post(search::<S>))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 422, description = "Validation error", body = crate::dto::ErrorResponse),
        (status = 502, description = "Upstream scraper failure", body = crate::dto::ErrorResponse),
        (status = 504, description = "Upstream scraper timeout", body = crate::dto::ErrorResponse),
    ),
    tag = "search"
)]
pub async fn search<S: JobScraper>(
    State(state): State<Arc<AppState<S>>>,
    axum::Json(body): axum::Json<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let query = SearchQuery::try_from(body)?;
    let outcome = state.service.search(&query).await?;
    let response = SearchResponse::from_outcome(outcome, &query)?;

    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

fn health_body() -> HealthResponse {
    HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn root() -> impl IntoResponse {
    axum::Json(health_body())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(health_body())
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/sites",
    responses(
        (status = 200, description = "Supported job boards and parameters", body = SitesResponse),
    ),
    tag = "system"
)]
pub async fn sites() -> impl IntoResponse {
    let response = SitesResponse {
        supported_sites: Site::all().iter().map(Site::as_str).collect(),
        job_types: JobType::all().iter().map(JobType::as_str).collect(),
        description_formats: DescriptionFormat::all()
            .iter()
            .map(DescriptionFormat::as_str)
            .collect(),
        sites: Site::all()
            .iter()
            .map(|site| SiteInfoResponse {
                name: site.as_str(),
                coverage: site.coverage(),
                limitations: site.limitations(),
            })
            .collect(),
        indeed_glassdoor_countries: INDEED_COUNTRIES.to_vec(),
    };

    axum::Json(response)
}
