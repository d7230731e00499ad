use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "jobscout API",
        version = "1.0.0",
        description = "Web API for searching job boards through the jobscout scraping backend."
    ),
    paths(
        crate::routes::search,
        crate::routes::root,
        crate::routes::health,
        crate::routes::sites,
    ),
    components(schemas(
        crate::dto::SearchRequest,
        crate::dto::SearchResponse,
        crate::dto::HealthResponse,
        crate::dto::SitesResponse,
        crate::dto::SiteInfoResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "search", description = "Job search"),
        (name = "system", description = "Health and metadata"),
    )
)]
pub struct ApiDoc;
