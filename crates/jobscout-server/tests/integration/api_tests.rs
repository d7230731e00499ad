use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use jobscout_core::error::AppError;
use jobscout_core::testutil::MockScraper;

use crate::common::setup_test_app;

fn search_request(body: &serde_json::Value) -> Request<Body> {
    Request::post("/search")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

// ---------------------------------------------------------------------------
// Health and metadata
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app(MockScraper::empty());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn root_returns_health_payload() {
    let app = setup_test_app(MockScraper::empty());

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn sites_lists_all_supported_boards() {
    let app = setup_test_app(MockScraper::empty());

    let response = app
        .oneshot(Request::get("/sites").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let supported = json["supported_sites"].as_array().unwrap();
    assert_eq!(supported.len(), 7);
    assert!(supported.contains(&serde_json::json!("linkedin")));
    assert!(supported.contains(&serde_json::json!("indeed")));
    assert!(supported.contains(&serde_json::json!("zip_recruiter")));

    let job_types = json["job_types"].as_array().unwrap();
    assert!(job_types.contains(&serde_json::json!("fulltime")));

    assert!(!json["indeed_glassdoor_countries"].as_array().unwrap().is_empty());
    assert_eq!(json["sites"][0]["name"], "linkedin");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_happy_path_returns_envelope() {
    let scraper = MockScraper::new(vec![
        MockScraper::make_posting("Data Scientist", "Acme"),
        MockScraper::make_posting("ML Engineer", "Globex"),
    ]);
    let app = setup_test_app(scraper);

    let body = serde_json::json!({
        "search_term": "data scientist",
        "location": "Remote",
        "site_name": ["linkedin", "indeed"],
        "results_wanted": 15,
    });

    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_jobs"], 2);

    let jobs = json["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0]["title"], "Data Scientist");
    assert_eq!(jobs[0]["company"], "Acme");

    assert_eq!(json["search_params"]["results_wanted"], 15);
    assert_eq!(json["search_params"]["location"], "Remote");
    assert_eq!(
        json["search_params"]["site_name"],
        serde_json::json!(["linkedin", "indeed"])
    );
    assert_eq!(json["message"], "Successfully found 2 jobs");
    assert!(json["execution_time"].is_number());
}

#[tokio::test]
async fn search_with_empty_upstream_result_is_still_200() {
    let app = setup_test_app(MockScraper::empty());

    let body = serde_json::json!({"search_term": "underwater basket weaver"});
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["total_jobs"], 0);
    assert_eq!(json["jobs"], serde_json::json!([]));
}

#[tokio::test]
async fn search_defaults_to_all_sites() {
    let scraper = MockScraper::empty();
    let app = setup_test_app(scraper.clone());

    let body = serde_json::json!({"search_term": "rust engineer"});
    let response = app.oneshot(search_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let queries = scraper.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].sites.len(), 7);
    assert_eq!(queries[0].search_term, "rust engineer");
}

#[tokio::test]
async fn search_missing_search_term_returns_422() {
    let app = setup_test_app(MockScraper::empty());

    let body = serde_json::json!({"location": "Remote"});
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn search_negative_results_wanted_returns_422() {
    let app = setup_test_app(MockScraper::empty());

    let body = serde_json::json!({"search_term": "data scientist", "results_wanted": -1});
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn search_zero_results_wanted_returns_field_error() {
    let app = setup_test_app(MockScraper::empty());

    let body = serde_json::json!({"search_term": "data scientist", "results_wanted": 0});
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["error"], "validation_error");
    assert_eq!(json["field"], "results_wanted");
}

#[tokio::test]
async fn search_unknown_site_returns_field_error() {
    let scraper = MockScraper::empty();
    let app = setup_test_app(scraper.clone());

    let body = serde_json::json!({
        "search_term": "data scientist",
        "site_name": ["linkedin", "myspace"],
    });
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["error"], "validation_error");
    assert_eq!(json["field"], "site_name");

    // Rejected before the backend is ever consulted
    assert!(scraper.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn search_unknown_job_type_returns_field_error() {
    let app = setup_test_app(MockScraper::empty());

    let body = serde_json::json!({"search_term": "data scientist", "job_type": "freelance"});
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["field"], "job_type");
}

#[tokio::test]
async fn search_upstream_failure_returns_502() {
    let app = setup_test_app(MockScraper::with_error(AppError::Upstream {
        message: "linkedin blocked the request".into(),
        status_code: 500,
    }));

    let body = serde_json::json!({"search_term": "data scientist"});
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = json_body(response).await;
    assert_eq!(json["error"], "upstream_error");
    assert!(json["message"].as_str().unwrap().contains("blocked"));
}

#[tokio::test]
async fn search_upstream_rate_limit_returns_502() {
    let app = setup_test_app(MockScraper::with_error(AppError::RateLimited));

    let body = serde_json::json!({"search_term": "data scientist"});
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn search_upstream_timeout_returns_504() {
    let app = setup_test_app(MockScraper::with_error(AppError::Timeout(300)));

    let body = serde_json::json!({"search_term": "data scientist"});
    let response = app.oneshot(search_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

    let json = json_body(response).await;
    assert_eq!(json["error"], "timeout");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = setup_test_app(MockScraper::empty());

    let response = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["info"]["title"], "jobscout API");
    assert!(json["paths"]["/search"]["post"].is_object());
}
