use std::sync::Arc;

use axum::Router;

use jobscout_core::SearchService;
use jobscout_core::testutil::MockScraper;
use jobscout_server::routes;
use jobscout_server::state::AppState;

/// Build a test router around a stubbed scraping backend.
pub fn setup_test_app(scraper: MockScraper) -> Router {
    let state = Arc::new(AppState {
        service: SearchService::new(scraper),
    });
    routes::router(state)
}
