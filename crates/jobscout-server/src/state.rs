use jobscout_core::search::SearchService;
use jobscout_core::traits::JobScraper;

/// Shared application state, available to route handlers via
/// `State<Arc<AppState<S>>>`.
///
/// Generic over the scraping backend so integration tests can inject a
/// mock in place of the upstream client.
pub struct AppState<S: JobScraper> {
    pub service: SearchService<S>,
}
