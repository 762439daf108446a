use axum::Router;
use safebuy::kernel::prelude::AppState;
use safebuy::server::router::{pages_router, system_router};
use tower_http::trace::TraceLayer;

/// Assembles the application router: feature pages first, then the
/// always-on system routes, with request tracing around everything.
pub fn init(state: AppState) -> Router {
    Router::new()
        .merge(pages_router())
        .merge(system_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
