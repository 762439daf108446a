use crate::Landing;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use safebuy_kernel::server::AppState;
use tracing::error;

/// Routes served by the landing feature.
pub fn pages_router() -> Router<AppState> {
    Router::new().route("/", get(landing_page))
}

/// Serves the document rendered at startup. The markup never changes
/// between requests, so clients may cache it briefly.
async fn landing_page(State(state): State<AppState>) -> Response {
    match state.try_get_slice::<Landing>() {
        Ok(landing) => (
            [(header::CACHE_CONTROL, "public, max-age=300")],
            Html(landing.page().html().to_owned()),
        )
            .into_response(),
        Err(err) => {
            error!("Landing page unavailable: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
