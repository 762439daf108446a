use super::health;
use axum::Router;
use axum::routing::get;

/// Routes every deployment carries regardless of enabled features.
pub fn system_router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    Router::new().route("/health", get(health::health_handler))
}
