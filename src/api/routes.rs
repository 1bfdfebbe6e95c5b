//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Creates the API router.
///
/// Entities are not exposed over HTTP; only the health check is routed and
/// every other path answers with a JSON 404.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .with_state(state)
}
