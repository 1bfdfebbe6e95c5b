//! API request handlers.

use crate::error::ApiError;
use crate::models::HealthResponse;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use std::sync::Arc;
use tracing::warn;

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
///
/// Pings the database so a broken storage file shows up as unhealthy.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Database unreachable")
    ),
    tag = "Health"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    state.db.ping().await.map_err(|e| {
        warn!("Health check failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: "ok".to_string(),
    }))
}

// ============================================================================
// Fallback
// ============================================================================

/// Answers unrouted paths with a JSON 404.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
