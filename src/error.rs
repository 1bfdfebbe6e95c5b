//! Error types for the HTTP surface.

use crate::db::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;


/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A write was rejected by a column constraint.
    ///
    /// No built-in route writes to the roster; this maps store errors for
    /// handlers added by library consumers.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Returns the HTTP status and machine-readable code for this error.
    #[must_use]
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Constraint(_) => (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION"),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Constraint { .. } => ApiError::Constraint(err.to_string()),
            _ => ApiError::Database(err.to_string()),
        }
    }
}
