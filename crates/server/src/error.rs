//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server-class errors to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, ApiError>`. Client-visible bodies follow the API's
//! `{"error": "..."}` convention.

use axum::{
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// The store's schema rejected the payload (missing required field).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP verb not supported on this resource.
    #[error("Method {method} not allowed")]
    MethodNotAllowed {
        method: Method,
        allow: &'static str,
    },
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Database(e) => Self::Database(e),
            RepositoryError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) => "Internal server error".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::NotFound(msg) => msg.clone(),
            Self::MethodNotAllowed { method, .. } => format!("Method {method} not allowed"),
        };

        let body = axum::Json(json!({ "error": message }));

        match self {
            Self::MethodNotAllowed { allow, .. } => {
                (status, [(header::ALLOW, allow)], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
