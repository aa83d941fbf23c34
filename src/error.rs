//! API error types and HTTP status mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed JSON or schema violation (400)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Referenced match/rally/shot absent (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Video path escapes the configured root (400)
    #[error("Invalid path: {0}")]
    PathInvalid(String),

    /// Video root not configured (503)
    #[error("Video root not configured")]
    RootNotSet,

    /// Database operation error (500)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error (500)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::PathInvalid(msg) => (StatusCode::BAD_REQUEST, "PATH_INVALID", msg),
            ApiError::RootNotSet => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ROOT_NOT_SET",
                "Video root not configured".to_string(),
            ),
            // Unexpected failures: log detail, return a generic message
            ApiError::Database(ref err) => {
                error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error".to_string(),
                )
            }
            ApiError::Io(ref err) => {
                error!("IO error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(ref msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
