//! Error types for the key-value service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Cache Error Enum ==
/// Unified error type for the store, the template renderer and the handlers.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not present in the store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key already present and overriding is disabled
    #[error("Key already in use: {0}")]
    AlreadyExists(String),

    /// Template file could not be located or read
    #[error("Failed to read template file: {0}")]
    TemplateMissing(String),

    /// Template path or content absent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::NotFound(_) => (StatusCode::NOT_FOUND, "Key not found"),
            // Detail stays in the server log
            CacheError::AlreadyExists(_)
            | CacheError::TemplateMissing(_)
            | CacheError::InvalidInput(_)
            | CacheError::Internal(_) => {
                error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the key-value service.
pub type Result<T> = std::result::Result<T, CacheError>;
