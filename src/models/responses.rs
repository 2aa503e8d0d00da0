//! Response DTOs for the key-value API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the listing operation (GET /api)
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Every key currently stored, oldest first
    pub keys: Vec<String>,
}

impl KeysResponse {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }
}

/// Response body for operations that created an entry (POST /api, PUT /api/:key)
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    /// The key the value was stored under
    pub key: String,
}

impl KeyResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
