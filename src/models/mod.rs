//! Response models for the key-value API
//!
//! Request bodies are arbitrary JSON documents and are taken as
//! `serde_json::Value`; only the response envelopes need their own types.

pub mod responses;

// Re-export commonly used types
pub use crate::cache::Entry;
pub use responses::{HealthResponse, KeyResponse, KeysResponse};
