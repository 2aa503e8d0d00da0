//! KV Cache - A minimal in-memory key-value HTTP service
//!
//! Provides CRUD over JSON documents with shallow-merge updates and a
//! templated landing page.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;

pub use api::{create_router, AppState};
pub use cache::{CacheStore, StoreOptions};
pub use config::Config;
pub use error::CacheError;
