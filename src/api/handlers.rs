//! API Handlers
//!
//! HTTP request handlers translating each route into one store operation.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use tracing::error;

use crate::cache::{CacheStore, StoreOptions, Upserted};
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, KeyResponse, KeysResponse};
use crate::render::HtmlRenderer;

/// File name of the landing page template inside the template directory.
pub const LANDING_TEMPLATE: &str = "index.html";

/// Application state shared across all handlers.
///
/// Contains the store wrapped in Arc<RwLock<>> for thread-safe access, plus
/// what the landing page needs.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe key-value store
    pub cache: Arc<RwLock<CacheStore>>,
    /// Landing page renderer
    pub html: HtmlRenderer,
    /// Port advertised on the landing page
    pub port: u16,
}

impl AppState {
    /// Creates a new AppState around the given store, with default landing page settings.
    pub fn new(cache: CacheStore) -> Self {
        let defaults = Config::default();
        Self::with_landing(
            cache,
            HtmlRenderer::new(defaults.template_dir, false),
            defaults.server_port,
        )
    }

    /// Creates a new AppState with an explicit landing page renderer and port.
    pub fn with_landing(cache: CacheStore, html: HtmlRenderer, port: u16) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            html,
            port,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = CacheStore::new(StoreOptions {
            allow_override: config.allow_override,
            debug: config.cache_debug,
        });
        let html = HtmlRenderer::new(config.template_dir.clone(), config.development);
        Self::with_landing(cache, html, config.server_port)
    }
}

/// Handler for GET /api
///
/// Lists every stored key.
pub async fn list_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    let cache = state.cache.read().await;
    Json(KeysResponse::new(cache.list()))
}

/// Handler for GET /api/:key
///
/// Returns the stored document as-is.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Value>> {
    let cache = state.cache.read().await;
    let value = cache.get(&key)?.clone();

    Ok(Json(value))
}

/// Handler for POST /api
///
/// Stores the body under a freshly generated key.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<KeyResponse>)> {
    let mut cache = state.cache.write().await;
    let key = cache.create(body, None)?;

    Ok((StatusCode::CREATED, Json(KeyResponse::new(key))))
}

/// Handler for PUT /api/:key
///
/// Merges into an existing entry (200 with the merged document) or creates
/// the entry (201 with the key). Runs under a single write lock.
pub async fn upsert_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response> {
    let mut cache = state.cache.write().await;

    let response = match cache.upsert(key, body)? {
        Upserted::Updated(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Upserted::Created(key) => {
            (StatusCode::CREATED, Json(KeyResponse::new(key))).into_response()
        }
    };

    Ok(response)
}

/// Handler for DELETE /api/:key
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode> {
    let mut cache = state.cache.write().await;
    cache.remove(&key)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /api
pub async fn clear_handler(State(state): State<AppState>) -> StatusCode {
    let mut cache = state.cache.write().await;
    cache.clear();

    StatusCode::NO_CONTENT
}

/// Handler for GET /
///
/// Renders the landing page with the listening port filled in.
pub async fn landing_handler(State(state): State<AppState>) -> Response {
    let mut replacements = Map::new();
    replacements.insert("PORT".to_string(), Value::from(state.port));

    match state.html.render(LANDING_TEMPLATE, &replacements) {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            error!("Template rendering failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
