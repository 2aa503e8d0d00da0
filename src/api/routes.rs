//! API Routes
//!
//! Configures the Axum router with the collection endpoints and the landing page.

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, create_handler, get_handler, health_handler, landing_handler, list_handler,
    remove_handler, upsert_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api` - List keys
/// - `POST /api` - Store a document under a generated key
/// - `DELETE /api` - Remove every entry
/// - `GET /api/:key` - Retrieve a document
/// - `PUT /api/:key` - Merge into or create a document
/// - `DELETE /api/:key` - Remove a document
/// - `GET /` - Landing page
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Any origin, the verbs above, `Content-Type` header
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api",
            get(list_handler).post(create_handler).delete(clear_handler),
        )
        .route(
            "/api/:key",
            get(get_handler).put(upsert_handler).delete(remove_handler),
        )
        .route("/", get(landing_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
