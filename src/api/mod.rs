//! API Module
//!
//! HTTP handlers and routing for the key-value REST API.
//!
//! # Endpoints
//! - `GET /api` - List keys
//! - `POST /api` - Create an entry under a generated key
//! - `DELETE /api` - Clear the store
//! - `GET /api/:key` - Retrieve an entry
//! - `PUT /api/:key` - Update or create an entry
//! - `DELETE /api/:key` - Remove an entry
//! - `GET /` - Landing page
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
