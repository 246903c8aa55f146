//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `PUT /set` - Populate or overwrite a cache entry
//! - `POST /get` - Look up an entry by composite key
//! - `POST /del` - Invalidate one entry
//! - `DELETE /subject/:subject_id` - Invalidate every entry of one subject
//! - `DELETE /category/:category` - Invalidate one cache tier
//! - `POST /clear` - Drop all entries and reset stats
//! - `GET /stats` - Cache statistics snapshot
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
