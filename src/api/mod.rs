//! API Module
//!
//! HTTP handlers, API-key middleware and routing for the proxy.
//!
//! # Endpoints
//! - `GET /proxy?url=` - Proxy a URL through the cache
//! - `DELETE /cache?url=` - Purge a cached URL
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
