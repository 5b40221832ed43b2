//! Proxy Cache - A transparent HTTP forward-proxy with an in-memory response cache
//!
//! Responses are cached per target URL for as long as the origin's
//! `Cache-Control: max-age` allows, and evicted lazily once stale.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;

pub use api::AppState;
pub use config::Config;
pub use error::ProxyError;
pub use proxy::ProxyService;
