//! Proxy Module
//!
//! Origin fetching and the hit/miss decision logic, independent of any
//! transport binding.

pub mod origin;
pub mod service;

pub use origin::{OriginClient, OriginResponse};
pub use service::{CacheStatus, ProxyResponse, ProxyService, X_CACHE_TTL_REMAINING, X_PROXY_CACHE};
