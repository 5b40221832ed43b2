//! Request and Response models for the proxy API
//!
//! This module defines the query parameters and JSON bodies used by the
//! HTTP layer.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ApiKeyQuery, TargetQuery};
pub use responses::{HealthResponse, StatsResponse};
