//! Request models for the proxy API
//!
//! Defines the query strings accepted by the proxy endpoints.

use serde::Deserialize;

/// Query string of `GET /proxy` and `DELETE /cache`.
///
/// The URL is kept verbatim; it is the cache key as well as the fetch target.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetQuery {
    /// Origin URL to proxy or purge
    #[serde(default)]
    pub url: Option<String>,
}

impl TargetQuery {
    /// The target URL, or `""` when the parameter is absent.
    pub fn target(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}

/// Fallback location of the API key when no `X-API-Key` header is sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiKeyQuery {
    #[serde(default)]
    pub api_key: Option<String>,
}
