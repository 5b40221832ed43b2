//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint. They only translate
//! between query strings and [`ProxyService`].

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::CacheStore;
use crate::error::{ProxyError, Result};
use crate::models::{HealthResponse, StatsResponse, TargetQuery};
use crate::proxy::{OriginClient, ProxyResponse, ProxyService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Proxy operations over the shared cache store
    pub proxy: ProxyService,
    /// Shared secret checked by the auth middleware
    pub api_key: Arc<str>,
}

impl AppState {
    /// Creates a new AppState from a service and the expected API key.
    pub fn new(proxy: ProxyService, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            proxy,
            api_key: api_key.into(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Starts with an empty cache store and an origin client using the
    /// configured timeout.
    pub fn from_config(config: &crate::config::Config) -> reqwest::Result<Self> {
        let origin = OriginClient::new(Duration::from_secs(config.origin_timeout))?;
        let proxy = ProxyService::new(Arc::new(CacheStore::new()), origin);
        Ok(Self::new(proxy, config.api_key.as_str()))
    }
}

/// Handler for GET /proxy?url=
///
/// Serves the target from the cache or the origin, tagged with `X-Proxy-Cache`.
pub async fn proxy_handler(
    State(state): State<AppState>,
    Query(query): Query<TargetQuery>,
) -> Result<ProxyResponse> {
    state.proxy.handle_proxy(query.target()).await
}

/// Handler for DELETE /cache?url=
///
/// Answers 204 when an entry was removed and 404 otherwise.
pub async fn purge_handler(
    State(state): State<AppState>,
    Query(query): Query<TargetQuery>,
) -> Result<StatusCode> {
    let url = query.target();
    if state.proxy.handle_purge(url).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ProxyError::NotFound(url.to_string()))
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let total_entries = state.proxy.store().len().await;
    Json(StatsResponse::new(state.proxy.stats(), total_entries))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheEntry;
    use axum::body::Bytes;
    use axum::http::HeaderMap;
    use std::time::Instant;

    fn test_state() -> AppState {
        AppState::from_config(&crate::config::Config::default()).unwrap()
    }

    fn query(url: Option<&str>) -> Query<TargetQuery> {
        Query(TargetQuery {
            url: url.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_proxy_handler_missing_url() {
        let result = proxy_handler(State(test_state()), query(None)).await;
        assert!(matches!(result, Err(ProxyError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_purge_handler() {
        let state = test_state();
        let entry = CacheEntry::new(Bytes::from_static(b"v"), HeaderMap::new(), 60, Instant::now());
        state.proxy.store().set("http://example.test/", entry).await;

        let result = purge_handler(State(state.clone()), query(Some("http://example.test/"))).await;
        assert_eq!(result.unwrap(), StatusCode::NO_CONTENT);

        let result = purge_handler(State(state), query(Some("http://example.test/"))).await;
        assert!(matches!(result, Err(ProxyError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_purge_handler_missing_url() {
        let result = purge_handler(State(test_state()), query(Some(""))).await;
        assert!(matches!(result, Err(ProxyError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.total_entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
