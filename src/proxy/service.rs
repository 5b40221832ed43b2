//! Proxy Service
//!
//! Hit/miss decisions for proxied URLs and cache purges. Nothing in here
//! knows about routes or query strings; the HTTP layer only translates.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::cache::{CacheControl, CacheEntry, CacheStats, CacheStore, StatsSnapshot};
use crate::error::{ProxyError, Result};
use crate::proxy::origin::OriginClient;

/// Header carrying `HIT` or `MISS`.
pub const X_PROXY_CACHE: &str = "x-proxy-cache";

/// Header carrying the remaining lifetime of a hit, in seconds.
pub const X_CACHE_TTL_REMAINING: &str = "x-cache-ttl-remaining";

/// Where a proxied response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }
}

/// Result of [`ProxyService::handle_proxy`].
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: StatusCode,
    /// Origin headers exactly as received (or as stored, on a hit)
    pub headers: HeaderMap,
    pub body: Bytes,
    pub cache_status: CacheStatus,
    /// Whole seconds left on a hit; `None` on a miss
    pub ttl_remaining: Option<i64>,
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        let mut headers = self.headers;
        headers.insert(
            X_PROXY_CACHE,
            HeaderValue::from_static(self.cache_status.as_str()),
        );
        if let Some(ttl) = self.ttl_remaining {
            headers.insert(X_CACHE_TTL_REMAINING, HeaderValue::from(ttl));
        }

        (self.status, headers, self.body).into_response()
    }
}

/// Proxy and purge operations over an injected store.
#[derive(Debug, Clone)]
pub struct ProxyService {
    store: Arc<CacheStore>,
    origin: OriginClient,
    stats: Arc<CacheStats>,
}

impl ProxyService {
    pub fn new(store: Arc<CacheStore>, origin: OriginClient) -> Self {
        Self {
            store,
            origin,
            stats: Arc::new(CacheStats::new()),
        }
    }

    /// The store this service reads and writes.
    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    /// Current counter values.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // == Proxy ==
    /// Serves `url` from the cache, or from the origin on a miss.
    ///
    /// A hit is always answered with 200 and never touches the network. A
    /// miss forwards the origin's status, headers and body, and stores them
    /// when the origin's `Cache-Control` allows it.
    pub async fn handle_proxy(&self, url: &str) -> Result<ProxyResponse> {
        let url = require_url(url)?;

        if let Some(entry) = self.store.get(url).await {
            let ttl_remaining = entry.ttl_remaining_at(Instant::now());
            self.stats.record_hit();
            debug!(url = %url, ttl_remaining, "cache hit");

            return Ok(ProxyResponse {
                status: StatusCode::OK,
                headers: entry.headers,
                body: entry.body,
                cache_status: CacheStatus::Hit,
                ttl_remaining: Some(ttl_remaining),
            });
        }

        self.stats.record_miss();
        debug!(url = %url, "cache miss, fetching origin");

        let origin = self.origin.fetch(url).await.inspect_err(|e| {
            warn!(url = %url, error = %e, "origin fetch failed");
        })?;

        let policy = CacheControl::parse(&cache_control_value(&origin.headers));
        if policy.storable {
            let entry = CacheEntry::new(
                origin.body.clone(),
                origin.headers.clone(),
                policy.max_age_secs,
                Instant::now(),
            );
            self.store.set(url, entry).await;
            self.stats.record_store();
            debug!(url = %url, max_age = policy.max_age_secs, "stored origin response");
        }

        Ok(ProxyResponse {
            status: origin.status,
            headers: origin.headers,
            body: origin.body,
            cache_status: CacheStatus::Miss,
            ttl_remaining: None,
        })
    }

    // == Purge ==
    /// Removes the cached entry for `url`, returning whether one existed.
    pub async fn handle_purge(&self, url: &str) -> Result<bool> {
        let url = require_url(url)?;

        let existed = self.store.delete(url).await;
        if existed {
            self.stats.record_purge();
        }
        debug!(url = %url, existed, "purge");
        Ok(existed)
    }
}

fn require_url(url: &str) -> Result<&str> {
    if url.is_empty() {
        return Err(ProxyError::BadRequest("Missing url parameter".to_string()));
    }
    Ok(url)
}

/// All `Cache-Control` lines joined into one comma-separated value.
fn cache_control_value(headers: &HeaderMap) -> String {
    headers
        .get_all(header::CACHE_CONTROL)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect::<Vec<_>>()
        .join(", ")
}
