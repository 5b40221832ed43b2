//! Origin Client
//!
//! Fetches target URLs on a cache miss.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};

use crate::error::{ProxyError, Result};

/// Connect timeout for origin requests, independent of the overall timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// A fully read origin response.
#[derive(Debug, Clone)]
pub struct OriginResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// HTTP client used to reach origins.
#[derive(Debug, Clone)]
pub struct OriginClient {
    client: reqwest::Client,
}

impl OriginClient {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self { client })
    }

    /// Issues a plain GET and reads the whole body into memory.
    ///
    /// Any transport failure, including one while reading the body, is
    /// reported as [`ProxyError::OriginUnreachable`]. Non-2xx statuses are
    /// not errors; they are handed back as-is.
    pub async fn fetch(&self, url: &str) -> Result<OriginResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProxyError::OriginUnreachable(format!("Failed to fetch origin: {}", e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            ProxyError::OriginUnreachable(format!("Failed to read origin response: {}", e))
        })?;

        Ok(OriginResponse {
            status,
            headers,
            body,
        })
    }
}
