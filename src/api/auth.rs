//! API Key Middleware
//!
//! Rejects every request whose key does not match the configured secret.

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use super::handlers::AppState;
use crate::error::ProxyError;
use crate::models::ApiKeyQuery;

/// Header checked first for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Checks `X-API-Key`, falling back to the `api_key` query parameter.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ProxyError> {
    let presented = match req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        Some(key) => Some(key.to_string()),
        None => Query::<ApiKeyQuery>::try_from_uri(req.uri())
            .ok()
            .and_then(|Query(q)| q.api_key),
    };

    if presented.as_deref() != Some(&*state.api_key) {
        debug!(path = %req.uri().path(), "rejected request with invalid API key");
        return Err(ProxyError::Unauthorized);
    }

    Ok(next.run(req).await)
}
