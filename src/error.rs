//! Error types for the proxy cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Proxy Error Enum ==
/// Unified error type for the proxy cache.
///
/// Every variant is terminal for the request that produced it; nothing is
/// retried internally.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// A required request parameter is missing or empty
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The origin could not be reached or its body could not be read
    #[error("Origin unreachable: {0}")]
    OriginUnreachable(String),

    /// No cache entry exists for the given URL
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API key is missing or does not match
    #[error("Unauthorized")]
    Unauthorized,
}

impl ProxyError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::OriginUnreachable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::NotFound(_) => StatusCode::NOT_FOUND,
            ProxyError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy cache.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ProxyError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::OriginUnreachable("x".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ProxyError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ProxyError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_error_body_is_plain_text() {
        let response = ProxyError::BadRequest("Missing url parameter".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Bad request: Missing url parameter");
    }
}
