//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;

/// Default port the proxy listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Default shared secret expected from clients.
pub const DEFAULT_API_KEY: &str = "default-api-key";

/// Default overall timeout for one origin fetch, in seconds.
pub const DEFAULT_ORIGIN_TIMEOUT: u64 = 10;

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Shared secret clients must present
    pub api_key: String,
    /// Overall timeout for an origin request, in seconds
    pub origin_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `API_KEY` - Shared secret for the auth middleware (default: "default-api-key")
    /// - `ORIGIN_TIMEOUT` - Origin request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            api_key: env::var("API_KEY")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            origin_timeout: env::var("ORIGIN_TIMEOUT")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_ORIGIN_TIMEOUT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            api_key: DEFAULT_API_KEY.to_string(),
            origin_timeout: DEFAULT_ORIGIN_TIMEOUT,
        }
    }
}
