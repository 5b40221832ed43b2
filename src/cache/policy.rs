//! Cache-Control Policy Module
//!
//! Decides whether an origin response may be stored, and for how long.

use std::num::IntErrorKind;

/// Largest lifetime honored, in seconds (2^31). Larger `max-age` values,
/// including ones too long to fit an integer, are clamped to it.
pub const MAX_AGE_CAP_SECS: u64 = 1 << 31;

/// Outcome of evaluating a `Cache-Control` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheControl {
    /// Lifetime in seconds; zero whenever the response is not storable
    pub max_age_secs: u64,
    /// Whether the response may be cached
    pub storable: bool,
}

impl CacheControl {
    /// A response that must not be cached.
    pub const NOT_STORABLE: Self = Self {
        max_age_secs: 0,
        storable: false,
    };

    // == Parse ==
    /// Evaluates a raw `Cache-Control` header value.
    ///
    /// `no-store` anywhere wins over everything else. Otherwise the first
    /// `max-age=N` with a strictly positive integer `N` makes the response
    /// storable for `N` seconds, clamped to [`MAX_AGE_CAP_SECS`]. Anything
    /// else is not storable.
    pub fn parse(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::NOT_STORABLE;
        }

        let directives: Vec<String> = value
            .split(',')
            .map(|d| d.trim().to_ascii_lowercase())
            .collect();

        if directives.iter().any(|d| d == "no-store") {
            return Self::NOT_STORABLE;
        }

        directives
            .iter()
            .filter_map(|d| d.strip_prefix("max-age="))
            .filter_map(parse_delta_seconds)
            .find(|secs| *secs > 0)
            .map(|secs| Self {
                max_age_secs: (secs as u64).min(MAX_AGE_CAP_SECS),
                storable: true,
            })
            .unwrap_or(Self::NOT_STORABLE)
    }

    /// Tuple form `(max_age_secs, storable)`.
    pub fn as_tuple(&self) -> (u64, bool) {
        (self.max_age_secs, self.storable)
    }
}

fn parse_delta_seconds(value: &str) -> Option<i64> {
    match value.parse::<i64>() {
        Ok(secs) => Some(secs),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(_) => None,
    }
}
