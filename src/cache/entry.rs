//! Cache Entry Module
//!
//! Defines one cached origin response together with its expiry instant.

use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::http::HeaderMap;

use crate::cache::policy::MAX_AGE_CAP_SECS;

// == Cache Entry ==
/// A stored origin response.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw response payload
    pub body: Bytes,
    /// Origin headers, copied by value (multi-value and order preserved)
    pub headers: HeaderMap,
    /// Instant from which the entry is stale
    pub expiry: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that stays fresh for `max_age_secs` from `now`.
    ///
    /// Lifetimes past what `Instant` can represent are clamped to
    /// [`MAX_AGE_CAP_SECS`]; if even that overflows, the entry is born stale.
    pub fn new(body: Bytes, headers: HeaderMap, max_age_secs: u64, now: Instant) -> Self {
        let expiry = now
            .checked_add(Duration::from_secs(max_age_secs))
            .or_else(|| now.checked_add(Duration::from_secs(MAX_AGE_CAP_SECS)))
            .unwrap_or(now);

        Self {
            body,
            headers,
            expiry,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now`.
    ///
    /// `now == expiry` counts as expired, so a served hit never has a zero
    /// remaining lifetime at the instant it was checked.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expiry
    }

    // == Time To Live ==
    /// Remaining lifetime at `now` in whole seconds, truncated toward zero.
    ///
    /// Negative once `now` has passed the expiry.
    pub fn ttl_remaining_at(&self, now: Instant) -> i64 {
        if self.expiry >= now {
            secs_i64(self.expiry - now)
        } else {
            -secs_i64(now - self.expiry)
        }
    }
}

fn secs_i64(duration: Duration) -> i64 {
    i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
}
