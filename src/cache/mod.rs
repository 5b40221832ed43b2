//! Cache Module
//!
//! In-memory response cache keyed by target URL, with TTLs taken from the
//! origin's `Cache-Control` header.

mod entry;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use policy::{CacheControl, MAX_AGE_CAP_SECS};
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;
