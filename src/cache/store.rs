//! Cache Store Module
//!
//! URL-keyed response storage with per-entry expiry and lazy eviction.

use std::collections::HashMap;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Concurrent URL → response map.
///
/// Every operation takes the internal lock for a single map access only, so
/// callers never hold it across I/O. Expired entries are removed when a
/// lookup observes them; there is no background sweep.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns a copy of the fresh entry for `key`, evicting it if stale.
    pub async fn get(&self, key: &str) -> Option<CacheEntry> {
        self.get_at(key, Instant::now()).await
    }

    /// Same as [`CacheStore::get`], observed at `now`.
    pub async fn get_at(&self, key: &str, now: Instant) -> Option<CacheEntry> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired_at(now) => return Some(entry.clone()),
                Some(_) => {}
            }
        }

        // The entry may have been replaced between dropping the read lock and
        // taking the write lock; only a still-stale entry is removed.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| entry.is_expired_at(now)) {
            entries.remove(key);
            debug!(url = %key, "evicted expired entry");
        }
        None
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`.
    pub async fn set(&self, key: impl Into<String>, entry: CacheEntry) {
        self.entries.write().await.insert(key.into(), entry);
    }

    // == Delete ==
    /// Removes the entry for `key`, returning whether one was present.
    pub async fn delete(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    // == Length ==
    /// Number of entries held, including stale ones not yet looked up.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
