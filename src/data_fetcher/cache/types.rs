//! Cache data structures with TTL support

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw HTTP response body cached together with its time-to-live.
///
/// The timestamp is wall-clock time so entries stay meaningful after being
/// written to disk and read back by a later run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedHttpResponse {
    pub data: String,
    pub cached_at: DateTime<Utc>,
    pub ttl_seconds: u64,
}

impl CachedHttpResponse {
    /// Creates a new cached HTTP response entry
    pub fn new(data: String, ttl_seconds: u64) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
            ttl_seconds,
        }
    }

    /// Time since the entry was stored. A clock that moved backwards counts as zero.
    pub fn age(&self) -> Duration {
        (Utc::now() - self.cached_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// Checks if the cached data is expired
    pub fn is_expired(&self) -> bool {
        self.age() > Duration::from_secs(self.ttl_seconds)
    }

    /// Gets the remaining time until expiration
    pub fn time_until_expiry(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds).saturating_sub(self.age())
    }
}

/// One entry of the on-disk cache file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedCacheEntry {
    pub url: String,
    pub response: CachedHttpResponse,
}

/// Contents of the on-disk cache file, least recently used entry first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersistedCache {
    #[serde(default)]
    pub entries: Vec<PersistedCacheEntry>,
}

/// Snapshot of cache occupancy for debug output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
}
