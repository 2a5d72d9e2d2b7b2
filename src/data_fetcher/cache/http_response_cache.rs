use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::LazyLock;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::types::{CacheStats, CachedHttpResponse, PersistedCache, PersistedCacheEntry};
use crate::constants::HTTP_RESPONSE_CACHE_CAPACITY;
use crate::error::AppError;

// LRU cache structure for HTTP responses with TTL support, keyed by URL without the API key
pub static HTTP_RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CachedHttpResponse>>> =
    LazyLock::new(|| {
        RwLock::new(LruCache::new(
            NonZeroUsize::new(HTTP_RESPONSE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        ))
    });

/// Caches HTTP response data with TTL
#[instrument(skip(url, data), fields(url = %url))]
pub async fn cache_http_response(url: String, data: String, ttl_seconds: u64) {
    debug!(
        "Caching HTTP response: url={}, data_size={}, ttl={}s",
        url,
        data.len(),
        ttl_seconds
    );

    let cached_data = CachedHttpResponse::new(data, ttl_seconds);
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    cache.put(url, cached_data);
}

/// Retrieves cached HTTP response if it's not expired
#[instrument(skip(url), fields(url = %url))]
pub async fn get_cached_http_response(url: &str) -> Option<String> {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;

    match cache.get(url) {
        Some(entry) if !entry.is_expired() => {
            debug!(
                "Cache hit for HTTP response: url={}, expires_in={:?}",
                url,
                entry.time_until_expiry()
            );
            Some(entry.data.clone())
        }
        Some(entry) => {
            warn!(
                "Removing expired HTTP response cache entry: url={}, age={:?}",
                url,
                entry.age()
            );
            cache.pop(url);
            None
        }
        None => {
            debug!("Cache miss for HTTP response: url={}", url);
            None
        }
    }
}

/// Gets current size and capacity of the HTTP response cache
pub async fn get_http_response_cache_stats() -> CacheStats {
    let cache = HTTP_RESPONSE_CACHE.read().await;
    CacheStats {
        size: cache.len(),
        capacity: cache.cap().get(),
    }
}

/// Clears all HTTP response cache entries
pub async fn clear_http_response_cache() {
    HTTP_RESPONSE_CACHE.write().await.clear();
}

/// Loads entries saved by an earlier run into the cache.
///
/// A missing file is not an error. Expired entries are skipped, and entries
/// already in memory are kept. Returns the number of entries loaded.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_http_response_cache(path: &Path) -> Result<usize, AppError> {
    if !tokio::fs::try_exists(path).await? {
        debug!("No persisted HTTP response cache");
        return Ok(0);
    }

    let content = tokio::fs::read_to_string(path).await?;
    let persisted: PersistedCache = serde_json::from_str(&content).map_err(|e| {
        AppError::cache_file_error(format!("Invalid cache file {}: {e}", path.display()))
    })?;

    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    let mut loaded = 0;
    // Entries are stored least recently used first, so putting them in order
    // leaves the most recently used entry at the front
    for entry in persisted.entries {
        if entry.response.is_expired() || cache.contains(&entry.url) {
            continue;
        }
        cache.put(entry.url, entry.response);
        loaded += 1;
    }

    info!("Loaded {loaded} cached HTTP responses");
    Ok(loaded)
}

/// Writes the unexpired cache entries to `path`, creating its directory.
/// Returns the number of entries written.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn persist_http_response_cache(path: &Path) -> Result<usize, AppError> {
    let persisted = {
        let cache = HTTP_RESPONSE_CACHE.read().await;
        PersistedCache {
            entries: cache
                .iter()
                .rev()
                .filter(|(_, response)| !response.is_expired())
                .map(|(url, response)| PersistedCacheEntry {
                    url: url.clone(),
                    response: response.clone(),
                })
                .collect(),
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string(&persisted).map_err(|e| {
        AppError::cache_file_error(format!("Could not serialize cache: {e}"))
    })?;
    tokio::fs::write(path, content).await?;

    debug!("Persisted {} HTTP responses", persisted.entries.len());
    Ok(persisted.entries.len())
}
