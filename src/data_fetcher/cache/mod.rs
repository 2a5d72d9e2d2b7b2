pub mod http_response_cache;
pub mod types;

pub use http_response_cache::{
    cache_http_response, clear_http_response_cache, get_cached_http_response,
    get_http_response_cache_stats, load_http_response_cache, persist_http_response_cache,
};
pub use types::{CacheStats, CachedHttpResponse, PersistedCache, PersistedCacheEntry};
