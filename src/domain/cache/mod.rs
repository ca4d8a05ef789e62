//! Cache domain - Generic caching abstraction layer

mod config;
mod key;
mod repository;

pub use config::{
    calculate_hit_rate, category_ttl, category_ttl_ms, category_ttl_seconds, CacheStats,
    FileCacheDefaults, MemoryCacheDefaults, EXCHANGE_RATE_TTL_MS, FILE_CACHE_DEFAULTS,
    MEMORY_CACHE_DEFAULTS,
};
pub use key::{
    generate_cache_key, generate_cache_key_pattern, generate_composite_cache_key,
    normalize_destination, CACHE_KEY_PREFIX, CACHE_KEY_SEPARATOR,
};
pub use repository::{pattern_regex, Cache, CacheEntry, CacheExt, RawCacheEntry};

pub(crate) use repository::now_millis;

#[cfg(test)]
pub use repository::mock::MockCache;
