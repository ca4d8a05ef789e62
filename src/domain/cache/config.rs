//! Cache TTL policy and statistics
//!
//! TTLs are stored in milliseconds; the whole-seconds accessor floors so a
//! cached entry's advertised freshness is never overstated.

use serde::{Deserialize, Serialize};

use crate::domain::category::TravelInfoCategory;

const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

/// Exchange rates move hourly regardless of which category carries them
pub const EXCHANGE_RATE_TTL_MS: u64 = HOUR_MS;

/// In-memory tier defaults
#[derive(Debug, Clone)]
pub struct MemoryCacheDefaults {
    pub max_entries: u64,
    pub sweep_interval_ms: u64,
    pub default_ttl_ms: u64,
}

pub const MEMORY_CACHE_DEFAULTS: MemoryCacheDefaults = MemoryCacheDefaults {
    max_entries: 1000,
    sweep_interval_ms: MINUTE_MS,
    default_ttl_ms: HOUR_MS,
};

/// File-backed tier defaults
#[derive(Debug, Clone)]
pub struct FileCacheDefaults {
    pub cache_dir: &'static str,
    pub default_ttl_ms: u64,
}

pub const FILE_CACHE_DEFAULTS: FileCacheDefaults = FileCacheDefaults {
    cache_dir: ".cache/travel-info",
    default_ttl_ms: HOUR_MS,
};

/// Per-category TTL, tuned to how quickly each kind of data goes stale.
/// Country metadata barely changes; advisories follow the feed's cadence;
/// climate is weather-volatile.
pub fn category_ttl_ms(category: TravelInfoCategory) -> u64 {
    use TravelInfoCategory::*;

    match category {
        Basic => DAY_MS,
        Safety => 6 * HOUR_MS,
        Climate => 30 * MINUTE_MS,
        Visa => 7 * DAY_MS,
        Manner => 7 * DAY_MS,
        Transport => DAY_MS,
        LocalFood => 7 * DAY_MS,
        Souvenir => 7 * DAY_MS,
        Events => 6 * HOUR_MS,
        Technology => 7 * DAY_MS,
        Healthcare => 7 * DAY_MS,
        Restrooms => 7 * DAY_MS,
        Smoking => 7 * DAY_MS,
        Alcohol => 7 * DAY_MS,
    }
}

/// Category TTL as a `Duration`
pub fn category_ttl(category: TravelInfoCategory) -> std::time::Duration {
    std::time::Duration::from_millis(category_ttl_ms(category))
}

/// Category TTL in whole seconds, floored
pub fn category_ttl_seconds(category: TravelInfoCategory) -> u64 {
    category_ttl_ms(category) / 1000
}

/// Hit rate as `hits / (hits + misses)`, 0 when no lookups have occurred
pub fn calculate_hit_rate(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        return 0.0;
    }

    hits as f64 / total as f64
}

/// Point-in-time cache statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    /// Millisecond epoch timestamp of the oldest stored entry
    pub oldest_entry: Option<u64>,
    pub newest_entry: Option<u64>,
    pub hit_rate: f64,
    pub estimated_memory_bytes: u64,
}

impl CacheStats {
    pub fn empty() -> Self {
        Self {
            hits: 0,
            misses: 0,
            size: 0,
            oldest_entry: None,
            newest_entry: None,
            hit_rate: 0.0,
            estimated_memory_bytes: 0,
        }
    }
}

impl Default for CacheStats {
    fn default() -> Self {
        Self::empty()
    }
}
