//! In-memory cache implementation using moka

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::cache::{
    calculate_hit_rate, now_millis, pattern_regex, Cache, CacheStats, RawCacheEntry,
    MEMORY_CACHE_DEFAULTS,
};
use crate::domain::DomainError;

/// Configuration for the in-memory cache
#[derive(Debug, Clone)]
pub struct InMemoryCacheConfig {
    /// Maximum number of entries; the sweep evicts oldest-stored-first
    /// beyond this bound
    pub max_entries: u64,
    /// How often the background sweep runs
    pub sweep_interval: Duration,
}

impl Default for InMemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: MEMORY_CACHE_DEFAULTS.max_entries,
            sweep_interval: Duration::from_millis(MEMORY_CACHE_DEFAULTS.sweep_interval_ms),
        }
    }
}

impl InMemoryCacheConfig {
    /// Sets the maximum entry count
    pub fn with_max_entries(mut self, max_entries: u64) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Sets the sweep interval
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}

/// Thread-safe in-memory cache tier
///
/// Entries carry their own stored-at/TTL pair; readers treat expired entries
/// as misses but leave removal to the periodic sweep, which also enforces
/// the capacity bound by evicting the oldest-stored entries first.
#[derive(Debug)]
pub struct InMemoryCache {
    cache: MokaCache<String, RawCacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
    config: InMemoryCacheConfig,
}

impl InMemoryCache {
    /// Creates a new in-memory cache with default configuration
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    /// Creates a new in-memory cache with the given configuration
    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        Self {
            cache: MokaCache::builder().build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            config,
        }
    }

    /// Snapshot of all entries, taken off the async path
    async fn snapshot(&self) -> Result<Vec<(String, RawCacheEntry)>, DomainError> {
        self.cache.run_pending_tasks().await;

        let cache = self.cache.clone();
        tokio::task::spawn_blocking(move || {
            cache
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v))
                .collect()
        })
        .await
        .map_err(|e| DomainError::cache(format!("Failed to iterate cache: {e}")))
    }

    /// The configured sweep cadence
    pub fn sweep_interval(&self) -> Duration {
        self.config.sweep_interval
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_raw(&self, key: &str) -> Result<Option<RawCacheEntry>, DomainError> {
        match self.cache.get(key).await {
            Some(entry) if !entry.is_expired(now_millis()) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(entry))
            }
            // Expired entries read as misses; the sweep purges them
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        self.cache
            .insert(key.to_string(), RawCacheEntry::new(value, ttl))
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        let regex = pattern_regex(pattern)?;
        let now = now_millis();

        Ok(self
            .snapshot()
            .await?
            .into_iter()
            .filter(|(key, entry)| !entry.is_expired(now) && regex.is_match(key))
            .map(|(key, _)| key)
            .collect())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<usize, DomainError> {
        let regex = pattern_regex(pattern)?;
        let mut deleted = 0;

        for (key, _) in self.snapshot().await? {
            if regex.is_match(&key) {
                self.cache.remove(&key).await;
                deleted += 1;
            }
        }

        Ok(deleted)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn size(&self) -> Result<usize, DomainError> {
        self.cache.run_pending_tasks().await;
        Ok(self.cache.entry_count() as usize)
    }

    async fn sweep(&self) -> Result<usize, DomainError> {
        let now = now_millis();
        let snapshot = self.snapshot().await?;
        let mut removed = 0;

        let mut live: Vec<(String, u64)> = Vec::with_capacity(snapshot.len());

        for (key, entry) in snapshot {
            if entry.is_expired(now) {
                self.cache.remove(&key).await;
                removed += 1;
            } else {
                live.push((key, entry.stored_at_ms));
            }
        }

        // Capacity bound: evict oldest-stored-first
        if live.len() as u64 > self.config.max_entries {
            live.sort_by_key(|&(_, stored_at)| stored_at);
            let overflow = live.len() - self.config.max_entries as usize;

            for (key, _) in live.into_iter().take(overflow) {
                self.cache.remove(&key).await;
                removed += 1;
            }
        }

        Ok(removed)
    }

    async fn stats(&self) -> Result<CacheStats, DomainError> {
        let snapshot = self.snapshot().await?;
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        Ok(CacheStats {
            hits,
            misses,
            size: snapshot.len(),
            oldest_entry: snapshot.iter().map(|(_, e)| e.stored_at_ms).min(),
            newest_entry: snapshot.iter().map(|(_, e)| e.stored_at_ms).max(),
            hit_rate: calculate_hit_rate(hits, misses),
            estimated_memory_bytes: snapshot
                .iter()
                .map(|(k, e)| (k.len() + e.data.len()) as u64)
                .sum(),
        })
    }
}
