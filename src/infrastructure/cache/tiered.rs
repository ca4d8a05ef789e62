//! Two-tier cache composition
//!
//! Memory first, file-backed tier on miss. File-tier hits are promoted into
//! memory with their remaining TTL so the expiry horizon carries over.
//! Writes go to both tiers; a persistent-tier write failure degrades to a
//! warning rather than failing the set.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::cache::{
    calculate_hit_rate, now_millis, Cache, CacheStats, RawCacheEntry,
};
use crate::domain::DomainError;

/// Memory tier over a persisted tier
#[derive(Debug)]
pub struct TieredCache {
    memory: Arc<dyn Cache>,
    persistent: Arc<dyn Cache>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TieredCache {
    pub fn new(memory: Arc<dyn Cache>, persistent: Arc<dyn Cache>) -> Self {
        Self {
            memory,
            persistent,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl Cache for TieredCache {
    async fn get_raw(&self, key: &str) -> Result<Option<RawCacheEntry>, DomainError> {
        if let Some(entry) = self.memory.get_raw(key).await? {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Some(entry));
        }

        if let Some(entry) = self.persistent.get_raw(key).await? {
            // Promote with the remaining TTL so expiry carries over
            if let Some(remaining) = entry.remaining_ttl(now_millis()) {
                if let Err(e) = self.memory.set_raw(key, &entry.data, remaining).await {
                    tracing::warn!("Failed to promote cache entry '{key}': {e}");
                }
            }

            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Some(entry));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        self.memory.set_raw(key, value, ttl).await?;

        if let Err(e) = self.persistent.set_raw(key, value, ttl).await {
            tracing::warn!("Persistent cache write failed for '{key}': {e}");
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let in_memory = self.memory.delete(key).await?;
        let on_disk = self.persistent.delete(key).await?;
        Ok(in_memory || on_disk)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        let mut keys = self.memory.keys(pattern).await?;

        for key in self.persistent.keys(pattern).await? {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        Ok(keys)
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<usize, DomainError> {
        let in_memory = self.memory.delete_pattern(pattern).await?;
        let on_disk = self.persistent.delete_pattern(pattern).await?;
        Ok(in_memory.max(on_disk))
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.memory.clear().await?;
        self.persistent.clear().await
    }

    async fn size(&self) -> Result<usize, DomainError> {
        let in_memory = self.memory.size().await?;
        let on_disk = self.persistent.size().await?;
        Ok(in_memory.max(on_disk))
    }

    async fn sweep(&self) -> Result<usize, DomainError> {
        let in_memory = self.memory.sweep().await?;
        let on_disk = self.persistent.sweep().await?;
        Ok(in_memory + on_disk)
    }

    async fn stats(&self) -> Result<CacheStats, DomainError> {
        let memory = self.memory.stats().await?;
        let persistent = self.persistent.stats().await?;
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        Ok(CacheStats {
            hits,
            misses,
            size: memory.size.max(persistent.size),
            oldest_entry: match (memory.oldest_entry, persistent.oldest_entry) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            },
            newest_entry: match (memory.newest_entry, persistent.newest_entry) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, b) => a.or(b),
            },
            hit_rate: calculate_hit_rate(hits, misses),
            estimated_memory_bytes: memory
                .estimated_memory_bytes
                .max(persistent.estimated_memory_bytes),
        })
    }
}
