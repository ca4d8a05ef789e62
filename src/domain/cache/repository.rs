//! Cache trait definition

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::cache::CacheStats;
use crate::domain::DomainError;

/// Milliseconds since the Unix epoch
pub(crate) fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// A stored entry as the cache tiers persist it: the serialized payload plus
/// the timestamps that decide its freshness. Both tiers round-trip exactly
/// this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCacheEntry {
    /// Serialized JSON payload
    pub data: String,
    /// Millisecond epoch timestamp of the write
    pub stored_at_ms: u64,
    pub ttl_ms: u64,
}

impl RawCacheEntry {
    pub fn new(data: impl Into<String>, ttl: Duration) -> Self {
        Self {
            data: data.into(),
            stored_at_ms: now_millis(),
            ttl_ms: ttl.as_millis() as u64,
        }
    }

    /// Logically expired entries read as misses; the sweep removes them.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.stored_at_ms) > self.ttl_ms
    }

    /// Time left before expiry, `None` once expired
    pub fn remaining_ttl(&self, now_ms: u64) -> Option<Duration> {
        let expires_at = self.stored_at_ms + self.ttl_ms;
        (expires_at > now_ms).then(|| Duration::from_millis(expires_at - now_ms))
    }
}

/// A typed view of a cache entry handed to callers
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub data: T,
    pub stored_at_ms: u64,
    pub ttl_ms: u64,
}

/// Converts a `*`-wildcard key pattern into an anchored regex
pub fn pattern_regex(pattern: &str) -> Result<regex::Regex, DomainError> {
    let escaped: Vec<String> = pattern.split('*').map(|s| regex::escape(s)).collect();
    let body = escaped.join(".*");

    regex::Regex::new(&format!("^{body}$"))
        .map_err(|e| DomainError::cache(format!("Invalid pattern '{pattern}': {e}")))
}

/// Generic cache trait for key-value operations with TTL support
///
/// This trait uses JSON strings internally to be dyn-compatible; use
/// [`CacheExt`] for typed get/set operations. Lookups of absent or expired
/// keys count as misses; expired entries are purged by [`Cache::sweep`],
/// never by readers.
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// Gets a raw entry, `None` (and a counted miss) if absent or expired
    async fn get_raw(&self, key: &str) -> Result<Option<RawCacheEntry>, DomainError>;

    /// Stores a raw JSON value, overwriting any previous entry for the key
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Deletes a key, reporting whether it existed
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Lists live keys matching a `*`-wildcard pattern
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError>;

    /// Deletes all keys matching a `*`-wildcard pattern
    async fn delete_pattern(&self, pattern: &str) -> Result<usize, DomainError>;

    /// Removes every entry
    async fn clear(&self) -> Result<(), DomainError>;

    /// Approximate number of stored entries, expired ones included
    async fn size(&self) -> Result<usize, DomainError>;

    /// Purges expired entries (and enforces any capacity bound), returning
    /// how many entries were removed
    async fn sweep(&self) -> Result<usize, DomainError>;

    /// Point-in-time statistics
    async fn stats(&self) -> Result<CacheStats, DomainError>;
}

/// Extension trait providing typed get/set operations
pub trait CacheExt: Cache {
    /// Gets a typed entry from the cache
    fn get<'a, V>(
        &'a self,
        key: &'a str,
    ) -> impl std::future::Future<Output = Result<Option<CacheEntry<V>>, DomainError>> + Send
    where
        V: DeserializeOwned + Send,
    {
        async move {
            match self.get_raw(key).await? {
                Some(raw) => {
                    let data: V = serde_json::from_str(&raw.data).map_err(|e| {
                        DomainError::cache(format!("Failed to deserialize cache value: {e}"))
                    })?;

                    Ok(Some(CacheEntry {
                        data,
                        stored_at_ms: raw.stored_at_ms,
                        ttl_ms: raw.ttl_ms,
                    }))
                }
                None => Ok(None),
            }
        }
    }

    /// Sets a typed value in the cache with a TTL
    fn set<'a, V>(
        &'a self,
        key: &'a str,
        value: &'a V,
        ttl: Duration,
    ) -> impl std::future::Future<Output = Result<(), DomainError>> + Send
    where
        V: Serialize + Send + Sync,
    {
        async move {
            let data = serde_json::to_string(value).map_err(|e| {
                DomainError::cache(format!("Failed to serialize cache value: {e}"))
            })?;
            self.set_raw(key, &data, ttl).await
        }
    }
}

// Blanket implementation for all types implementing Cache
impl<T: Cache + ?Sized> CacheExt for T {}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use crate::domain::cache::calculate_hit_rate;

    /// Mock cache for testing
    #[derive(Debug, Default)]
    pub struct MockCache {
        entries: Mutex<HashMap<String, RawCacheEntry>>,
        hits: AtomicU64,
        misses: AtomicU64,
        error: Mutex<Option<String>>,
    }

    impl MockCache {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        /// Back-dates an entry so expiry paths can be tested without sleeping
        pub fn age_entry(&self, key: &str, age: Duration) {
            let mut entries = self.entries.lock().unwrap();
            if let Some(entry) = entries.get_mut(key) {
                entry.stored_at_ms = entry.stored_at_ms.saturating_sub(age.as_millis() as u64);
            }
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::cache(error));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get_raw(&self, key: &str) -> Result<Option<RawCacheEntry>, DomainError> {
            self.check_error()?;
            let entries = self.entries.lock().unwrap();

            match entries.get(key) {
                Some(entry) if !entry.is_expired(now_millis()) => {
                    self.hits.fetch_add(1, Ordering::SeqCst);
                    Ok(Some(entry.clone()))
                }
                _ => {
                    self.misses.fetch_add(1, Ordering::SeqCst);
                    Ok(None)
                }
            }
        }

        async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
            self.check_error()?;
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), RawCacheEntry::new(value, ttl));
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().remove(key).is_some())
        }

        async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
            self.check_error()?;
            let regex = pattern_regex(pattern)?;
            let now = now_millis();
            let entries = self.entries.lock().unwrap();

            Ok(entries
                .iter()
                .filter(|(k, e)| !e.is_expired(now) && regex.is_match(k))
                .map(|(k, _)| k.clone())
                .collect())
        }

        async fn delete_pattern(&self, pattern: &str) -> Result<usize, DomainError> {
            self.check_error()?;
            let regex = pattern_regex(pattern)?;
            let mut entries = self.entries.lock().unwrap();

            let keys: Vec<String> = entries.keys().filter(|k| regex.is_match(k)).cloned().collect();
            for key in &keys {
                entries.remove(key);
            }

            Ok(keys.len())
        }

        async fn clear(&self) -> Result<(), DomainError> {
            self.check_error()?;
            self.entries.lock().unwrap().clear();
            Ok(())
        }

        async fn size(&self) -> Result<usize, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().len())
        }

        async fn sweep(&self) -> Result<usize, DomainError> {
            self.check_error()?;
            let now = now_millis();
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired(now));
            Ok(before - entries.len())
        }

        async fn stats(&self) -> Result<CacheStats, DomainError> {
            self.check_error()?;
            let entries = self.entries.lock().unwrap();
            let hits = self.hits.load(Ordering::SeqCst);
            let misses = self.misses.load(Ordering::SeqCst);

            Ok(CacheStats {
                hits,
                misses,
                size: entries.len(),
                oldest_entry: entries.values().map(|e| e.stored_at_ms).min(),
                newest_entry: entries.values().map(|e| e.stored_at_ms).max(),
                hit_rate: calculate_hit_rate(hits, misses),
                estimated_memory_bytes: entries
                    .iter()
                    .map(|(k, e)| (k.len() + e.data.len()) as u64)
                    .sum(),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_cache_set_get() {
            let cache = MockCache::new();
            cache
                .set("key1", &"value1", Duration::from_secs(60))
                .await
                .unwrap();

            let entry: CacheEntry<String> = cache.get("key1").await.unwrap().unwrap();
            assert_eq!(entry.data, "value1");
            assert_eq!(entry.ttl_ms, 60_000);
        }

        #[tokio::test]
        async fn test_mock_cache_expired_entry_is_a_miss() {
            let cache = MockCache::new();
            cache
                .set("key1", &"value1", Duration::from_secs(60))
                .await
                .unwrap();
            cache.age_entry("key1", Duration::from_secs(120));

            let entry: Option<CacheEntry<String>> = cache.get("key1").await.unwrap();
            assert!(entry.is_none());

            let stats = cache.stats().await.unwrap();
            assert_eq!(stats.misses, 1);
            // The reader did not purge; the entry is still stored
            assert_eq!(stats.size, 1);

            assert_eq!(cache.sweep().await.unwrap(), 1);
            assert_eq!(cache.size().await.unwrap(), 0);
        }

        #[tokio::test]
        async fn test_mock_cache_delete_pattern() {
            let cache = MockCache::new();
            for key in ["travel-info:paris:safety", "travel-info:paris:basic", "travel-info:tokyo:basic"] {
                cache.set(key, &"data", Duration::from_secs(60)).await.unwrap();
            }

            let deleted = cache.delete_pattern("travel-info:paris:*").await.unwrap();
            assert_eq!(deleted, 2);
            assert_eq!(cache.size().await.unwrap(), 1);
        }

        #[tokio::test]
        async fn test_mock_cache_with_error() {
            let cache = MockCache::new().with_error("boom");
            let result: Result<Option<CacheEntry<String>>, _> = cache.get("key").await;
            assert!(result.is_err());
        }
    }
}
