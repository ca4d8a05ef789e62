//! File-backed cache implementation
//!
//! One JSON file per key under a cache directory. Filenames are the
//! urlencoded key (round-trippable back to the key for pattern queries);
//! file contents are the same `RawCacheEntry` shape the in-memory tier
//! holds, so entries survive process restarts. All I/O goes through
//! `tokio::fs`, keeping the blocking filesystem work off the async
//! scheduler.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::cache::{
    calculate_hit_rate, now_millis, pattern_regex, Cache, CacheStats, RawCacheEntry,
    FILE_CACHE_DEFAULTS,
};
use crate::domain::DomainError;

const ENTRY_SUFFIX: &str = ".json";

/// Configuration for the file-backed cache
#[derive(Debug, Clone)]
pub struct FileCacheConfig {
    /// Directory holding one file per entry
    pub dir: PathBuf,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(FILE_CACHE_DEFAULTS.cache_dir),
        }
    }
}

impl FileCacheConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Persisted cache tier
#[derive(Debug)]
pub struct FileCacheStore {
    config: FileCacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl FileCacheStore {
    /// Creates the store, ensuring the cache directory exists
    pub async fn new(config: FileCacheConfig) -> Result<Self, DomainError> {
        tokio::fs::create_dir_all(&config.dir).await.map_err(|e| {
            DomainError::cache(format!(
                "Failed to create cache directory {}: {e}",
                config.dir.display()
            ))
        })?;

        Ok(Self {
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        })
    }

    /// Creates the store under the given directory
    pub async fn with_dir(dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        Self::new(FileCacheConfig::new(dir)).await
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let encoded = urlencoding::encode(key);
        self.config.dir.join(format!("{encoded}{ENTRY_SUFFIX}"))
    }

    fn key_from_path(path: &Path) -> Option<String> {
        let name = path.file_name()?.to_str()?;
        let encoded = name.strip_suffix(ENTRY_SUFFIX)?;
        urlencoding::decode(encoded).ok().map(|k| k.into_owned())
    }

    async fn read_entry(&self, path: &Path) -> Result<Option<RawCacheEntry>, DomainError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::cache(format!(
                    "Failed to read cache file {}: {e}",
                    path.display()
                )));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                // A corrupt entry is unrecoverable; drop it and miss
                tracing::warn!("Discarding corrupt cache file {}: {e}", path.display());
                let _ = tokio::fs::remove_file(path).await;
                Ok(None)
            }
        }
    }

    async fn entry_paths(&self) -> Result<Vec<PathBuf>, DomainError> {
        let mut dir = tokio::fs::read_dir(&self.config.dir).await.map_err(|e| {
            DomainError::cache(format!(
                "Failed to read cache directory {}: {e}",
                self.config.dir.display()
            ))
        })?;

        let mut paths = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| DomainError::cache(format!("Failed to list cache directory: {e}")))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }

        Ok(paths)
    }
}

#[async_trait]
impl Cache for FileCacheStore {
    async fn get_raw(&self, key: &str) -> Result<Option<RawCacheEntry>, DomainError> {
        let path = self.entry_path(key);

        match self.read_entry(&path).await? {
            Some(entry) if !entry.is_expired(now_millis()) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(entry))
            }
            // Expired files stay on disk until the sweep unlinks them
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let entry = RawCacheEntry::new(value, ttl);
        let json = serde_json::to_vec(&entry)
            .map_err(|e| DomainError::cache(format!("Failed to serialize cache entry: {e}")))?;

        let path = self.entry_path(key);
        // Write-then-rename keeps partially written entries invisible
        let tmp = path.with_extension("tmp");

        tokio::fs::write(&tmp, &json).await.map_err(|e| {
            DomainError::cache(format!("Failed to write cache file {}: {e}", tmp.display()))
        })?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            DomainError::cache(format!("Failed to commit cache file {}: {e}", path.display()))
        })?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        match tokio::fs::remove_file(self.entry_path(key)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::cache(format!("Failed to delete cache file: {e}"))),
        }
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        let regex = pattern_regex(pattern)?;
        let now = now_millis();
        let mut keys = Vec::new();

        for path in self.entry_paths().await? {
            let Some(key) = Self::key_from_path(&path) else {
                continue;
            };

            if !regex.is_match(&key) {
                continue;
            }

            if let Some(entry) = self.read_entry(&path).await? {
                if !entry.is_expired(now) {
                    keys.push(key);
                }
            }
        }

        Ok(keys)
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<usize, DomainError> {
        let regex = pattern_regex(pattern)?;
        let mut deleted = 0;

        for path in self.entry_paths().await? {
            let Some(key) = Self::key_from_path(&path) else {
                continue;
            };

            if regex.is_match(&key) && tokio::fs::remove_file(&path).await.is_ok() {
                deleted += 1;
            }
        }

        Ok(deleted)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        for path in self.entry_paths().await? {
            let _ = tokio::fs::remove_file(&path).await;
        }
        Ok(())
    }

    async fn size(&self) -> Result<usize, DomainError> {
        Ok(self.entry_paths().await?.len())
    }

    async fn sweep(&self) -> Result<usize, DomainError> {
        let now = now_millis();
        let mut removed = 0;

        for path in self.entry_paths().await? {
            if let Some(entry) = self.read_entry(&path).await? {
                if entry.is_expired(now) && tokio::fs::remove_file(&path).await.is_ok() {
                    removed += 1;
                }
            }
        }

        Ok(removed)
    }

    async fn stats(&self) -> Result<CacheStats, DomainError> {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        let mut size = 0;
        let mut oldest = None;
        let mut newest = None;
        let mut bytes = 0u64;

        for path in self.entry_paths().await? {
            let Some(entry) = self.read_entry(&path).await? else {
                continue;
            };

            size += 1;
            bytes += entry.data.len() as u64;
            oldest = Some(oldest.map_or(entry.stored_at_ms, |o: u64| o.min(entry.stored_at_ms)));
            newest = Some(newest.map_or(entry.stored_at_ms, |n: u64| n.max(entry.stored_at_ms)));
        }

        Ok(CacheStats {
            hits,
            misses,
            size,
            oldest_entry: oldest,
            newest_entry: newest,
            hit_rate: calculate_hit_rate(hits, misses),
            estimated_memory_bytes: bytes,
        })
    }
}
