//! Cache factory for runtime selection

use std::sync::Arc;
use std::time::Duration;

use crate::config::{CacheBackend, CacheSettings};
use crate::domain::cache::Cache;
use crate::domain::DomainError;

use super::file_store::{FileCacheConfig, FileCacheStore};
use super::in_memory::{InMemoryCache, InMemoryCacheConfig};
use super::tiered::TieredCache;

/// Builds cache backends from configuration
pub struct CacheFactory;

impl CacheFactory {
    /// Creates the configured cache backend
    pub async fn create(settings: &CacheSettings) -> Result<Arc<dyn Cache>, DomainError> {
        let memory_config = InMemoryCacheConfig::default()
            .with_max_entries(settings.max_entries)
            .with_sweep_interval(Duration::from_secs(settings.sweep_interval_secs.max(1)));

        match settings.backend {
            CacheBackend::Memory => {
                Ok(Arc::new(InMemoryCache::with_config(memory_config)))
            }
            CacheBackend::File => {
                let store = FileCacheStore::new(FileCacheConfig::new(&settings.dir)).await?;
                Ok(Arc::new(store))
            }
            CacheBackend::Tiered => {
                let memory = Arc::new(InMemoryCache::with_config(memory_config));
                let file = FileCacheStore::new(FileCacheConfig::new(&settings.dir)).await?;
                Ok(Arc::new(TieredCache::new(memory, Arc::new(file))))
            }
        }
    }

    /// Creates the configured backend and starts its periodic sweep
    pub async fn create_with_sweeper(
        settings: &CacheSettings,
    ) -> Result<(Arc<dyn Cache>, tokio::task::JoinHandle<()>), DomainError> {
        let cache = Self::create(settings).await?;
        let interval = Duration::from_secs(settings.sweep_interval_secs.max(1));
        let sweeper = spawn_sweeper(cache.clone(), interval);
        Ok((cache, sweeper))
    }
}

/// Spawns the periodic sweep task: purges expired entries and enforces the
/// capacity bound on a fixed cadence.
pub fn spawn_sweeper(cache: Arc<dyn Cache>, interval: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick fires immediately; skip it so a fresh cache is not
        // swept before anything is stored
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match cache.sweep().await {
                Ok(removed) if removed > 0 => {
                    tracing::debug!(removed, "Cache sweep removed entries");
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Cache sweep failed: {e}"),
            }
        }
    })
}
