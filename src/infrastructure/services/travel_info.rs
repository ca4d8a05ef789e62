//! Travel-information aggregation orchestrator
//!
//! The sole inbound surface of this crate: fans out to the source adapters
//! for each requested category, applies the cache-first policy with the
//! per-category TTL table, and returns an independent status per category.
//! A failing category never fails the overall call.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;

use crate::domain::cache::{
    category_ttl, generate_cache_key, generate_cache_key_pattern, Cache, CacheExt, CacheStats,
};
use crate::domain::category::TravelInfoCategory;
use crate::domain::source::{FetchOptions, FetchedData, SourceMetadata, TravelInfoPayload};
use crate::domain::{DomainError, TravelInfoSource};

/// Per-category result of a [`TravelInfoService::resolve_travel_info`] call
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryOutcome {
    Success {
        data: TravelInfoPayload,
        source: SourceMetadata,
        from_cache: bool,
    },
    Error {
        kind: &'static str,
        message: String,
    },
}

impl CategoryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Aggregation orchestrator over the registered source adapters
#[derive(Debug)]
pub struct TravelInfoService {
    sources: Vec<Arc<dyn TravelInfoSource>>,
    cache: Arc<dyn Cache>,
}

impl TravelInfoService {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self {
            sources: Vec::new(),
            cache,
        }
    }

    /// Registers a source adapter; the first adapter supporting a category
    /// serves it
    pub fn with_source(mut self, source: Arc<dyn TravelInfoSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Resolves travel information for a destination, one outcome per
    /// requested category. Categories are fetched concurrently and fail
    /// independently; an empty request falls back to the default set.
    pub async fn resolve_travel_info(
        &self,
        destination: &str,
        categories: &[TravelInfoCategory],
        options: &FetchOptions,
    ) -> HashMap<TravelInfoCategory, CategoryOutcome> {
        let mut requested: Vec<TravelInfoCategory> = if categories.is_empty() {
            TravelInfoCategory::DEFAULT.to_vec()
        } else {
            categories.to_vec()
        };
        requested.sort_unstable();
        requested.dedup();

        tracing::info!(
            "Resolving travel info for {destination} ({} categories)",
            requested.len()
        );

        let lookups = requested.into_iter().map(|category| async move {
            (
                category,
                self.resolve_category(destination, category, options).await,
            )
        });

        futures::future::join_all(lookups).await.into_iter().collect()
    }

    async fn resolve_category(
        &self,
        destination: &str,
        category: TravelInfoCategory,
        options: &FetchOptions,
    ) -> CategoryOutcome {
        let key = generate_cache_key(destination, category, &Self::option_components(options));

        match self.cache.get::<FetchedData>(&key).await {
            Ok(Some(entry)) => {
                tracing::debug!("Cache hit for {key}");
                return CategoryOutcome::Success {
                    data: entry.data.data,
                    source: entry.data.source,
                    from_cache: true,
                };
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Cache lookup failed for {key}: {e}"),
        }

        let Some(source) = self
            .sources
            .iter()
            .find(|s| s.supported_categories().contains(&category))
        else {
            return CategoryOutcome::Error {
                kind: "NOT_FOUND",
                message: format!("no source registered for category '{category}'"),
            };
        };

        match source.fetch(destination, options).await {
            Ok(fetched) => {
                if let Err(e) = self.cache.set(&key, &fetched, category_ttl(category)).await {
                    tracing::warn!("Failed to cache {key}: {e}");
                }

                CategoryOutcome::Success {
                    data: fetched.data,
                    source: fetched.source,
                    from_cache: false,
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Category '{category}' failed for {destination} via {}: {e}",
                    source.source_name()
                );

                CategoryOutcome::Error {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Option fields that shape the response become key components, so the
    /// same destination with different options caches separately
    fn option_components(options: &FetchOptions) -> BTreeMap<String, String> {
        let mut components = BTreeMap::new();

        if let Some(country) = options.country.as_deref() {
            components.insert("country".to_string(), country.to_string());
        }

        if let Some((start, end)) = options.dates.as_ref() {
            components.insert("dates".to_string(), format!("{start},{end}"));
        }

        components
    }

    /// Drops every cached category for one destination
    pub async fn invalidate_destination(&self, destination: &str) -> Result<usize, DomainError> {
        let pattern = generate_cache_key_pattern(Some(destination), None);
        self.cache.delete_pattern(&pattern).await
    }

    /// Drops one category across every destination
    pub async fn invalidate_category(
        &self,
        category: TravelInfoCategory,
    ) -> Result<usize, DomainError> {
        let pattern = format!("{}*", generate_cache_key_pattern(None, Some(category)));
        self.cache.delete_pattern(&pattern).await
    }

    /// Category-cache statistics
    pub async fn cache_stats(&self) -> Result<CacheStats, DomainError> {
        self.cache.stats().await
    }
}
