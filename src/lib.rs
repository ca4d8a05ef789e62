//! Travel Information Aggregation Service
//!
//! Resolves free-text destinations into structured travel-safety and
//! country-reference data by querying heterogeneous upstream sources:
//! - a government open-data safety feed (XML),
//! - a country-reference REST API (JSON),
//! - an optional AI risk-disambiguation step for sub-country destinations,
//!
//! reconciling partial failures per category and caching results in a
//! two-tier (memory + file) cache with category-specific TTLs.
//!
//! The sole integration point for callers is
//! [`TravelInfoService::resolve_travel_info`].

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    DangerLevel, DomainError, FetchOptions, SafetyInfo, TravelInfoCategory, TravelInfoPayload,
};
pub use infrastructure::services::{CategoryOutcome, TravelInfoService};

use std::sync::Arc;
use std::time::Duration;

use domain::RiskClassifier;
use infrastructure::cache::{CacheFactory, InMemoryCache};
use infrastructure::http::HttpClient;
use infrastructure::risk::GeminiRiskClassifier;
use infrastructure::sources::{CountryApiSource, SafetyFeedSource};
use tracing::info;

/// Creates the travel-info service with the default configuration
pub async fn create_travel_info_service() -> Result<TravelInfoService, DomainError> {
    create_travel_info_service_with_config(&AppConfig::default()).await
}

/// Creates the travel-info service: category cache (with its sweep task),
/// source adapters over a shared HTTP client, and the risk classifier from
/// environment credentials.
pub async fn create_travel_info_service_with_config(
    config: &AppConfig,
) -> Result<TravelInfoService, DomainError> {
    let (cache, _sweeper) = CacheFactory::create_with_sweeper(&config.cache).await?;
    info!("Category cache backend: {:?}", config.cache.backend);

    let timeout = Duration::from_secs(config.sources.request_timeout_secs);
    let http = HttpClient::with_timeout(timeout);

    let classifier = Arc::new(GeminiRiskClassifier::from_env(http.clone()));
    if classifier.is_enabled() {
        info!("Risk classifier enabled");
    }

    // The safety adapter keeps its own short-TTL cache, matching the feed's
    // publish cadence; it is independent of the category cache above
    let feed_cache = Arc::new(InMemoryCache::new());

    let mut safety = SafetyFeedSource::new(http.clone(), classifier, feed_cache);
    if let Some(base_url) = config.sources.safety_feed_base_url.as_deref() {
        safety = safety.with_base_url(base_url);
    }

    let mut country = CountryApiSource::new(http);
    if let Some(base_url) = config.sources.country_api_base_url.as_deref() {
        country = country.with_base_url(base_url);
    }

    Ok(TravelInfoService::new(cache)
        .with_source(Arc::new(safety))
        .with_source(Arc::new(country)))
}
