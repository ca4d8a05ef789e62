//! Source contracts shared by every travel-information adapter

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::TravelInfoCategory;
use crate::domain::country::CountryInfo;
use crate::domain::safety::SafetyInfo;
use crate::domain::DomainError;

/// Provenance class of a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    OfficialApi,
    AiGenerated,
    Fallback,
}

/// Provenance attached to every successful fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub source_type: SourceType,
    pub source_name: String,
    pub source_url: String,
    pub retrieved_at: DateTime<Utc>,
    /// 0-100 confidence weight; metadata only, never used for routing
    pub reliability_score: u8,
}

impl SourceMetadata {
    pub fn new(
        source_type: SourceType,
        source_name: impl Into<String>,
        source_url: impl Into<String>,
        reliability_score: u8,
    ) -> Self {
        Self {
            source_type,
            source_name: source_name.into(),
            source_url: source_url.into(),
            retrieved_at: Utc::now(),
            reliability_score: reliability_score.min(100),
        }
    }
}

/// Per-call options forwarded to adapters
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Explicit country name, used to disambiguate colliding city names
    pub country: Option<String>,
    /// Overrides the adapter's default timeout
    pub timeout: Option<std::time::Duration>,
    /// Travel dates as `YYYY-MM-DD`, keyed into the cache when present
    pub dates: Option<(String, String)>,
}

impl FetchOptions {
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.dates = Some((start.into(), end.into()));
        self
    }
}

/// The data an adapter can produce, tagged by shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TravelInfoPayload {
    Safety(SafetyInfo),
    Country(CountryInfo),
}

impl TravelInfoPayload {
    pub fn as_safety(&self) -> Option<&SafetyInfo> {
        match self {
            Self::Safety(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_country(&self) -> Option<&CountryInfo> {
        match self {
            Self::Country(info) => Some(info),
            _ => None,
        }
    }
}

/// A successful fetch: the payload plus its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedData {
    pub data: TravelInfoPayload,
    pub source: SourceMetadata,
}

/// Capability implemented by every travel-information source adapter
///
/// Expected upstream failures surface as `DomainError` values; adapters that
/// define a fallback payload return it as a low-reliability success instead.
#[async_trait]
pub trait TravelInfoSource: Send + Sync + Debug {
    /// Human-readable source name, attached to metadata and logs
    fn source_name(&self) -> &'static str;

    /// Categories this adapter can serve
    fn supported_categories(&self) -> &[TravelInfoCategory];

    /// Fetches data for a destination, resolving it internally
    async fn fetch(
        &self,
        destination: &str,
        options: &FetchOptions,
    ) -> Result<FetchedData, DomainError>;

    /// Cheap upstream health probe
    async fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Scripted source for orchestrator tests
    #[derive(Debug)]
    pub struct MockSource {
        name: &'static str,
        categories: Vec<TravelInfoCategory>,
        result: Option<FetchedData>,
        error: Option<String>,
        calls: std::sync::atomic::AtomicU32,
    }

    impl MockSource {
        pub fn new(name: &'static str, categories: Vec<TravelInfoCategory>) -> Self {
            Self {
                name,
                categories,
                result: None,
                error: None,
                calls: std::sync::atomic::AtomicU32::new(0),
            }
        }

        pub fn with_result(mut self, result: FetchedData) -> Self {
            self.result = Some(result);
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn call_count(&self) -> u32 {
            self.calls.load(std::sync::atomic::Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TravelInfoSource for MockSource {
        fn source_name(&self) -> &'static str {
            self.name
        }

        fn supported_categories(&self) -> &[TravelInfoCategory] {
            &self.categories
        }

        async fn fetch(
            &self,
            _destination: &str,
            _options: &FetchOptions,
        ) -> Result<FetchedData, DomainError> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::network(error.clone(), 3));
            }

            self.result
                .clone()
                .ok_or_else(|| DomainError::not_found("no mock result configured"))
        }
    }
}
