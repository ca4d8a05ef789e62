//! Domain layer - Core business logic and entities

pub mod cache;
pub mod category;
pub mod country;
pub mod error;
pub mod geo;
pub mod resolver;
pub mod risk;
pub mod safety;
pub mod source;

pub use cache::{
    calculate_hit_rate, category_ttl, category_ttl_ms, category_ttl_seconds, Cache, CacheEntry,
    CacheExt, CacheStats, RawCacheEntry,
};
pub use category::TravelInfoCategory;
pub use country::{CountryInfo, CurrencyInfo};
pub use error::DomainError;
pub use geo::CountryCode;
pub use risk::{
    assess_risk_heuristic, DisabledRiskClassifier, RiskAssessment, RiskClassifier, RiskContext,
};
pub use safety::{DangerLevel, Embassy, EmergencyContact, HighRiskRegion, SafetyInfo};
pub use source::{
    FetchOptions, FetchedData, SourceMetadata, SourceType, TravelInfoPayload, TravelInfoSource,
};
