//! Country-reference API adapter
//!
//! Queries a REST country-data endpoint by name: an exact (`fullText=true`)
//! lookup first, then one partial retry when the exact form finds nothing.
//! Shapes currency, language and timezone fields into [`CountryInfo`],
//! including the preformatted time difference against Japan.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::category::TravelInfoCategory;
use crate::domain::country::{
    format_time_difference, parse_utc_offset_minutes, CountryInfo, CurrencyInfo,
};
use crate::domain::geo;
use crate::domain::resolver;
use crate::domain::source::{
    FetchOptions, FetchedData, SourceMetadata, SourceType, TravelInfoPayload, TravelInfoSource,
};
use crate::domain::DomainError;
use crate::infrastructure::http::HttpClientTrait;

const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
const SOURCE_NAME: &str = "REST Countries";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RETRIES: u32 = 2;
const RETRY_DELAY: Duration = Duration::from_secs(1);

const RELIABILITY_OFFICIAL: u8 = 90;
const RELIABILITY_FALLBACK: u8 = 50;

const SUPPORTED_CATEGORIES: [TravelInfoCategory; 1] = [TravelInfoCategory::Basic];

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: CountryNameRecord,
    #[serde(default)]
    currencies: BTreeMap<String, CurrencyRecord>,
    #[serde(default)]
    languages: BTreeMap<String, String>,
    #[serde(default)]
    timezones: Vec<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    subregion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountryNameRecord {
    common: String,
    #[serde(default)]
    official: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrencyRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
}

/// Country reference source over a REST country-data API
#[derive(Debug)]
pub struct CountryApiSource<C: HttpClientTrait> {
    client: C,
    base_url: String,
    timeout: Duration,
}

impl<C: HttpClientTrait> CountryApiSource<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn query_url(&self, name: &str, full_text: bool) -> String {
        let encoded = urlencoding::encode(name);

        if full_text {
            format!("{}/name/{encoded}?fullText=true", self.base_url)
        } else {
            format!("{}/name/{encoded}", self.base_url)
        }
    }

    /// The name sent upstream: an explicit country option wins, otherwise
    /// the resolved country's English name, otherwise the raw destination
    /// (upstream planning steps already emit English country names).
    fn upstream_name(destination: &str, options: &FetchOptions) -> String {
        if let Some(country) = options.country.as_deref() {
            return country.to_string();
        }

        resolver::resolve(destination, None)
            .and_then(geo::english_country_name)
            .map(str::to_string)
            .unwrap_or_else(|| destination.to_string())
    }

    fn default_result(name: &str) -> FetchedData {
        tracing::info!("No country data for '{name}', using default country info");

        FetchedData {
            data: TravelInfoPayload::Country(CountryInfo {
                country_name: name.to_string(),
                official_name: name.to_string(),
                currency: CurrencyInfo {
                    code: "N/A".to_string(),
                    name: "不明".to_string(),
                    symbol: String::new(),
                },
                languages: Vec::new(),
                timezone: String::new(),
                time_difference: "不明".to_string(),
                region: None,
                subregion: None,
            }),
            source: SourceMetadata::new(
                SourceType::Fallback,
                format!("{SOURCE_NAME}（デフォルト）"),
                DEFAULT_BASE_URL,
                RELIABILITY_FALLBACK,
            ),
        }
    }

    /// One query with bounded retry; 404 surfaces as `NotFound` untouched so
    /// the caller can fall back to the partial form.
    async fn query_with_retry(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<serde_json::Value, DomainError> {
        let mut last_error = DomainError::network("no attempts made", 0);

        for attempt in 0..=MAX_RETRIES {
            let result = tokio::time::timeout(timeout, self.client.get_json(url))
                .await
                .unwrap_or_else(|_| {
                    Err(DomainError::network(
                        format!("request timed out after {}s", timeout.as_secs()),
                        1,
                    ))
                });

            match result {
                Ok(value) => return Ok(value),
                Err(e @ DomainError::NotFound { .. }) => return Err(e),
                Err(e) if e.is_transient() => {
                    tracing::warn!(
                        "Country query attempt {}/{} failed: {e}",
                        attempt + 1,
                        MAX_RETRIES + 1
                    );
                    last_error = e;

                    if attempt < MAX_RETRIES {
                        tokio::time::sleep(RETRY_DELAY * (attempt + 1)).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::network(
            format!("country query failed: {last_error}"),
            MAX_RETRIES + 1,
        ))
    }

    fn build_country_info(record: CountryRecord) -> CountryInfo {
        let currency = record
            .currencies
            .into_iter()
            .next()
            .map(|(code, c)| CurrencyInfo {
                code,
                name: c.name.unwrap_or_else(|| "不明".to_string()),
                symbol: c.symbol.unwrap_or_default(),
            })
            .unwrap_or_else(|| CurrencyInfo {
                code: "N/A".to_string(),
                name: "不明".to_string(),
                symbol: String::new(),
            });

        let timezone = record.timezones.first().cloned().unwrap_or_default();
        let time_difference = parse_utc_offset_minutes(&timezone)
            .map(format_time_difference)
            .unwrap_or_else(|| "不明".to_string());

        CountryInfo {
            official_name: record
                .name
                .official
                .unwrap_or_else(|| record.name.common.clone()),
            country_name: record.name.common,
            currency,
            languages: record.languages.into_values().collect(),
            timezone,
            time_difference,
            region: record.region,
            subregion: record.subregion,
        }
    }
}

#[async_trait]
impl<C: HttpClientTrait> TravelInfoSource for CountryApiSource<C> {
    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn supported_categories(&self) -> &[TravelInfoCategory] {
        &SUPPORTED_CATEGORIES
    }

    async fn fetch(
        &self,
        destination: &str,
        options: &FetchOptions,
    ) -> Result<FetchedData, DomainError> {
        let name = Self::upstream_name(destination, options);
        let timeout = options.timeout.unwrap_or(self.timeout);
        tracing::debug!("Fetching country info for: {name}");

        let exact_url = self.query_url(&name, true);
        let value = match self.query_with_retry(&exact_url, timeout).await {
            Ok(value) => value,
            Err(DomainError::NotFound { .. }) => {
                // Exact name unknown upstream; one partial (fuzzy) retry
                let partial_url = self.query_url(&name, false);

                match self.query_with_retry(&partial_url, timeout).await {
                    Ok(value) => value,
                    Err(DomainError::NotFound { .. }) => return Ok(Self::default_result(&name)),
                    Err(e) => return Err(e),
                }
            }
            Err(e) => return Err(e),
        };

        let records: Vec<CountryRecord> = match serde_json::from_value(value) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Unexpected country payload for '{name}': {e}");
                return Ok(Self::default_result(&name));
            }
        };

        let Some(record) = records.into_iter().next() else {
            return Ok(Self::default_result(&name));
        };

        let info = Self::build_country_info(record);
        tracing::info!(
            "Fetched country info for {name} ({}, {})",
            info.currency.code,
            info.time_difference
        );

        Ok(FetchedData {
            data: TravelInfoPayload::Country(info),
            source: SourceMetadata::new(
                SourceType::OfficialApi,
                SOURCE_NAME,
                self.query_url(&name, false),
                RELIABILITY_OFFICIAL,
            ),
        })
    }
}
