//! Government safety-information feed adapter
//!
//! Fetches per-country advisory XML from the foreign-ministry open-data
//! feed, resolves the free-text destination to the feed's country code, and
//! shapes the result into [`SafetyInfo`]. The feed republishes every five
//! minutes, so the adapter keeps its own short-TTL cache independent of the
//! orchestrator's category cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::cache::{Cache, CacheExt};
use crate::domain::category::TravelInfoCategory;
use crate::domain::geo::{self, CountryCode};
use crate::domain::resolver;
use crate::domain::risk::{assess_risk_heuristic, RiskClassifier, RiskContext};
use crate::domain::safety::{
    default_emergency_contacts, default_warnings, DangerLevel, SafetyInfo,
};
use crate::domain::source::{
    FetchOptions, FetchedData, SourceMetadata, SourceType, TravelInfoPayload, TravelInfoSource,
};
use crate::domain::DomainError;
use crate::infrastructure::http::HttpClientTrait;

const DEFAULT_OPENDATA_BASE_URL: &str = "https://www.ezairyu.mofa.go.jp/opendata";
const ANZEN_BASE_URL: &str = "https://www.anzen.mofa.go.jp";
const SOURCE_NAME: &str = "外務省海外安全情報";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
/// Matches the feed's five-minute publish cadence
const FEED_CACHE_TTL: Duration = Duration::from_secs(300);
const MAX_RETRIES: u32 = 2;
const RETRY_DELAY: Duration = Duration::from_secs(1);

const RELIABILITY_OFFICIAL: u8 = 95;
const RELIABILITY_FALLBACK: u8 = 50;

const MAX_WARNINGS: usize = 5;

const SUPPORTED_CATEGORIES: [TravelInfoCategory; 1] = [TravelInfoCategory::Safety];

/// Boolean-like feed field: `1`/`Y` mean set, anything else means unset
#[derive(Debug, Default, Clone, Copy)]
struct FeedFlag(bool);

impl FeedFlag {
    fn is_set(&self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for FeedFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(FeedFlag(matches!(raw.trim(), "1" | "Y" | "y")))
    }
}

/// The feed's per-country `<opendata>` document, reduced to the fields the
/// adapter consumes
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OpenDataDocument {
    risk_level1: FeedFlag,
    risk_level2: FeedFlag,
    risk_level3: FeedFlag,
    risk_level4: FeedFlag,
    infection_level1: FeedFlag,
    infection_level2: FeedFlag,
    infection_level3: FeedFlag,
    infection_level4: FeedFlag,
    risk_lead: Option<String>,
    risk_sub_text: Option<String>,
    mail: Vec<FeedNotice>,
    widearea_spot: Vec<FeedNotice>,
}

/// A repeatable `mail` or `wideareaSpot` notice; only the title feeds the
/// warnings list
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FeedNotice {
    title: Option<String>,
}

impl OpenDataDocument {
    /// Evacuation advisories take precedence over lower levels
    fn danger_level(&self) -> DangerLevel {
        if self.risk_level4.is_set() {
            DangerLevel::new(4)
        } else if self.risk_level3.is_set() {
            DangerLevel::new(3)
        } else if self.risk_level2.is_set() {
            DangerLevel::new(2)
        } else if self.risk_level1.is_set() {
            DangerLevel::new(1)
        } else {
            DangerLevel::NONE
        }
    }

    fn infection_level(&self) -> DangerLevel {
        if self.infection_level4.is_set() {
            DangerLevel::new(4)
        } else if self.infection_level3.is_set() {
            DangerLevel::new(3)
        } else if self.infection_level2.is_set() {
            DangerLevel::new(2)
        } else if self.infection_level1.is_set() {
            DangerLevel::new(1)
        } else {
            DangerLevel::NONE
        }
    }

    /// Risk lead first, then spot and mail titles, deduplicated and capped.
    /// Falls back to generic advisories when the feed supplies nothing.
    fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = Vec::new();

        if let Some(lead) = self.risk_lead.as_deref() {
            let lead = lead.trim();
            if !lead.is_empty() {
                warnings.push(lead.to_string());
            }
        }

        for notice in self.widearea_spot.iter().chain(self.mail.iter()) {
            if warnings.len() >= MAX_WARNINGS {
                break;
            }

            if let Some(title) = notice.title.as_deref() {
                let title = title.trim();
                if !title.is_empty() && !warnings.iter().any(|w| w == title) {
                    warnings.push(title.to_string());
                }
            }
        }

        if warnings.is_empty() {
            return default_warnings();
        }

        warnings.truncate(MAX_WARNINGS);
        warnings
    }
}

/// Safety-information source backed by the government open-data feed
#[derive(Debug)]
pub struct SafetyFeedSource<C: HttpClientTrait> {
    client: C,
    classifier: Arc<dyn RiskClassifier>,
    cache: Arc<dyn Cache>,
    base_url: String,
    timeout: Duration,
    cache_ttl: Duration,
}

impl<C: HttpClientTrait> SafetyFeedSource<C> {
    pub fn new(client: C, classifier: Arc<dyn RiskClassifier>, cache: Arc<dyn Cache>) -> Self {
        Self {
            client,
            classifier,
            cache,
            base_url: DEFAULT_OPENDATA_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: FEED_CACHE_TTL,
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

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    fn feed_url(&self, code: CountryCode) -> String {
        format!("{}/country/{}A.xml", self.base_url, code)
    }

    fn cache_key(code: CountryCode) -> String {
        format!("safety-feed:{code}")
    }

    /// Deep link into the safety pages for this country
    fn source_url(code: CountryCode) -> String {
        format!(
            "{ANZEN_BASE_URL}/info/pcinfectionspothazardinfo_{}.html",
            code.trimmed()
        )
    }

    fn official_metadata(code: CountryCode) -> SourceMetadata {
        SourceMetadata::new(
            SourceType::OfficialApi,
            SOURCE_NAME,
            Self::source_url(code),
            RELIABILITY_OFFICIAL,
        )
    }

    /// Fallback payload when the destination cannot be resolved or the feed
    /// has no entry: level 0 with generic advice, marked low-reliability.
    fn default_result(destination: &str) -> FetchedData {
        tracing::info!("Using default safety info for: {destination}");

        let mut info = SafetyInfo::with_levels(DangerLevel::NONE, DangerLevel::NONE);
        info.warnings = vec![
            "最新の渡航情報は外務省海外安全ホームページでご確認ください".to_string(),
            "海外旅行保険への加入を強くお勧めします".to_string(),
            "「たびレジ」への登録をお勧めします".to_string(),
        ];
        info.emergency_contacts = default_emergency_contacts();

        FetchedData {
            data: TravelInfoPayload::Safety(info),
            source: SourceMetadata::new(
                SourceType::Fallback,
                format!("{SOURCE_NAME}（デフォルト）"),
                ANZEN_BASE_URL,
                RELIABILITY_FALLBACK,
            ),
        }
    }

    /// Payload for a structurally unreadable feed document
    fn parse_error_info(code: CountryCode) -> SafetyInfo {
        let mut info = SafetyInfo::with_levels(DangerLevel::NONE, DangerLevel::NONE);
        info.warnings = vec![
            "データの解析中にエラーが発生しました。最新の情報を外務省ホームページでご確認ください。"
                .to_string(),
        ];
        info.emergency_contacts = geo::emergency_contacts(code)
            .cloned()
            .unwrap_or_else(default_emergency_contacts);
        info.nearest_embassy = geo::embassy_for(code).cloned();
        info
    }

    /// Fetches the country document with bounded retry and linear backoff.
    /// `Ok(None)` means the feed has no entry for this code (HTTP 404).
    async fn fetch_feed_document(&self, code: CountryCode, timeout: Duration) -> Result<Option<String>, DomainError> {
        let url = self.feed_url(code);
        let mut last_error = DomainError::network("no attempts made", 0);

        for attempt in 0..=MAX_RETRIES {
            let result = tokio::time::timeout(timeout, self.client.get_text(&url))
                .await
                .unwrap_or_else(|_| {
                    Err(DomainError::network(
                        format!("request timed out after {}s", timeout.as_secs()),
                        1,
                    ))
                })
                .and_then(|body| {
                    // An HTML error page served with status 200 is not a feed
                    // document; treat it like any other transient failure
                    if !body.trim_start().starts_with('<') || !body.contains("<opendata") {
                        return Err(DomainError::invalid_response(format!(
                            "response for {code} does not look like a feed document"
                        )));
                    }
                    Ok(body)
                });

            match result {
                Ok(body) => return Ok(Some(body)),
                Err(DomainError::NotFound { .. }) => {
                    tracing::warn!("Feed has no entry for country: {code}");
                    return Ok(None);
                }
                Err(e) if e.is_transient() => {
                    tracing::warn!(
                        "Feed fetch attempt {}/{} failed: {e}",
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
            format!("failed to fetch feed for {code}: {last_error}"),
            MAX_RETRIES + 1,
        ))
    }

    /// Shapes a feed document into `SafetyInfo`, disambiguating sub-region
    /// risk when the destination is narrower than the country.
    async fn build_safety_info(
        &self,
        xml: &str,
        code: CountryCode,
        destination: &str,
    ) -> SafetyInfo {
        let document: OpenDataDocument = match quick_xml::de::from_str(xml) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!("Feed parse error for {code}: {e}");
                return Self::parse_error_info(code);
            }
        };

        let feed_level = document.danger_level();
        let lead = document.risk_lead.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let sub_text = document.risk_sub_text.as_deref().map(str::trim).filter(|s| !s.is_empty());

        let mut specific_level = feed_level;
        let mut max_country_level = feed_level;
        let mut high_risk_regions = Vec::new();

        let country_name = geo::country_name(code);
        let needs_disambiguation = feed_level > DangerLevel::NONE
            && country_name.is_some_and(|name| destination != name && !destination.contains(name));

        if needs_disambiguation {
            let country_name = country_name.unwrap_or_default();
            let advisory_text = format!(
                "{}\n{}",
                lead.unwrap_or_default(),
                sub_text.unwrap_or_default()
            );

            let assessment = if self.classifier.is_enabled() {
                match self
                    .classifier
                    .classify(&RiskContext {
                        advisory_text: advisory_text.clone(),
                        destination: destination.to_string(),
                        country_name: country_name.to_string(),
                        country_max_level: feed_level,
                    })
                    .await
                {
                    Ok(assessment) => Some(assessment.normalized()),
                    Err(e) => {
                        tracing::warn!("Risk classification failed, using heuristic: {e}");
                        None
                    }
                }
            } else {
                None
            };

            match assessment {
                Some(assessment) => {
                    specific_level = assessment.specific_level;
                    max_country_level = assessment.max_country_level.max(specific_level);
                    high_risk_regions = assessment.high_risk_regions;

                    tracing::info!(
                        "AI risk for {destination}: {specific_level} (country max {max_country_level}, {} region(s))",
                        high_risk_regions.len()
                    );
                }
                None => {
                    specific_level =
                        assess_risk_heuristic(&advisory_text, destination, feed_level);

                    tracing::info!(
                        "Heuristic risk for {destination}: {specific_level} (country max {max_country_level})"
                    );
                }
            }
        }

        let mut info = SafetyInfo::with_levels(specific_level, max_country_level);
        info.lead = lead.map(str::to_string);
        info.sub_text = sub_text.map(str::to_string);
        info.high_risk_regions = high_risk_regions;
        info.infection_level = document.infection_level();
        info.warnings = document.warnings();
        info.emergency_contacts = geo::emergency_contacts(code)
            .cloned()
            .unwrap_or_else(default_emergency_contacts);
        info.nearest_embassy = geo::embassy_for(code).cloned();
        info
    }
}

#[async_trait]
impl<C: HttpClientTrait> TravelInfoSource for SafetyFeedSource<C> {
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
        tracing::debug!("Fetching safety info for: {destination}");

        let Some(code) = resolver::resolve(destination, options.country.as_deref()) else {
            tracing::warn!("Unknown destination: {destination}, using default safety info");
            return Ok(Self::default_result(destination));
        };

        let cache_key = Self::cache_key(code);
        if let Some(entry) = self.cache.get::<SafetyInfo>(&cache_key).await? {
            tracing::debug!("Feed cache hit for: {code}");
            return Ok(FetchedData {
                data: TravelInfoPayload::Safety(entry.data),
                source: Self::official_metadata(code),
            });
        }

        let timeout = options.timeout.unwrap_or(self.timeout);
        let Some(xml) = self.fetch_feed_document(code, timeout).await? else {
            return Ok(Self::default_result(destination));
        };

        let info = self.build_safety_info(&xml, code, destination).await;

        self.cache.set(&cache_key, &info, self.cache_ttl).await?;

        tracing::info!(
            "Fetched safety info for {destination} (level {})",
            info.danger_level
        );

        Ok(FetchedData {
            data: TravelInfoPayload::Safety(info),
            source: Self::official_metadata(code),
        })
    }

    async fn is_available(&self) -> bool {
        // Probe a country that always has a feed entry
        let url = format!("{}/country/0066A.xml", self.base_url);

        matches!(
            tokio::time::timeout(Duration::from_secs(5), self.client.get_text(&url)).await,
            Ok(Ok(_))
        )
    }
}
