//! End-to-end tests over a mocked upstream: real reqwest client, real
//! adapters, real cache tiers.

use std::sync::Arc;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use travel_info_service::domain::cache::Cache;
use travel_info_service::domain::source::SourceType;
use travel_info_service::domain::{DisabledRiskClassifier, TravelInfoSource};
use travel_info_service::infrastructure::cache::InMemoryCache;
use travel_info_service::infrastructure::http::HttpClient;
use travel_info_service::infrastructure::sources::{CountryApiSource, SafetyFeedSource};
use travel_info_service::{
    CategoryOutcome, DangerLevel, FetchOptions, TravelInfoCategory, TravelInfoPayload,
    TravelInfoService,
};

const THAILAND_FEED: &str = "\
<opendata>\
<countryCode>0066</countryCode>\
<countryName>タイ</countryName>\
<riskLevel1>1</riskLevel1>\
<riskLevel2>0</riskLevel2>\
<riskLevel3>0</riskLevel3>\
<riskLevel4>0</riskLevel4>\
<riskLead>デモや集会に注意してください。</riskLead>\
<wideareaSpot><title>南部国境地域に注意</title></wideareaSpot>\
</opendata>";

fn thailand_country_json() -> serde_json::Value {
    serde_json::json!([{
        "name": { "common": "Thailand", "official": "Kingdom of Thailand" },
        "currencies": { "THB": { "name": "Thai baht", "symbol": "฿" } },
        "languages": { "tha": "Thai" },
        "timezones": ["UTC+07:00"],
        "region": "Asia",
        "subregion": "South-Eastern Asia"
    }])
}

fn safety_source(server: &MockServer) -> SafetyFeedSource<HttpClient> {
    SafetyFeedSource::new(
        HttpClient::new(),
        Arc::new(DisabledRiskClassifier),
        Arc::new(InMemoryCache::new()),
    )
    .with_base_url(server.uri())
}

fn country_source(server: &MockServer) -> CountryApiSource<HttpClient> {
    CountryApiSource::new(HttpClient::new()).with_base_url(server.uri())
}

fn build_service(server: &MockServer) -> TravelInfoService {
    let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());

    TravelInfoService::new(cache)
        .with_source(Arc::new(safety_source(server)))
        .with_source(Arc::new(country_source(server)))
}

#[tokio::test]
async fn safety_feed_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/0066A.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(THAILAND_FEED))
        .expect(1)
        .mount(&server)
        .await;

    let source = safety_source(&server);
    let result = source.fetch("バンコク", &FetchOptions::default()).await.unwrap();

    let TravelInfoPayload::Safety(info) = &result.data else {
        panic!("expected safety payload");
    };

    // City-level destination with the classifier disabled: the heuristic
    // keeps Bangkok at level 0 below the country max of 1
    assert_eq!(info.max_country_level, DangerLevel::new(1));
    assert!(info.danger_level <= info.max_country_level);
    assert_eq!(
        info.is_partial_country_risk,
        info.danger_level < info.max_country_level
    );
    assert!(info.warnings.iter().any(|w| w.contains("デモ")));
    assert_eq!(result.source.reliability_score, 95);
    assert!(result.source.source_url.contains("66"));
}

#[tokio::test]
async fn feed_404_returns_low_reliability_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/0066A.xml"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let source = safety_source(&server);
    let result = source.fetch("タイ", &FetchOptions::default()).await.unwrap();

    assert_eq!(result.source.source_type, SourceType::Fallback);
    assert_eq!(result.source.reliability_score, 50);

    let TravelInfoPayload::Safety(info) = &result.data else {
        panic!("expected safety payload");
    };
    assert_eq!(info.danger_level, DangerLevel::new(0));
    assert!(!info.warnings.is_empty());
}

#[tokio::test]
async fn transient_upstream_failure_is_retried() {
    let server = MockServer::start().await;

    // First request fails, the retry succeeds
    Mock::given(method("GET"))
        .and(path("/country/0066A.xml"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/country/0066A.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(THAILAND_FEED))
        .expect(1)
        .mount(&server)
        .await;

    let source = safety_source(&server);
    let result = source.fetch("タイ", &FetchOptions::default()).await.unwrap();

    assert_eq!(result.source.source_type, SourceType::OfficialApi);
}

#[tokio::test]
async fn country_full_text_falls_back_to_partial() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/Thailand"))
        .and(query_param("fullText", "true"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/name/Thailand"))
        .respond_with(ResponseTemplate::new(200).set_body_json(thailand_country_json()))
        .expect(1)
        .mount(&server)
        .await;

    let source = country_source(&server);
    let result = source.fetch("タイ", &FetchOptions::default()).await.unwrap();

    let TravelInfoPayload::Country(info) = &result.data else {
        panic!("expected country payload");
    };
    assert_eq!(info.currency.code, "THB");
    assert_eq!(info.time_difference, "-2時間");
}

#[tokio::test]
async fn orchestrator_aggregates_and_caches() {
    let server = MockServer::start().await;

    // Each upstream may be hit exactly once; the second resolve must be
    // served entirely from the category cache
    Mock::given(method("GET"))
        .and(path("/country/0066A.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(THAILAND_FEED))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/name/Thailand"))
        .and(query_param("fullText", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(thailand_country_json()))
        .expect(1)
        .mount(&server)
        .await;

    let service = build_service(&server);
    let categories = [TravelInfoCategory::Safety, TravelInfoCategory::Basic];

    let first = service
        .resolve_travel_info("タイ", &categories, &FetchOptions::default())
        .await;

    assert!(first[&TravelInfoCategory::Safety].is_success());
    assert!(first[&TravelInfoCategory::Basic].is_success());

    let second = service
        .resolve_travel_info("タイ", &categories, &FetchOptions::default())
        .await;

    for category in categories {
        match &second[&category] {
            CategoryOutcome::Success { from_cache, .. } => assert!(from_cache),
            other => panic!("expected cached success for {category}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn orchestrator_survives_partial_upstream_outage() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/country/0066A.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(THAILAND_FEED))
        .mount(&server)
        .await;

    // The country API is down hard; retries are exhausted
    Mock::given(method("GET"))
        .and(path("/name/Thailand"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = build_service(&server);

    let results = service
        .resolve_travel_info(
            "タイ",
            &[TravelInfoCategory::Safety, TravelInfoCategory::Basic],
            &FetchOptions::default(),
        )
        .await;

    assert!(results[&TravelInfoCategory::Safety].is_success());

    match &results[&TravelInfoCategory::Basic] {
        CategoryOutcome::Error { kind, .. } => assert_eq!(*kind, "NETWORK_ERROR"),
        other => panic!("expected error outcome, got {other:?}"),
    }
}
