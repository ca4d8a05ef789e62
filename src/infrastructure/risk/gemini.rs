//! Gemini-backed risk classifier
//!
//! Asks a structured-output completion to estimate the destination-specific
//! advisory level from the feed's free text. Credentials come from the
//! environment; a missing API key is the valid disabled state, not an error.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::domain::risk::{RiskAssessment, RiskClassifier, RiskContext};
use crate::domain::DomainError;
use crate::infrastructure::http::HttpClientTrait;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key; absent means disabled
pub const API_KEY_ENV: &str = "GOOGLE_GENERATIVE_AI_API_KEY";
/// Optional model-name override
pub const MODEL_ENV: &str = "GOOGLE_MODEL_NAME";

/// Gemini generateContent provider implementing [`RiskClassifier`]
#[derive(Debug)]
pub struct GeminiRiskClassifier<C: HttpClientTrait> {
    client: C,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> GeminiRiskClassifier<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: Some(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Reads credentials from the environment. Without an API key the
    /// classifier is constructed disabled.
    pub fn from_env(client: C) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        if api_key.is_none() {
            tracing::info!("{API_KEY_ENV} not set; risk classification disabled");
        }

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn generate_url(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={api_key}",
            self.base_url, self.model
        )
    }

    fn build_prompt(context: &RiskContext) -> String {
        format!(
            "You are a travel safety analyst. Analyze the following advisory text \
             from the Ministry of Foreign Affairs of Japan.\n\
             \n\
             Country: {country}\n\
             Target destination: {destination}\n\
             Reported country max level: {max_level}\n\
             \n\
             Advisory text:\n\
             \"\"\"\n{text}\n\"\"\"\n\
             \n\
             Determine the specific danger level (0-4) for the target destination:\n\
             - Level 0: no advisory, 1: exercise caution, 2: avoid non-essential \
             travel, 3: do not travel, 4: evacuate.\n\
             - If the text names the destination with a level, use that.\n\
             - If the text applies a level to the whole country (全土/全域), use it.\n\
             - If only *other* regions are flagged, assume the destination is safer \
             (level 0 or 1); major tourist cities usually sit below border regions.\n\
             Also determine the maximum level mentioned for the entire country, and \
             list regions whose level is strictly higher than the destination's \
             (region names in Japanese). max_country_level must be >= specific_level.",
            country = context.country_name,
            destination = context.destination,
            max_level = context.country_max_level,
            text = context.advisory_text,
        )
    }

    fn response_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "specific_level": { "type": "integer", "minimum": 0, "maximum": 4 },
                "max_country_level": { "type": "integer", "minimum": 0, "maximum": 4 },
                "high_risk_regions": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "region_name": { "type": "string" },
                            "level": { "type": "integer", "minimum": 1, "maximum": 4 },
                            "description": { "type": "string" }
                        },
                        "required": ["region_name", "level"]
                    }
                },
                "reason": { "type": "string" }
            },
            "required": ["specific_level", "max_country_level", "high_risk_regions", "reason"]
        })
    }

    fn build_request(&self, context: &RiskContext) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [{ "text": Self::build_prompt(context) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema()
            }
        })
    }

    fn parse_response(value: serde_json::Value) -> Result<RiskAssessment, DomainError> {
        #[derive(Deserialize)]
        struct GenerateContentResponse {
            #[serde(default)]
            candidates: Vec<Candidate>,
        }

        #[derive(Deserialize)]
        struct Candidate {
            content: CandidateContent,
        }

        #[derive(Deserialize)]
        struct CandidateContent {
            #[serde(default)]
            parts: Vec<Part>,
        }

        #[derive(Deserialize)]
        struct Part {
            #[serde(default)]
            text: Option<String>,
        }

        let response: GenerateContentResponse = serde_json::from_value(value)
            .map_err(|e| DomainError::invalid_response(format!("Unexpected completion shape: {e}")))?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| DomainError::invalid_response("completion contained no text part"))?;

        let assessment: RiskAssessment = serde_json::from_str(&text).map_err(|e| {
            DomainError::invalid_response(format!("Completion did not match schema: {e}"))
        })?;

        Ok(assessment.normalized())
    }
}

#[async_trait]
impl<C: HttpClientTrait> RiskClassifier for GeminiRiskClassifier<C> {
    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn classify(&self, context: &RiskContext) -> Result<RiskAssessment, DomainError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(DomainError::ai_unavailable("no API key configured"));
        };

        let url = self.generate_url(api_key);
        let body = self.build_request(context);
        let headers = vec![("Content-Type", "application/json")];

        let response = self.client.post_json(&url, headers, &body).await?;
        Self::parse_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::safety::DangerLevel;
    use crate::infrastructure::http::MockHttpClient;

    const BASE: &str = "https://gemini.test";

    fn context() -> RiskContext {
        RiskContext {
            advisory_text: "ミンダナオ地域に渡航中止勧告".to_string(),
            destination: "マニラ".to_string(),
            country_name: "フィリピン".to_string(),
            country_max_level: DangerLevel::new(3),
        }
    }

    fn completion(body: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": body }] }
            }]
        })
    }

    fn classifier_url(key: &str) -> String {
        format!("{BASE}/v1beta/models/gemini-2.5-flash:generateContent?key={key}")
    }

    #[tokio::test]
    async fn test_classify_parses_structured_output() {
        let body = r#"{
            "specific_level": 1,
            "max_country_level": 3,
            "high_risk_regions": [
                { "region_name": "ミンダナオ地域", "level": 3, "description": "武装勢力" }
            ],
            "reason": "capital is calm"
        }"#;
        let client = MockHttpClient::new().with_json(classifier_url("k"), completion(body));
        let classifier = GeminiRiskClassifier::new(client, "k").with_base_url(BASE);

        assert!(classifier.is_enabled());
        let assessment = classifier.classify(&context()).await.unwrap();
        assert_eq!(assessment.specific_level, DangerLevel::new(1));
        assert_eq!(assessment.max_country_level, DangerLevel::new(3));
        assert_eq!(assessment.high_risk_regions.len(), 1);
    }

    #[tokio::test]
    async fn test_classify_enforces_invariants() {
        // The model claims specific > max; normalization clamps and filters
        let body = r#"{
            "specific_level": 4,
            "max_country_level": 2,
            "high_risk_regions": [
                { "region_name": "北部", "level": 1 }
            ],
            "reason": ""
        }"#;
        let client = MockHttpClient::new().with_json(classifier_url("k"), completion(body));
        let classifier = GeminiRiskClassifier::new(client, "k").with_base_url(BASE);

        let assessment = classifier.classify(&context()).await.unwrap();
        assert_eq!(assessment.specific_level, DangerLevel::new(2));
        assert!(assessment.high_risk_regions.is_empty());
    }

    #[tokio::test]
    async fn test_non_json_completion_is_invalid_response() {
        let client =
            MockHttpClient::new().with_json(classifier_url("k"), completion("I cannot comply"));
        let classifier = GeminiRiskClassifier::new(client, "k").with_base_url(BASE);

        let error = classifier.classify(&context()).await.unwrap_err();
        assert!(matches!(error, DomainError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_disabled_without_key() {
        let classifier = GeminiRiskClassifier {
            client: MockHttpClient::new(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: BASE.to_string(),
        };

        assert!(!classifier.is_enabled());
        let error = classifier.classify(&context()).await.unwrap_err();
        assert!(matches!(error, DomainError::AiUnavailable { .. }));
    }
}
