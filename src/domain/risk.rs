//! Risk disambiguation: AI capability contract and the deterministic fallback
//!
//! The government feed reports risk at country granularity. When the caller
//! asks about a city, an injected [`RiskClassifier`] estimates the
//! destination-specific level; when that capability is disabled or fails,
//! [`assess_risk_heuristic`] decides from the advisory text alone.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::safety::{DangerLevel, HighRiskRegion};
use crate::domain::DomainError;

/// Input handed to the classifier: the feed's free text plus the resolution
/// context it needs to reason about sub-regions.
#[derive(Debug, Clone)]
pub struct RiskContext {
    /// Combined lead and sub-text from the advisory feed
    pub advisory_text: String,
    pub destination: String,
    pub country_name: String,
    pub country_max_level: DangerLevel,
}

/// Structured classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub specific_level: DangerLevel,
    pub max_country_level: DangerLevel,
    #[serde(default)]
    pub high_risk_regions: Vec<HighRiskRegion>,
    #[serde(default)]
    pub reason: String,
}

impl RiskAssessment {
    /// Applies the output invariants: the destination level never exceeds the
    /// country maximum, and only regions strictly above the destination level
    /// are retained.
    pub fn normalized(mut self) -> Self {
        if self.specific_level > self.max_country_level {
            self.specific_level = self.max_country_level;
        }

        let specific = self.specific_level;
        self.high_risk_regions.retain(|r| r.level > specific);
        self
    }
}

/// Injected AI capability estimating destination-specific risk
///
/// A disabled classifier (missing credentials) reports `is_enabled() ==
/// false`; callers skip it and fall through to the heuristic. Classification
/// failures are likewise non-fatal.
#[async_trait]
pub trait RiskClassifier: Send + Sync + Debug {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn classify(&self, context: &RiskContext) -> Result<RiskAssessment, DomainError>;
}

/// Always-disabled classifier used when no credentials are configured
#[derive(Debug, Default)]
pub struct DisabledRiskClassifier;

#[async_trait]
impl RiskClassifier for DisabledRiskClassifier {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn classify(&self, _context: &RiskContext) -> Result<RiskAssessment, DomainError> {
        Err(DomainError::ai_unavailable("classifier disabled"))
    }
}

/// Advisory phrases meaning the whole country is affected
const WHOLE_COUNTRY_KEYWORDS: [&str; 4] = ["全土", "全域", "国全土", "国内全域"];

/// Deterministic fallback for destination-specific risk.
///
/// Whole-country wording applies the country maximum. A destination named in
/// the advisory text also gets the maximum (the safety-biased reading).
/// Otherwise the destination is assumed unaffected.
pub fn assess_risk_heuristic(
    advisory_text: &str,
    destination: &str,
    country_max_level: DangerLevel,
) -> DangerLevel {
    if WHOLE_COUNTRY_KEYWORDS.iter().any(|k| advisory_text.contains(k)) {
        return country_max_level;
    }

    if advisory_text.contains(destination) {
        return country_max_level;
    }

    DangerLevel::NONE
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_whole_country_keyword() {
        let level = assess_risk_heuristic(
            "イラク全土に退避勧告が発出されています。",
            "バグダッド",
            DangerLevel::new(4),
        );
        assert_eq!(level, DangerLevel::new(4));
    }

    #[test]
    fn test_heuristic_destination_mentioned() {
        let level = assess_risk_heuristic(
            "ミンダナオ地域とセブ周辺では十分注意してください。",
            "セブ",
            DangerLevel::new(2),
        );
        assert_eq!(level, DangerLevel::new(2));
    }

    #[test]
    fn test_heuristic_destination_unmentioned() {
        let level = assess_risk_heuristic(
            "国境地帯では渡航中止勧告が発出されています。",
            "バンコク",
            DangerLevel::new(3),
        );
        assert_eq!(level, DangerLevel::NONE);
    }

    #[test]
    fn test_normalized_clamps_specific_level() {
        let assessment = RiskAssessment {
            specific_level: DangerLevel::new(4),
            max_country_level: DangerLevel::new(2),
            high_risk_regions: Vec::new(),
            reason: String::new(),
        }
        .normalized();

        assert_eq!(assessment.specific_level, DangerLevel::new(2));
    }

    #[test]
    fn test_normalized_drops_regions_at_or_below_specific() {
        let region = |name: &str, level: u8| HighRiskRegion {
            region_name: name.to_string(),
            level: DangerLevel::new(level),
            description: None,
        };

        let assessment = RiskAssessment {
            specific_level: DangerLevel::new(1),
            max_country_level: DangerLevel::new(3),
            high_risk_regions: vec![region("北部", 3), region("南部", 1), region("東部", 0)],
            reason: String::new(),
        }
        .normalized();

        assert_eq!(assessment.high_risk_regions.len(), 1);
        assert_eq!(assessment.high_risk_regions[0].region_name, "北部");
    }

    #[tokio::test]
    async fn test_disabled_classifier() {
        let classifier = DisabledRiskClassifier;
        assert!(!classifier.is_enabled());

        let context = RiskContext {
            advisory_text: String::new(),
            destination: "パリ".to_string(),
            country_name: "フランス".to_string(),
            country_max_level: DangerLevel::new(1),
        };
        assert!(classifier.classify(&context).await.is_err());
    }
}
