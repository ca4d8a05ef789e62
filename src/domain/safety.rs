//! Travel safety data model

use serde::{Deserialize, Serialize};

/// Advisory severity on the government feed's 0-4 scale
///
/// 0 = no advisory, 1 = exercise caution, 2 = avoid non-essential travel,
/// 3 = do not travel, 4 = evacuate. Construction clamps out-of-range input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DangerLevel(u8);

// Deserialization clamps too, so out-of-range upstream values can never
// violate the 0..=4 invariant
impl<'de> Deserialize<'de> for DangerLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let level = u8::deserialize(deserializer)?;
        Ok(DangerLevel::new(level))
    }
}

impl DangerLevel {
    pub const NONE: DangerLevel = DangerLevel(0);
    pub const MAX: DangerLevel = DangerLevel(4);

    pub fn new(level: u8) -> Self {
        Self(level.min(4))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// The feed's Japanese advisory wording for this level
    pub fn description(&self) -> &'static str {
        match self.0 {
            0 => "危険情報なし",
            1 => "十分注意してください",
            2 => "不要不急の渡航は止めてください",
            3 => "渡航は止めてください（渡航中止勧告）",
            _ => "退避してください（退避勧告）",
        }
    }
}

impl std::fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sub-region flagged at a higher advisory level than the destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighRiskRegion {
    pub region_name: String,
    pub level: DangerLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embassy {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Resolved safety information for one destination
///
/// `danger_level` is destination-specific; `max_country_level` is the highest
/// level reported anywhere in the country. The two differ when the feed's
/// country-level granularity is coarser than the requested destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyInfo {
    pub danger_level: DangerLevel,
    pub max_country_level: DangerLevel,
    pub danger_level_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,
    pub is_partial_country_risk: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub high_risk_regions: Vec<HighRiskRegion>,
    pub infection_level: DangerLevel,
    pub warnings: Vec<String>,
    pub emergency_contacts: Vec<EmergencyContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_embassy: Option<Embassy>,
}

impl SafetyInfo {
    /// Builds an advisory with the level invariants applied: the destination
    /// level never exceeds the country maximum, and the partial-risk flag is
    /// derived rather than stored independently.
    pub fn with_levels(specific: DangerLevel, max_country: DangerLevel) -> Self {
        let danger_level = specific.min(max_country);

        Self {
            danger_level,
            max_country_level: max_country,
            danger_level_description: danger_level.description().to_string(),
            lead: None,
            sub_text: None,
            is_partial_country_risk: danger_level < max_country,
            high_risk_regions: Vec::new(),
            infection_level: DangerLevel::NONE,
            warnings: Vec::new(),
            emergency_contacts: Vec::new(),
            nearest_embassy: None,
        }
    }
}

/// Generic advisories used when the feed supplies no warnings
pub fn default_warnings() -> Vec<String> {
    vec![
        "最新の渡航情報を確認してください".to_string(),
        "海外旅行保険への加入を推奨します".to_string(),
    ]
}

/// Consular fallback contacts for destinations without a country entry
pub fn default_emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            name: "外務省領事サービスセンター".to_string(),
            number: "+81-3-5501-8162".to_string(),
        },
        EmergencyContact {
            name: "在外公館連絡先検索".to_string(),
            number: "https://www.mofa.go.jp/mofaj/annai/zaigai/".to_string(),
        },
    ]
}
