//! Travel information categories

use serde::{Deserialize, Serialize};

/// A named slice of travel information with its own adapter(s) and TTL policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelInfoCategory {
    Basic,
    Safety,
    Climate,
    Visa,
    Manner,
    Transport,
    LocalFood,
    Souvenir,
    Events,
    Technology,
    Healthcare,
    Restrooms,
    Smoking,
    Alcohol,
}

impl TravelInfoCategory {
    /// All known categories, in declaration order
    pub const ALL: [TravelInfoCategory; 14] = [
        Self::Basic,
        Self::Safety,
        Self::Climate,
        Self::Visa,
        Self::Manner,
        Self::Transport,
        Self::LocalFood,
        Self::Souvenir,
        Self::Events,
        Self::Technology,
        Self::Healthcare,
        Self::Restrooms,
        Self::Smoking,
        Self::Alcohol,
    ];

    /// Categories requested when the caller does not specify any
    pub const DEFAULT: [TravelInfoCategory; 2] = [Self::Basic, Self::Safety];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Safety => "safety",
            Self::Climate => "climate",
            Self::Visa => "visa",
            Self::Manner => "manner",
            Self::Transport => "transport",
            Self::LocalFood => "local_food",
            Self::Souvenir => "souvenir",
            Self::Events => "events",
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Restrooms => "restrooms",
            Self::Smoking => "smoking",
            Self::Alcohol => "alcohol",
        }
    }

    /// Parses a wire name, returning `None` for unknown categories
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Parses a comma-separated category list, silently dropping unknown names
    pub fn parse_list(value: &str) -> Vec<Self> {
        value.split(',').filter_map(|s| Self::parse(s.trim())).collect()
    }
}

impl std::fmt::Display for TravelInfoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for category in TravelInfoCategory::ALL {
            assert_eq!(TravelInfoCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(TravelInfoCategory::parse("invalid_cat"), None);
    }

    #[test]
    fn test_parse_list_filters_invalid() {
        let categories = TravelInfoCategory::parse_list("basic,invalid,events");
        assert_eq!(
            categories,
            vec![TravelInfoCategory::Basic, TravelInfoCategory::Events]
        );
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&TravelInfoCategory::LocalFood).unwrap();
        assert_eq!(json, "\"local_food\"");
    }
}
