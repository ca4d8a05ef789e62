//! Cache key normalization and generation
//!
//! Keys are composite strings:
//! `travel-info:<normalized-destination>:<category>[:key=value...]`, with
//! options sorted so that generation is order-independent. The composite
//! form joins sorted categories with commas; wildcard patterns substitute
//! `*` in the destination or category position.

use std::collections::BTreeMap;

use crate::domain::category::TravelInfoCategory;

/// Namespace prefix for every travel-info cache key
pub const CACHE_KEY_PREFIX: &str = "travel-info";

/// Separator between key segments
pub const CACHE_KEY_SEPARATOR: &str = ":";

/// Normalizes a destination for use inside a cache key: lowercase, trimmed,
/// whitespace runs collapsed to a single hyphen, and everything outside
/// alphanumerics, hyphens and non-ASCII scripts stripped (CJK destinations
/// pass through unchanged).
pub fn normalize_destination(destination: &str) -> String {
    let lowered = destination.trim().to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                normalized.push('-');
                in_whitespace = true;
            }
            continue;
        }

        in_whitespace = false;

        if c.is_ascii_alphanumeric() || c == '-' || !c.is_ascii() {
            normalized.push(c);
        }
    }

    normalized
}

/// Sorted `key=value` option components, if any
fn option_segments(options: &BTreeMap<String, String>) -> String {
    options
        .iter()
        .map(|(k, v)| format!("{CACHE_KEY_SEPARATOR}{k}={v}"))
        .collect()
}

/// Key for one destination/category pair, with optional sorted components
pub fn generate_cache_key(
    destination: &str,
    category: TravelInfoCategory,
    options: &BTreeMap<String, String>,
) -> String {
    format!(
        "{CACHE_KEY_PREFIX}{CACHE_KEY_SEPARATOR}{}{CACHE_KEY_SEPARATOR}{}{}",
        normalize_destination(destination),
        category.as_str(),
        option_segments(options),
    )
}

/// Key covering a whole multi-category response; categories are sorted so
/// the same set always produces the same key.
pub fn generate_composite_cache_key(
    destination: &str,
    categories: &[TravelInfoCategory],
) -> String {
    let mut sorted: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    format!(
        "{CACHE_KEY_PREFIX}{CACHE_KEY_SEPARATOR}{}{CACHE_KEY_SEPARATOR}{}",
        normalize_destination(destination),
        sorted.join(","),
    )
}

/// Wildcard pattern for selective invalidation. Omitting the destination or
/// the category puts a `*` in that position.
pub fn generate_cache_key_pattern(
    destination: Option<&str>,
    category: Option<TravelInfoCategory>,
) -> String {
    let destination = match destination {
        Some(d) => normalize_destination(d),
        None => "*".to_string(),
    };
    let category = category.map(|c| c.as_str()).unwrap_or("*");

    format!("{CACHE_KEY_PREFIX}{CACHE_KEY_SEPARATOR}{destination}{CACHE_KEY_SEPARATOR}{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_destination("PARIS"), "paris");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_destination("  tokyo  "), "tokyo");
    }

    #[test]
    fn test_normalize_hyphenates_spaces() {
        assert_eq!(normalize_destination("New York"), "new-york");
        assert_eq!(normalize_destination("Los   Angeles"), "los-angeles");
    }

    #[test]
    fn test_normalize_strips_special_characters() {
        assert_eq!(normalize_destination("paris!"), "paris");
        assert_eq!(normalize_destination("tokyo@123"), "tokyo123");
    }

    #[test]
    fn test_normalize_preserves_non_ascii_scripts() {
        assert_eq!(normalize_destination("東京"), "東京");
        assert_eq!(normalize_destination("大阪市"), "大阪市");
    }

    #[test]
    fn test_generate_key() {
        let key = generate_cache_key("Paris", TravelInfoCategory::Safety, &BTreeMap::new());
        assert_eq!(key, "travel-info:paris:safety");

        let key = generate_cache_key("NEW YORK", TravelInfoCategory::Basic, &BTreeMap::new());
        assert_eq!(key, "travel-info:new-york:basic");

        let key = generate_cache_key("東京", TravelInfoCategory::Basic, &BTreeMap::new());
        assert_eq!(key, "travel-info:東京:basic");
    }

    #[test]
    fn test_generate_key_sorts_options() {
        let key = generate_cache_key(
            "Tokyo",
            TravelInfoCategory::Climate,
            &options(&[("year", "2024"), ("month", "03")]),
        );
        assert_eq!(key, "travel-info:tokyo:climate:month=03:year=2024");
    }

    #[test]
    fn test_generate_key_is_option_order_independent() {
        let a = generate_cache_key(
            "Tokyo",
            TravelInfoCategory::Climate,
            &options(&[("b", "2"), ("a", "1")]),
        );
        let b = generate_cache_key(
            "Tokyo",
            TravelInfoCategory::Climate,
            &options(&[("a", "1"), ("b", "2")]),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_composite_key_sorts_categories() {
        let key = generate_composite_cache_key(
            "Paris",
            &[
                TravelInfoCategory::Safety,
                TravelInfoCategory::Basic,
                TravelInfoCategory::Visa,
            ],
        );
        assert_eq!(key, "travel-info:paris:basic,safety,visa");

        let key = generate_composite_cache_key("Tokyo", &[TravelInfoCategory::Climate]);
        assert_eq!(key, "travel-info:tokyo:climate");
    }

    #[test]
    fn test_pattern_generation() {
        assert_eq!(generate_cache_key_pattern(None, None), "travel-info:*:*");
        assert_eq!(
            generate_cache_key_pattern(Some("Paris"), None),
            "travel-info:paris:*"
        );
        assert_eq!(
            generate_cache_key_pattern(None, Some(TravelInfoCategory::Safety)),
            "travel-info:*:safety"
        );
        assert_eq!(
            generate_cache_key_pattern(Some("Tokyo"), Some(TravelInfoCategory::Basic)),
            "travel-info:tokyo:basic"
        );
    }
}
