//! Destination resolution
//!
//! Maps a free-text destination (and optional country hint) to a feed
//! country code through an ordered chain of fallbacks. Each stage is a pure
//! `Option`-returning function; the first success wins.

use crate::domain::geo::{self, CountryCode};

/// Resolves a destination to a feed country code.
///
/// Stage order, each attempted only when the previous one failed:
/// 1. exact match in the destination table,
/// 2. exact match of the explicit `hint` (an explicit country name
///    disambiguates city names that collide across countries),
/// 3. exact match in the English-alias table,
/// 4. parenthetical/whitespace-stripped bidirectional substring containment
///    against the destination table, in declaration order.
///
/// `None` means "use defaults" - callers must not treat it as a hard error.
pub fn resolve(destination: &str, hint: Option<&str>) -> Option<CountryCode> {
    geo::destination_code(destination)
        .or_else(|| hint.and_then(geo::destination_code))
        .or_else(|| geo::english_name_code(destination))
        .or_else(|| partial_match(destination))
}

/// Strips parenthetical qualifiers (both widths) and all whitespace, the
/// comparison form used for substring containment.
fn strip_for_matching(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '（' | '）' | '(' | ')') && !c.is_whitespace())
        .collect()
}

fn partial_match(destination: &str) -> Option<CountryCode> {
    let needle = strip_for_matching(destination);
    if needle.is_empty() {
        return None;
    }

    geo::destination_entries().find_map(|(key, code)| {
        let key = strip_for_matching(key);
        (needle.contains(&key) || key.contains(&needle)).then_some(code)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(resolve("バンコク", None).unwrap().as_str(), "0066");
    }

    #[test]
    fn test_hint_disambiguates_unknown_city() {
        assert!(resolve("ニャチャン", None).is_none());
        assert_eq!(
            resolve("ニャチャン", Some("ベトナム")).unwrap().as_str(),
            "0084"
        );
    }

    #[test]
    fn test_english_alias() {
        assert_eq!(resolve("Thailand", None).unwrap().as_str(), "0066");
        assert_eq!(resolve("United Kingdom", None).unwrap().as_str(), "0044");
    }

    #[test]
    fn test_partial_match_with_qualifier() {
        // Parenthetical qualifiers are stripped before containment
        assert_eq!(resolve("パリ（フランス）", None).unwrap().as_str(), "0033");
        assert_eq!(resolve("ソウル特別市", None).unwrap().as_str(), "0082");
    }

    #[test]
    fn test_partial_match_ignores_whitespace() {
        assert_eq!(resolve("ニューヨーク 州", None).unwrap().as_str(), "1000");
    }

    #[test]
    fn test_unresolvable_returns_none() {
        assert!(resolve("Atlantis", None).is_none());
        assert!(resolve("", None).is_none());
    }

    #[test]
    fn test_every_supported_destination_resolves() {
        for destination in geo::supported_destinations() {
            assert!(
                resolve(destination, None).is_some(),
                "unresolved: {destination}"
            );
        }
    }
}
