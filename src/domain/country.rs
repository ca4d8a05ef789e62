//! Country reference data model

use serde::{Deserialize, Serialize};

/// Reference offset the time difference is rendered against (Japan, UTC+9)
pub const REFERENCE_UTC_OFFSET_MINUTES: i32 = 9 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

/// Resolved country reference information for one destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub country_name: String,
    pub official_name: String,
    pub currency: CurrencyInfo,
    pub languages: Vec<String>,
    /// First timezone reported upstream, e.g. `UTC+09:00`
    pub timezone: String,
    /// Preformatted difference against [`REFERENCE_UTC_OFFSET_MINUTES`]
    pub time_difference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
}

/// Parses a `UTC`, `UTC+HH:MM` or `UTC-HH:MM` timezone label into an offset
/// in minutes. Returns `None` for anything else.
pub fn parse_utc_offset_minutes(timezone: &str) -> Option<i32> {
    let rest = timezone.strip_prefix("UTC")?;

    if rest.is_empty() {
        return Some(0);
    }

    let (sign, body) = match rest.as_bytes()[0] {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };

    let (hours, minutes) = match body.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => (body.parse::<i32>().ok()?, 0),
    };

    Some(sign * (hours * 60 + minutes))
}

/// Renders the difference between a destination offset and the UTC+9
/// reference: whole hours as `"{±N}時間"`, half-hour offsets with one
/// decimal (`"-3.5時間"`), and zero as `"時差なし"`.
pub fn format_time_difference(destination_offset_minutes: i32) -> String {
    let diff_minutes = destination_offset_minutes - REFERENCE_UTC_OFFSET_MINUTES;

    if diff_minutes == 0 {
        return "時差なし".to_string();
    }

    if diff_minutes % 60 == 0 {
        format!("{:+}時間", diff_minutes / 60)
    } else {
        format!("{:+.1}時間", f64::from(diff_minutes) / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset_minutes("UTC"), Some(0));
        assert_eq!(parse_utc_offset_minutes("UTC+09:00"), Some(540));
        assert_eq!(parse_utc_offset_minutes("UTC-05:00"), Some(-300));
        assert_eq!(parse_utc_offset_minutes("UTC+05:30"), Some(330));
        assert_eq!(parse_utc_offset_minutes("UTC-03:30"), Some(-210));
        assert_eq!(parse_utc_offset_minutes("GMT+1"), None);
    }

    #[test]
    fn test_no_difference() {
        assert_eq!(format_time_difference(540), "時差なし");
    }

    #[test]
    fn test_whole_hour_difference() {
        // UTC-5 (EST) against UTC+9
        assert_eq!(format_time_difference(-300), "-14時間");
        // UTC+12 against UTC+9
        assert_eq!(format_time_difference(720), "+3時間");
    }

    #[test]
    fn test_half_hour_difference() {
        // India, UTC+05:30
        assert_eq!(format_time_difference(330), "-3.5時間");
        // Newfoundland, UTC-03:30
        assert_eq!(format_time_difference(-210), "-12.5時間");
    }
}
