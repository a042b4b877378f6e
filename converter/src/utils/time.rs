//! # Time Utilities
//!
//! Parsing the provider's last-update stamp and formatting the header clock.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Layout of `time_last_update_utc`, e.g. `Mon, 01 Jan 2024 12:00:00 +0000`.
pub const PROVIDER_TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Parse the provider's last-update stamp. `None` when it does not match.
pub fn parse_provider_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), PROVIDER_TIMESTAMP_FORMAT).ok()
}

/// Status line for a quote: `Rate updated 01 Jan 2024, 12:00 UTC`, or empty
/// when the stamp is absent or unparseable.
pub fn rate_updated_status(retrieved_at: Option<&str>) -> String {
    retrieved_at
        .and_then(parse_provider_timestamp)
        .map(|updated| format!("Rate updated {} UTC", updated.format("%d %b %Y, %H:%M")))
        .unwrap_or_default()
}

/// Header clock text, `HH:MM:SS UTC`.
pub fn clock_text(now: DateTime<Utc>) -> String {
    now.format("%H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_provider_timestamp() {
        let parsed = parse_provider_timestamp("Mon, 01 Jan 2024 12:00:00 +0000").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-01 12:00:00");
    }

    #[test]
    fn test_rate_updated_status() {
        assert_eq!(
            rate_updated_status(Some("Mon, 01 Jan 2024 12:00:00 +0000")),
            "Rate updated 01 Jan 2024, 12:00 UTC"
        );
        assert_eq!(rate_updated_status(Some("yesterday")), "");
        assert_eq!(rate_updated_status(Some("")), "");
        assert_eq!(rate_updated_status(None), "");
    }

    #[test]
    fn test_clock_text() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 7).unwrap();
        assert_eq!(clock_text(now), "09:05:07 UTC");
    }
}
