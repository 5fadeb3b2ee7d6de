//! Timestamp parsing for the wire formats the API emits.

use chrono::{DateTime, Utc};

/// Parse a timestamp string from the wire into UTC.
///
/// The API is inconsistent about timestamp formats across endpoints; this
/// accepts the three observed shapes:
/// - RFC 3339 / ISO 8601 with offset (`2009-03-31T09:54:51-07:00`)
/// - ISO 8601 with `Z` suffix and optional fraction (`2009-03-31T16:54:51Z`)
/// - slash-date with space-separated offset (`2008/02/23 16:40:51 -0800`)
///
/// Decoded values keep the raw wire text; this is a convenience for callers
/// that want a real timestamp.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ") {
        return Some(ndt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y/%m/%d %H:%M:%S %z") {
        return Some(dt.with_timezone(&Utc));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_should_parse_rfc3339_with_offset() {
        let dt = parse_timestamp("2009-03-31T09:54:51-07:00").expect("parseable");
        assert_eq!(dt.hour(), 16);
    }

    #[test]
    fn test_should_parse_slash_date_format() {
        let dt = parse_timestamp("2008/02/23 16:40:51 -0800").expect("parseable");
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_should_reject_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }
}
