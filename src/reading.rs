//! Row normalization: one split CSV row into a typed [`Reading`].

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Hours added to every source timestamp. A fixed offset, not a timezone lookup.
pub const OFFSET_CORRECTION_HOURS: i64 = 1;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A single normalized row of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub ride_key: String,
    pub wait_minutes: u32,
    pub last_update: String,
    pub is_open: bool,
    /// Source timestamp plus [`OFFSET_CORRECTION_HOURS`]. `None` when the source
    /// timestamp could not be parsed; `None` orders before every valid instant.
    pub adjusted_timestamp: Option<NaiveDateTime>,
    /// Hour component of `adjusted_timestamp`.
    pub hour_of_day: Option<u32>,
}

impl Reading {
    /// Normalizes a `(timestamp, ride name, wait time, last update, is open)` row.
    ///
    /// Never fails: missing fields read as empty, a non-numeric wait is 0, any
    /// open flag other than `true` (case-insensitive) is closed, and an
    /// unparseable timestamp becomes `None`.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        let field = |i: usize| row.get(i).map(|s| s.as_ref().trim()).unwrap_or("");

        let adjusted_timestamp = parse_timestamp(field(0))
            .map(|ts| ts + Duration::hours(OFFSET_CORRECTION_HOURS));

        Reading {
            ride_key: field(1).to_string(),
            wait_minutes: parse_wait(field(2)),
            last_update: field(3).to_string(),
            is_open: parse_open(field(4)),
            adjusted_timestamp,
            hour_of_day: adjusted_timestamp.map(|ts| ts.hour()),
        }
    }

    /// Whether the reading carries a usable timestamp.
    pub fn has_valid_timestamp(&self) -> bool {
        self.adjusted_timestamp.is_some()
    }
}

/// Parses a source timestamp as a calendar date-time.
///
/// RFC 3339 values with an explicit offset are taken at their UTC wall clock.
/// A bare date reads as midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Leading decimal digits of the field after an optional `+`, or 0 when
/// there are none.
fn parse_wait(raw: &str) -> u32 {
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits_end = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(raw.len());

    raw[..digits_end].parse().unwrap_or(0)
}

fn parse_open(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_from_row_basic() {
        let r = Reading::from_row(&row(&[
            "2025-02-02T09:00:00",
            " Space Mountain ",
            "10",
            "9:00",
            "true",
        ]));

        assert_eq!(r.ride_key, "Space Mountain");
        assert_eq!(r.wait_minutes, 10);
        assert_eq!(r.last_update, "9:00");
        assert!(r.is_open);
        assert_eq!(r.adjusted_timestamp, Some(at("2025-02-02T10:00:00")));
        assert_eq!(r.hour_of_day, Some(10));
    }

    #[test]
    fn test_non_numeric_wait_defaults_to_zero() {
        let r = Reading::from_row(&row(&["2025-02-02T09:00:00", "A", "abc", "", "true"]));
        assert_eq!(r.wait_minutes, 0);
    }

    #[test]
    fn test_wait_takes_leading_digits() {
        assert_eq!(parse_wait("45"), 45);
        assert_eq!(parse_wait("12.5"), 12);
        assert_eq!(parse_wait("30 min"), 30);
        assert_eq!(parse_wait("-5"), 0);
        assert_eq!(parse_wait("+5"), 5);
        assert_eq!(parse_wait("++5"), 0);
        assert_eq!(parse_wait(""), 0);
    }

    #[test]
    fn test_open_flag_is_case_insensitive_true_only() {
        assert!(parse_open("true"));
        assert!(parse_open("TRUE"));
        assert!(parse_open("True"));
        assert!(!parse_open("false"));
        assert!(!parse_open(""));
        assert!(!parse_open("yes"));
        assert!(!parse_open("1"));
    }

    #[test]
    fn test_ride_key_is_case_sensitive() {
        let a = Reading::from_row(&row(&["", "Dumbo", "0", "", "false"]));
        let b = Reading::from_row(&row(&["", "dumbo", "0", "", "false"]));
        assert_ne!(a.ride_key, b.ride_key);
    }

    #[test]
    fn test_offset_crosses_midnight() {
        let r = Reading::from_row(&row(&["2025-02-02T23:30:00", "A", "5", "", "true"]));
        assert_eq!(r.adjusted_timestamp, Some(at("2025-02-03T00:30:00")));
        assert_eq!(r.hour_of_day, Some(0));
    }

    #[test]
    fn test_invalid_timestamp_is_none() {
        let r = Reading::from_row(&row(&["not a date", "A", "5", "", "true"]));
        assert_eq!(r.adjusted_timestamp, None);
        assert_eq!(r.hour_of_day, None);
        assert!(!r.has_valid_timestamp());
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let r = Reading::from_row(&row(&["2025-02-02T09:00:00", "A"]));
        assert_eq!(r.wait_minutes, 0);
        assert_eq!(r.last_update, "");
        assert!(!r.is_open);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = at("2025-02-02T09:15:00");
        assert_eq!(parse_timestamp("2025-02-02T09:15:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-02 09:15:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-02T09:15"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-02 09:15:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-02T09:15:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-02T10:15:00+01:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-02-02"), Some(at("2025-02-02T00:00:00")));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("02/02/2025"), None);
    }

    #[test]
    fn test_invalid_orders_before_valid() {
        assert!(None < Some(at("1970-01-01T00:00:00")));
    }
}
