//! Date normalization to `YYYY-MM-DDTHH:MM:SSZ`.
//!
//! Two input shapes are accepted: spreadsheet serial day numbers (exactly five
//! characters that parse as an integer) and free text. Free text with an
//! explicit offset is converted to UTC; naive values are taken as UTC.
//! Slashed and dashed numeric dates are read day-first before month-first.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Canonical output format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Day zero of the spreadsheet serial calendar; serial 44197 is 2021-01-01.
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Result of normalizing one date cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOutcome {
    /// Empty cell; not an issue.
    Null,
    /// Canonical timestamp.
    Normalized(String),
    /// Unparseable; carries the trimmed raw text to keep in the cell.
    Invalid(String),
}

impl DateOutcome {
    /// The value to store in the output cell.
    pub fn into_value(self) -> Option<String> {
        match self {
            DateOutcome::Null => None,
            DateOutcome::Normalized(value) | DateOutcome::Invalid(value) => Some(value),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, DateOutcome::Invalid(_))
    }
}

/// Normalize a raw date cell.
pub fn normalize_date(raw: &str) -> DateOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DateOutcome::Null;
    }
    match parse_date(trimmed) {
        Some(dt) => DateOutcome::Normalized(dt.format(TIMESTAMP_FORMAT).to_string()),
        None => DateOutcome::Invalid(trimmed.to_string()),
    }
}

/// Parse a raw date cell into a UTC date-time.
///
/// Returns `None` for empty or unrecognized values.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() == 5 {
        if let Ok(serial) = trimmed.parse::<i64>() {
            return serial_to_date(serial).map(|date| date.and_time(NaiveTime::MIN));
        }
    }
    try_parse_with_offset(trimmed)
        .or_else(|| try_parse_datetime(trimmed))
        .or_else(|| try_parse_date(trimmed).map(|date| date.and_time(NaiveTime::MIN)))
        .or_else(|| try_parse_partial(trimmed).map(|date| date.and_time(NaiveTime::MIN)))
}

/// Convert a spreadsheet serial day number to a calendar date.
pub fn serial_to_date(serial: i64) -> Option<NaiveDate> {
    let (year, month, day) = SERIAL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day)?;
    let days = Days::new(serial.unsigned_abs());
    if serial >= 0 {
        epoch.checked_add_days(days)
    } else {
        epoch.checked_sub_days(days)
    }
}

fn try_parse_with_offset(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%.f %z",
    ];
    formats.iter().find_map(|fmt| {
        DateTime::parse_from_str(value, fmt)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).naive_utc())
    })
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
        "%d-%b-%Y %H:%M",
        "%d/%m/%Y %H:%M:%S", // day-first
        "%d/%m/%Y %H:%M",
        "%m/%d/%Y %H:%M:%S", // month-first
        "%m/%d/%Y %H:%M",
    ];
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%d/%m/%Y",  // 15/01/2024
        "%m/%d/%Y",  // 01/15/2024
        "%d-%m-%Y",  // 15-01-2024
        "%m-%d-%Y",  // 01-15-2024
        "%d.%m.%Y",  // 15.01.2024
        "%Y%m%d",    // 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%Y-%b-%d",  // 2024-Jan-15
    ];
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// `YYYY-MM` and `YYYY` resolve to the first day of the period.
fn try_parse_partial(value: &str) -> Option<NaiveDate> {
    if value.len() == 7 && value.as_bytes()[4] == b'-' {
        let year = value.get(0..4)?.parse::<i32>().ok()?;
        let month = value.get(5..7)?.parse::<u32>().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        let year = value.parse::<i32>().ok()?;
        if (1900..=2100).contains(&year) {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
        return None;
    }

    // Jan 2024, January 2024
    for fmt in ["%b %Y", "%B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{value} 01"), &format!("{fmt} %d")) {
            return NaiveDate::from_ymd_opt(date.year(), date.month(), 1);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(value: &str) -> String {
        match normalize_date(value) {
            DateOutcome::Normalized(ts) => ts,
            other => panic!("expected normalized date for {value:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_serial_dates() {
        assert_eq!(normalized("44197"), "2021-01-01T00:00:00Z");
        assert_eq!(normalized(" 36526 "), "2000-01-01T00:00:00Z");
        assert_eq!(serial_to_date(0), NaiveDate::from_ymd_opt(1899, 12, 30));
    }

    #[test]
    fn test_five_char_non_integer_is_free_text() {
        // "2021." is five characters but not an integer.
        assert!(normalize_date("2021.").is_invalid());
        assert!(normalize_date("4419a").is_invalid());
    }

    #[test]
    fn test_offset_converted_to_utc() {
        assert_eq!(normalized("2021-01-01T08:00:00+08:00"), "2021-01-01T00:00:00Z");
        assert_eq!(normalized("2021-06-30T23:15:00Z"), "2021-06-30T23:15:00Z");
    }

    #[test]
    fn test_free_text_forms() {
        assert_eq!(normalized("2021-01-01"), "2021-01-01T00:00:00Z");
        assert_eq!(normalized("2021-01-01 10:30"), "2021-01-01T10:30:00Z");
        assert_eq!(normalized("15-Jan-2024"), "2024-01-15T00:00:00Z");
        assert_eq!(normalized("January 15, 2024"), "2024-01-15T00:00:00Z");
        assert_eq!(normalized("20240115"), "2024-01-15T00:00:00Z");
        assert_eq!(normalized("15.01.2024"), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn test_day_first_before_month_first() {
        assert_eq!(normalized("01/02/2021"), "2021-02-01T00:00:00Z");
        // Only valid month-first.
        assert_eq!(normalized("12/31/2021"), "2021-12-31T00:00:00Z");
    }

    #[test]
    fn test_partial_dates() {
        assert_eq!(normalized("2024-03"), "2024-03-01T00:00:00Z");
        assert_eq!(normalized("1985"), "1985-01-01T00:00:00Z");
        assert_eq!(normalized("Mar 2024"), "2024-03-01T00:00:00Z");
    }

    #[test]
    fn test_null_and_invalid() {
        assert_eq!(normalize_date(""), DateOutcome::Null);
        assert_eq!(normalize_date("   "), DateOutcome::Null);
        assert_eq!(
            normalize_date(" not a date "),
            DateOutcome::Invalid("not a date".to_string())
        );
        assert!(normalize_date("2021-13-40").is_invalid());
    }

    #[test]
    fn test_into_value() {
        assert_eq!(DateOutcome::Null.into_value(), None);
        assert_eq!(
            DateOutcome::Invalid("x".to_string()).into_value(),
            Some("x".to_string())
        );
    }
}
