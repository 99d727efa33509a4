//! Date and time parsing/formatting for display surfaces.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors raised when host-supplied date strings cannot be interpreted.
pub enum FormatError {
    /// The value is not a recognized date or timestamp.
    #[error("unrecognized date `{0}`")]
    InvalidDate(String),
    /// The value is not a recognized date-time.
    #[error("unrecognized date-time `{0}`")]
    InvalidDateTime(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Display style for calendar dates.
pub enum DateStyle {
    /// `03/14/2024`
    Short,
    /// `Mar 14, 2024`
    #[default]
    Medium,
    /// `Thursday, March 14, 2024`
    Long,
    /// `2024-03-14`
    Iso,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%m/%d/%Y",
            Self::Medium => "%b %-d, %Y",
            Self::Long => "%A, %B %-d, %Y",
            Self::Iso => "%Y-%m-%d",
        }
    }
}

/// Parses a date from ISO, US, RFC 3339, or local date-time strings.
pub fn parse_date(raw: &str) -> Result<NaiveDate, FormatError> {
    let trimmed = raw.trim();
    for pattern in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, pattern) {
            return Ok(date);
        }
    }
    parse_datetime(trimmed)
        .map(|value| value.date())
        .map_err(|_| FormatError::InvalidDate(raw.to_string()))
}

/// Parses an RFC 3339 timestamp (offset dropped) or a local `YYYY-MM-DDTHH:MM[:SS]` value.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, FormatError> {
    let trimmed = raw.trim();
    if let Ok(value) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(value.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
        .ok_or_else(|| FormatError::InvalidDateTime(raw.to_string()))
}

/// Formats a raw date string in the requested style.
pub fn format_date(raw: &str, style: DateStyle) -> Result<String, FormatError> {
    parse_date(raw).map(|date| date.format(style.pattern()).to_string())
}

/// Formats a raw date string, returning the input unchanged when it cannot be parsed.
pub fn format_date_or_raw(raw: &str, style: DateStyle) -> String {
    format_date(raw, style).unwrap_or_else(|_| raw.to_string())
}

/// Formats an already-parsed date.
pub fn format_day(date: NaiveDate, style: DateStyle) -> String {
    date.format(style.pattern()).to_string()
}

/// Formats a 12-hour clock time such as `9:05 AM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Formats a date-time as `<date> · <time>`.
pub fn format_datetime(value: NaiveDateTime, style: DateStyle) -> String {
    format!(
        "{} · {}",
        value.date().format(style.pattern()),
        format_time(value.time())
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_iso_us_and_timestamp_inputs() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 14).expect("date");
        assert_eq!(parse_date("2024-03-14"), Ok(expected));
        assert_eq!(parse_date("03/14/2024"), Ok(expected));
        assert_eq!(parse_date("2024-03-14T08:30:00Z"), Ok(expected));
        assert_eq!(parse_date(" 2024-03-14T08:30 "), Ok(expected));
    }

    #[test]
    fn malformed_input_reports_the_raw_value() {
        assert_eq!(
            parse_date("next tuesday"),
            Err(FormatError::InvalidDate("next tuesday".to_string()))
        );
        assert_eq!(
            format_date("2024-13-40", DateStyle::Medium),
            Err(FormatError::InvalidDate("2024-13-40".to_string()))
        );
    }

    #[test]
    fn raw_fallback_keeps_unparsable_input() {
        assert_eq!(format_date_or_raw("soon-ish", DateStyle::Long), "soon-ish");
        assert_eq!(format_date_or_raw("2024-03-04", DateStyle::Iso), "2024-03-04");
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).expect("date");
        assert_eq!(format_day(date, DateStyle::Medium), "Dec 1, 2024");
    }

    #[test]
    fn styles_render_expected_shapes() {
        assert_eq!(
            format_date("2024-03-04", DateStyle::Short).as_deref(),
            Ok("03/04/2024")
        );
        assert_eq!(
            format_date("2024-03-04", DateStyle::Medium).as_deref(),
            Ok("Mar 4, 2024")
        );
        assert_eq!(
            format_date("2024-03-04", DateStyle::Long).as_deref(),
            Ok("Monday, March 4, 2024")
        );
        assert_eq!(
            format_date("03/04/2024", DateStyle::Iso).as_deref(),
            Ok("2024-03-04")
        );
    }

    #[test]
    fn times_use_twelve_hour_clock() {
        let morning = NaiveTime::from_hms_opt(9, 5, 0).expect("time");
        let evening = NaiveTime::from_hms_opt(21, 30, 0).expect("time");
        assert_eq!(format_time(morning), "9:05 AM");
        assert_eq!(format_time(evening), "9:30 PM");

        let value = parse_datetime("2024-03-04T21:30").expect("datetime");
        assert_eq!(
            format_datetime(value, DateStyle::Medium),
            "Mar 4, 2024 · 9:30 PM"
        );
    }

    #[test]
    fn date_style_serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&DateStyle::Iso).expect("serialize"),
            "\"iso\""
        );
        let style: DateStyle = serde_json::from_str("\"long\"").expect("deserialize");
        assert_eq!(style, DateStyle::Long);
    }
}
