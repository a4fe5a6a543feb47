//! Parsing of free-text operator input.
//!
//! Prompts accept empty input as "use the default" (today, now). Everything
//! else must be ISO 8601: `YYYY-MM-DD` for dates, `HH:MM:SS` (or `HH:MM`) for
//! times.

use chrono::{NaiveDate, NaiveTime, Timelike};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("'{0}' is not a valid time, expected HH:MM:SS")]
    InvalidTime(String),
    #[error("{0} is required")]
    Required(&'static str),
}

pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| InputError::InvalidDate(input.to_string()))
}

/// Parses a date, returning `default` for blank input.
pub fn parse_date_or(input: &str, default: NaiveDate) -> Result<NaiveDate, InputError> {
    if input.trim().is_empty() {
        return Ok(default);
    }
    parse_date(input)
}

pub fn parse_time(input: &str) -> Result<NaiveTime, InputError> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .map_err(|_| InputError::InvalidTime(input.to_string()))
}

/// Parses a time, returning `default` (truncated to whole seconds) for blank input.
pub fn parse_time_or(input: &str, default: NaiveTime) -> Result<NaiveTime, InputError> {
    if input.trim().is_empty() {
        return Ok(truncate_seconds(default));
    }
    parse_time(input)
}

/// Drops sub-second precision so stored times read back as `HH:MM:SS`.
pub fn truncate_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// Rejects blank required fields.
pub fn required(value: &str, field: &'static str) -> Result<String, InputError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::Required(field));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_date_falls_back_to_default() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(parse_date_or("  ", today), Ok(today));
        assert_eq!(parse_date_or("2024-01-31", today), Ok(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
    }

    #[test]
    fn rejects_non_iso_dates() {
        assert!(matches!(parse_date("05/01/2024"), Err(InputError::InvalidDate(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(InputError::InvalidDate(_))));
    }

    #[test]
    fn times_accept_seconds_or_minutes() {
        assert_eq!(parse_time("17:30:00"), Ok(NaiveTime::from_hms_opt(17, 30, 0).unwrap()));
        assert_eq!(parse_time("08:15"), Ok(NaiveTime::from_hms_opt(8, 15, 0).unwrap()));
        assert!(parse_time("25:00:00").is_err());
    }

    #[test]
    fn blank_time_is_truncated_now() {
        let now = NaiveTime::from_hms_nano_opt(9, 0, 1, 123_456_789).unwrap();
        assert_eq!(parse_time_or("", now), Ok(NaiveTime::from_hms_opt(9, 0, 1).unwrap()));
    }

    #[test]
    fn required_fields_are_trimmed() {
        assert_eq!(required("  Ann ", "Name"), Ok("Ann".to_string()));
        assert_eq!(required("   ", "Name"), Err(InputError::Required("Name")));
    }
}
