//! Flight duration computation.
//!
//! Timestamps use a fixed naive-local format, `YYYY-MM-DD HH:MM`, with no
//! seconds and no offset.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// chrono format string for flight timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Human-readable form of [`TIMESTAMP_FORMAT`], used in error messages.
pub const TIMESTAMP_FORMAT_HINT: &str = "YYYY-MM-DD HH:MM";

/// Byte offsets of the separators within a well-formed timestamp.
const SEPARATORS: [(usize, u8); 4] = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':')];

/// Parse a flight timestamp.
///
/// The input must be exactly `DDDD-DD-DD DD:DD` and name a real calendar
/// date and time of day.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestampFormat`] if the string does not conform.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    if !has_timestamp_shape(value) {
        return Err(Error::invalid_timestamp(value));
    }

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| Error::invalid_timestamp(value))
}

/// chrono on its own accepts single-digit fields and signed years.
fn has_timestamp_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != TIMESTAMP_FORMAT_HINT.len() {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| {
        match SEPARATORS.iter().find(|(pos, _)| *pos == i) {
            Some((_, sep)) => b == sep,
            None => b.is_ascii_digit(),
        }
    })
}

/// Compute the duration between two timestamps in whole minutes.
///
/// The result is truncated toward zero and is negative when `arrival`
/// precedes `departure`.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestampFormat`] if either timestamp is malformed.
///
/// # Examples
///
/// ```
/// use flightregistry::compute_duration;
///
/// let minutes = compute_duration("2025-02-19 15:30", "2025-02-20 03:45").unwrap();
/// assert_eq!(minutes, 735);
/// ```
pub fn compute_duration(departure: &str, arrival: &str) -> Result<i64> {
    let departure = parse_timestamp(departure)?;
    let arrival = parse_timestamp(arrival)?;
    Ok((arrival - departure).num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overnight_duration() {
        assert_eq!(
            compute_duration("2025-02-19 15:30", "2025-02-20 03:45").unwrap(),
            735
        );
    }

    #[test]
    fn test_same_day_duration() {
        assert_eq!(
            compute_duration("2025-02-21 11:00", "2025-02-21 16:00").unwrap(),
            300
        );
    }

    #[test]
    fn test_multi_day_duration() {
        assert_eq!(
            compute_duration("2025-02-22 10:00", "2025-02-24 10:00").unwrap(),
            2880
        );
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(
            compute_duration("2025-02-19 15:30", "2025-02-19 15:30").unwrap(),
            0
        );
    }

    #[test]
    fn test_negative_duration() {
        assert_eq!(
            compute_duration("2025-02-20 03:45", "2025-02-19 15:30").unwrap(),
            -735
        );
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(
            compute_duration("2024-02-28 23:00", "2024-03-01 01:00").unwrap(),
            26 * 60
        );
    }

    #[test]
    fn test_date_only_rejected() {
        let err = compute_duration("2025-02-19", "2025-02-20 03:45").unwrap_err();
        assert!(err.is_invalid_timestamp());
        assert!(err.to_string().contains("2025-02-19"));
    }

    #[test]
    fn test_malformed_arrival_rejected() {
        let err = compute_duration("2025-02-19 15:30", "tomorrow").unwrap_err();
        assert!(err.is_invalid_timestamp());
    }

    #[test]
    fn test_seconds_rejected() {
        assert!(parse_timestamp("2025-02-19 15:30:00").is_err());
    }

    #[test]
    fn test_single_digit_fields_rejected() {
        assert!(parse_timestamp("2025-2-19 15:30").is_err());
        assert!(parse_timestamp("2025-02-19 5:30").is_err());
    }

    #[test]
    fn test_wrong_separators_rejected() {
        assert!(parse_timestamp("2025/02/19 15:30").is_err());
        assert!(parse_timestamp("2025-02-19T15:30").is_err());
    }

    #[test]
    fn test_impossible_calendar_values_rejected() {
        assert!(parse_timestamp("2025-02-30 10:00").is_err());
        assert!(parse_timestamp("2025-13-01 10:00").is_err());
        assert!(parse_timestamp("2025-02-19 24:00").is_err());
    }

    #[test]
    fn test_parse_timestamp_fields() {
        use chrono::{Datelike, Timelike};

        let ts = parse_timestamp("2025-02-19 15:30").unwrap();
        assert_eq!(ts.year(), 2025);
        assert_eq!(ts.month(), 2);
        assert_eq!(ts.day(), 19);
        assert_eq!(ts.hour(), 15);
        assert_eq!(ts.minute(), 30);
        assert_eq!(ts.second(), 0);
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(parse_timestamp("2025-02-19 15:3٠").is_err());
    }
}
