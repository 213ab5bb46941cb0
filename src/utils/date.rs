//! Lenient date helpers
//!
//! These helpers never fail: unparseable or absent input degrades to
//! [`zero_time`] when parsing and to [`FALLBACK_DATE`] when formatting.

use super::value::Value;
use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returned by [`format_date`] for absent or unrecognised input
pub const FALLBACK_DATE: &str = "1970-01-01";

/// The zero date/time, `0001-01-01 00:00:00`.
pub fn zero_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn is_zero_time(value: &NaiveDateTime) -> bool {
    *value == zero_time()
}

/// Parse a strict `YYYY-MM-DD` date, returning [`zero_time`] on failure.
pub fn parse_time(text: &str) -> NaiveDateTime {
    parse_iso_date(text).unwrap_or_else(|| {
        log::debug!("Could not parse '{}' as YYYY-MM-DD, using zero time", text);
        zero_time()
    })
}

/// Format a date value as `YYYY-MM-DD`.
///
/// Null, absent and non-date values all produce [`FALLBACK_DATE`].
pub fn format_date(value: &Value) -> String {
    let dt = match value {
        Value::DateTime(dt) => dt,
        Value::OptDateTime(Some(dt)) => dt,
        Value::Null | Value::OptDateTime(None) => return FALLBACK_DATE.to_string(),
        other => {
            log::debug!("format_date got a non-date value {:?}", other);
            return FALLBACK_DATE.to_string();
        }
    };

    dt.format(DATE_FORMAT).to_string().chars().take(10).collect()
}

/// Parse a text value as `YYYY-MM-DD`.
///
/// Absent, unparseable and non-text values all produce [`zero_time`].
pub fn str_to_date(value: &Value) -> NaiveDateTime {
    match value {
        Value::Text(text) => parse_time(text),
        Value::OptText(Some(text)) => parse_time(text),
        _ => zero_time(),
    }
}

/// Strict parse: exactly four year digits, two month digits, two day digits.
fn parse_iso_date(text: &str) -> Option<NaiveDateTime> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn test_zero_time() {
        assert_eq!(zero_time().to_string(), "0001-01-01 00:00:00");
        assert!(is_zero_time(&zero_time()));
        assert!(!is_zero_time(&date(2024, 3, 5)));
    }

    #[test]
    fn test_parse_time_valid() {
        assert_eq!(parse_time("2024-03-05"), date(2024, 3, 5));
        assert_eq!(parse_time("2000-02-29"), date(2000, 2, 29));
    }

    #[test]
    fn test_parse_time_invalid_is_zero() {
        for input in [
            "",
            "not-a-date",
            "2024-3-5",
            "2024/03/05",
            "2024-02-30",
            "2024-13-01",
            " 2024-03-05",
            "2024-03-05T10:00:00",
        ] {
            assert!(is_zero_time(&parse_time(input)), "{}", input);
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&Value::Null), "1970-01-01");
        assert_eq!(format_date(&Value::DateTime(date(2024, 3, 5))), "2024-03-05");
        assert_eq!(
            format_date(&Value::OptDateTime(Some(date(1999, 12, 31)))),
            "1999-12-31"
        );
        assert_eq!(format_date(&Value::OptDateTime(None)), "1970-01-01");
    }

    #[test]
    fn test_format_date_drops_time_of_day() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .expect("valid date");
        assert_eq!(format_date(&dt.into()), "2024-03-05");
    }

    #[test]
    fn test_format_date_unrecognised_falls_back() {
        assert_eq!(format_date(&"2024-03-05".into()), "1970-01-01");
        assert_eq!(format_date(&Value::Int(20240305)), "1970-01-01");
    }

    #[test]
    fn test_str_to_date() {
        assert_eq!(str_to_date(&"2024-03-05".into()), date(2024, 3, 5));
        assert_eq!(
            str_to_date(&Value::OptText(Some("2023-01-31".to_string()))),
            date(2023, 1, 31)
        );
        assert!(is_zero_time(&str_to_date(&"not-a-date".into())));
        assert!(is_zero_time(&str_to_date(&Value::OptText(None))));
        assert!(is_zero_time(&str_to_date(&Value::Null)));
        assert!(is_zero_time(&str_to_date(&Value::Int(5))));
    }

    #[test]
    fn test_format_after_parse() {
        assert_eq!(
            format_date(&str_to_date(&"2024-03-05".into()).into()),
            "2024-03-05"
        );
    }
}
