//! Shared parsing utilities for the accident dataset.
//!
//! Small field-level parsers used while loading the CSV snapshot. Each
//! returns `Option` so the loader can attach row/column context to errors.

use chrono::NaiveDate;

/// Parses a calendar date, accepting either a plain ISO date or a datetime
/// prefix (`2015-06-01` or `2015-06-01 14:30:00` / `2015-06-01T14:30:00`).
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    // Datetime forms: take the date component.
    let date_part = s.split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parses a boolean flag cell. Accepts the forms produced by common
/// spreadsheet and dataframe exports, case-insensitively.
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "wahr" | "1" | "ja" => Some(true),
        "false" | "falsch" | "0" | "nein" => Some(false),
        _ => None,
    }
}

/// Parses an hour-of-day cell, accepting integer or float renderings
/// (`"14"` or `"14.0"`). Returns `None` outside 0-23 or for fractional
/// values; a malformed cell must surface as an error, not round silently.
#[must_use]
pub fn parse_hour(s: &str) -> Option<u8> {
    let s = s.trim();
    if let Ok(hour) = s.parse::<u8>() {
        return (hour <= 23).then_some(hour);
    }
    let f = s.parse::<f64>().ok()?;
    if f.fract() == 0.0 && (0.0..=23.0).contains(&f) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(f as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_iso_date() {
        let date = parse_date("2015-06-01").unwrap();
        assert_eq!(date.to_string(), "2015-06-01");
    }

    #[test]
    fn parses_datetime_forms() {
        assert_eq!(
            parse_date("2015-06-01 14:30:00").unwrap().to_string(),
            "2015-06-01"
        );
        assert_eq!(
            parse_date("2015-06-01T14:30:00").unwrap().to_string(),
            "2015-06-01"
        );
    }

    #[test]
    fn rejects_invalid_date() {
        assert!(parse_date("kein Datum").is_none());
        assert!(parse_date("2015-13-01").is_none());
    }

    #[test]
    fn parses_bool_forms() {
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("WAHR"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("vielleicht"), None);
    }

    #[test]
    fn parses_hour_forms() {
        assert_eq!(parse_hour("0"), Some(0));
        assert_eq!(parse_hour("23"), Some(23));
        assert_eq!(parse_hour("14.0"), Some(14));
        assert_eq!(parse_hour("24"), None);
        assert_eq!(parse_hour("abends"), None);
        // Malformed float cells must not round into a valid hour.
        assert_eq!(parse_hour("-1.0"), None);
        assert_eq!(parse_hour("14.9"), None);
        assert_eq!(parse_hour("24.0"), None);
    }
}
