//! Formatting and parsing of the displayed value.
//!
//! Formats are chrono `strftime` patterns. A pattern without time fields
//! parses to midnight.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

use drp_model::date::day_start;
use drp_model::{DateParseError, DateValue};

use crate::hooks::Clock;

pub fn format_date(value: &DateValue, format: &str) -> String {
    value.format(format).to_string()
}

/// The input-box text for a selection.
pub fn format_value(
    start: Option<&DateValue>,
    end: Option<&DateValue>,
    format: &str,
    separator: &str,
) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!(
            "{}{separator}{}",
            format_date(start, format),
            format_date(end, format)
        ),
        (Some(start), None) => format_date(start, format),
        _ => String::new(),
    }
}

/// Parse `text` with `format`.
///
/// # Errors
///
/// Returns [`DateParseError`] when the text matches neither a date-time nor a
/// date-only reading of the pattern.
pub fn parse_date(text: &str, format: &str) -> Result<DateValue, DateParseError> {
    let text = text.trim();
    if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
        return Ok(value);
    }
    NaiveDate::parse_from_str(text, format)
        .map(day_start)
        .map_err(|source| DateParseError {
            input: text.to_string(),
            format: format.to_string(),
            source,
        })
}

/// Parse `text`, falling back to the clock's current time.
pub fn parse_or_now(text: &str, format: &str, clock: &dyn Clock) -> DateValue {
    match parse_date(text, format) {
        Ok(value) => value,
        Err(err) => {
            let now = clock.now();
            warn!(error = %err, fallback = %now, "unparseable date, using now");
            now
        }
    }
}

/// Split input text into its start and optional end part.
pub fn split_value<'a>(text: &'a str, separator: &str) -> (&'a str, Option<&'a str>) {
    match text.split_once(separator) {
        Some((start, end)) => (start.trim(), Some(end.trim())),
        None => (text.trim(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::FixedClock;
    use drp_model::date::day_end;
    use drp_model::{DEFAULT_FORMAT, DEFAULT_SEPARATOR};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_value_joins_with_separator() {
        let start = day_start(date(2024, 3, 11));
        let end = day_end(date(2024, 3, 17));
        assert_eq!(
            format_value(Some(&start), Some(&end), DEFAULT_FORMAT, DEFAULT_SEPARATOR),
            "2024-03-11 to 2024-03-17"
        );
        assert_eq!(format_value(Some(&start), None, "%d/%m/%Y", DEFAULT_SEPARATOR), "11/03/2024");
        assert_eq!(format_value(None, None, DEFAULT_FORMAT, DEFAULT_SEPARATOR), "");
    }

    #[test]
    fn parses_date_and_datetime_patterns() {
        assert_eq!(
            parse_date(" 2024-03-11 ", DEFAULT_FORMAT).unwrap(),
            day_start(date(2024, 3, 11))
        );
        let value = parse_date("2024-03-11 09:30", "%Y-%m-%d %H:%M").unwrap();
        assert_eq!(value.format("%H:%M").to_string(), "09:30");
        assert!(parse_date("next tuesday", DEFAULT_FORMAT).is_err());
    }

    #[test]
    fn garbage_falls_back_to_now() {
        let clock = FixedClock::at(date(2024, 3, 14));
        assert_eq!(parse_or_now("31/31/31", DEFAULT_FORMAT, &clock), day_start(date(2024, 3, 14)));
    }

    #[test]
    fn splits_on_separator() {
        assert_eq!(
            split_value("2024-03-01 to 2024-03-05", DEFAULT_SEPARATOR),
            ("2024-03-01", Some("2024-03-05"))
        );
        assert_eq!(split_value("2024-03-01", DEFAULT_SEPARATOR), ("2024-03-01", None));
    }
}
