use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("due_date parameter is required")]
    Missing,
    #[error("invalid date format, expected YYYY-MM-DD")]
    InvalidFormat,
}

/// Validates a raw path segment as a `YYYY-MM-DD` calendar date.
///
/// The value is interpolated into a JavaScript lexical context, so the shape
/// check is strict: exactly ten bytes, ASCII digits with dashes at positions
/// 4 and 7. Anything else (quotes, braces, script-closing sequences, padded
/// or unpadded variants) is rejected before it can reach the template engine.
/// Shape-valid input is then checked against real calendar rules, so day 31
/// in a 30-day month or Feb 29 outside a leap year still fails.
pub fn validate(raw: &str) -> Result<NaiveDate, DateError> {
    if raw.is_empty() {
        return Err(DateError::Missing);
    }

    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(DateError::InvalidFormat);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DateError::InvalidFormat)
}
