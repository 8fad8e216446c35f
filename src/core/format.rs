//! Shared display formatting helpers.
//!
//! These produce the exact text shapes the order list renders: two-decimal
//! amounts, short en-US dates, and 12-hour clock times. They never fail;
//! unparseable time text is returned verbatim so a malformed old record still
//! displays something.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Formats an amount with exactly two decimal places, e.g. `3500.00`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Formats a pickup date as short en-US text, e.g. `Mar 1, 2025`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats `HH:MM` (or `HH:MM:SS`) wall-clock text as a 12-hour time,
/// e.g. `2:30 PM`. Input that parses as neither form is returned unchanged.
#[must_use]
pub fn format_time(time: &str) -> String {
    let trimmed = time.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_or_else(
            |_| trimmed.to_string(),
            |parsed| parsed.format("%-I:%M %p").to_string(),
        )
}

/// Formats a placement timestamp, e.g. `Mar 1, 2025, 02:30 PM`.
#[must_use]
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}
