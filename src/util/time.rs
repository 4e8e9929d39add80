//! Timestamp parsing and display utilities.
//!
//! The backend sends ISO-8601 timestamps, sometimes with an offset (`2024-01-15T10:00:00Z`) and
//! sometimes without (`2024-01-15T10:00:00.123`). Records carry them as local wall-clock
//! [`NaiveDateTime`] values so that list rendering and the "analysed today" count agree with
//! what the user's clock shows. No timezone normalization beyond that is performed.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Formats accepted for timestamps without an offset.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d"];

/// Parses a backend timestamp into local wall-clock time.
///
/// # Logic
/// - RFC 3339 values with an offset are converted to the local timezone
/// - Values without an offset are taken as already local
/// - A bare date is taken as local midnight
///
/// # Returns
/// - `Some(NaiveDateTime)` - The local wall-clock time
/// - `None` - The value is empty or not a recognized timestamp
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    NAIVE_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(value, format).ok().or_else(|| {
            NaiveDate::parse_from_str(value, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
    })
}

/// Formats a local timestamp the way the browser's `toLocaleString` does for `en-US`.
///
/// ```ignore
/// // 2024-01-15T14:05:09 -> "1/15/2024, 2:05:09 PM"
/// ```
pub fn format_local(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Returns the current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns true if the timestamp falls on the given local date
pub fn is_on_date(timestamp: &NaiveDateTime, date: NaiveDate) -> bool {
    timestamp.date() == date
}
