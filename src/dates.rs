//! Epoch and calendar date helpers.
//!
//! Patterns use moment-style tokens (`DD-MM-YYYY HH:mm:ss`, see
//! [`DatePattern`]); names come from the Turkish locale.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::ast::DatePattern;
use crate::error::ParseError;
use crate::formatter::date::render_pattern;
use crate::locale::Locale;

/// Pattern used by [`format_epoch`] callers that have no pattern of their own.
pub const DEFAULT_DATETIME_PATTERN: &str = "DD-MM-YYYY HH:mm:ss";

/// Pattern of [`from_date_to_string`] and [`from_string_to_date`].
pub const DEFAULT_DATE_PATTERN: &str = "DD-MM-YYYY";

/// Convert epoch seconds to a UTC date-time. Non-positive input means "no date".
pub fn from_epoch(epoch_secs: i64) -> Option<DateTime<Utc>> {
    if epoch_secs <= 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(epoch_secs, 0)
}

/// Format epoch seconds (UTC) with a date pattern.
///
/// Returns an empty string for non-positive or out-of-range input.
pub fn format_epoch(epoch_secs: i64, pattern: &str) -> String {
    from_epoch(epoch_secs)
        .map(|dt| format_date(&dt.naive_utc(), pattern))
        .unwrap_or_default()
}

/// Format a date-time with a date pattern.
pub fn format_date<T>(dt: &T, pattern: &str) -> String
where
    T: Datelike + Timelike,
{
    render_pattern(dt, &DatePattern::parse(pattern), &Locale::tr_tr())
}

/// `DD-MM-YYYY`.
pub fn from_date_to_string(date: NaiveDate) -> String {
    format_date(&date.and_time(NaiveTime::MIN), DEFAULT_DATE_PATTERN)
}

/// Parse a `DD-MM-YYYY` string. An empty string means "no date".
pub fn from_string_to_date(s: &str) -> Result<Option<NaiveDate>, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%d-%m-%Y")
        .map(Some)
        .map_err(|_| ParseError::InvalidDate {
            input: s.to_string(),
            expected: DEFAULT_DATE_PATTERN,
        })
}

/// Epoch seconds of a wall-clock time read as UTC, truncated to the minute.
pub fn wall_clock_to_unix(dt: NaiveDateTime) -> i64 {
    let minute_start = dt.date().and_time(NaiveTime::MIN)
        + chrono::Duration::minutes(i64::from(dt.hour() * 60 + dt.minute()));
    minute_start.and_utc().timestamp()
}

/// Quarter (1-4) of a month (1-12).
pub fn quarter(month: u32) -> Option<u32> {
    (1..=12).contains(&month).then(|| (month - 1) / 3 + 1)
}
