//! Date and time formatting

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::ast::{DatePart, DatePattern};
use crate::error::FormatError;
use crate::locale::Locale;
use crate::options::FormatOptions;
use crate::value::Value;

/// Text layouts accepted for date values, tried in order after RFC 3339.
const DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Resolve a value to a calendar date.
///
/// Numbers are epoch milliseconds and are placed in `opts.utc_offset`.
pub fn value_to_date(value: &Value<'_>, opts: &FormatOptions) -> Result<NaiveDate, FormatError> {
    match value {
        Value::Number(millis) => {
            let invalid = || FormatError::TimestampOutOfRange { millis: *millis };
            if !millis.is_finite() {
                return Err(invalid());
            }
            let utc = DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64)
                .ok_or_else(invalid)?;
            Ok(utc.with_timezone(&opts.utc_offset).date_naive())
        }
        Value::Text(s) => parse_date_text(s.trim(), opts),
        Value::Date(d) => Ok(*d),
        Value::DateTime(dt) => Ok(dt.date()),
        other => Err(FormatError::TypeMismatch {
            expected: "date",
            got: other.type_name(),
        }),
    }
}

fn parse_date_text(s: &str, opts: &FormatOptions) -> Result<NaiveDate, FormatError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&opts.utc_offset).date_naive());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, DATE_LAYOUT).map_err(|_| FormatError::InvalidDate {
        input: s.to_string(),
    })
}

/// Format a value as a two-digit day, two-digit month and four-digit year.
pub fn format_date(value: &Value<'_>, opts: &FormatOptions) -> Result<String, FormatError> {
    let date = value_to_date(value, opts)?;
    Ok(short_date(&date, &Locale::tr_tr()))
}

/// `DD.MM.YYYY` with the locale's date separator.
pub fn short_date(date: &NaiveDate, locale: &Locale) -> String {
    let sep = locale.date_separator;
    format!(
        "{:02}{sep}{:02}{sep}{:04}",
        date.day(),
        date.month(),
        date.year()
    )
}

/// Render a date/time through a parsed pattern.
pub fn render_pattern<T>(dt: &T, pattern: &DatePattern, locale: &Locale) -> String
where
    T: Datelike + Timelike,
{
    let mut result = String::new();
    for part in pattern.parts() {
        match part {
            DatePart::Literal(s) => result.push_str(s),
            other => result.push_str(&format_date_part(other, dt, locale)),
        }
    }
    result
}

/// Format a single date/time part.
fn format_date_part<T>(part: &DatePart, dt: &T, locale: &Locale) -> String
where
    T: Datelike + Timelike,
{
    let month_index = dt.month0() as usize;
    let weekday_index = dt.weekday().num_days_from_sunday() as usize;
    let hour12 = match dt.hour() % 12 {
        0 => 12,
        h => h,
    };

    match part {
        // Year formatting
        DatePart::Year4 => format!("{:04}", dt.year()),
        DatePart::Year2 => format!("{:02}", dt.year().rem_euclid(100)),

        // Month formatting
        DatePart::MonthFull => locale.month_names_full[month_index].to_string(),
        DatePart::MonthAbbr => locale.month_names_short[month_index].to_string(),
        DatePart::Month2 => format!("{:02}", dt.month()),
        DatePart::Month => dt.month().to_string(),

        // Day formatting
        DatePart::Day2 => format!("{:02}", dt.day()),
        DatePart::Day => dt.day().to_string(),
        DatePart::DayFull => locale.day_names_full[weekday_index].to_string(),
        DatePart::DayAbbr => locale.day_names_short[weekday_index].to_string(),

        // Time formatting
        DatePart::Hour2 => format!("{:02}", dt.hour()),
        DatePart::Hour => dt.hour().to_string(),
        DatePart::Hour12_2 => format!("{hour12:02}"),
        DatePart::Hour12 => hour12.to_string(),
        DatePart::Minute2 => format!("{:02}", dt.minute()),
        DatePart::Minute => dt.minute().to_string(),
        DatePart::Second2 => format!("{:02}", dt.second()),
        DatePart::Second => dt.second().to_string(),

        DatePart::AmPmUpper | DatePart::AmPmLower => {
            let marker = if dt.hour() < 12 {
                locale.am_string
            } else {
                locale.pm_string
            };
            if matches!(part, DatePart::AmPmLower) {
                locale.casing.to_lower(marker)
            } else {
                marker.to_string()
            }
        }

        DatePart::Literal(s) => s.clone(),
    }
}
