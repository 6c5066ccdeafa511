//! Directive dispatch: value + directive to display string

#[cfg(feature = "chrono")]
pub(crate) mod date;
mod duration;
mod number;
mod text;

pub use duration::{format_duration, format_duration_in, TimeComponents};
pub use number::format_number;
pub use text::{format_text, format_text_in};

use crate::ast::NumberPattern;
use crate::directive::{DurationStyle, FormatDirective, FormatKind, TextStyle, UnitPosition};
use crate::error::FormatError;
use crate::locale::Locale;
use crate::options::FormatOptions;
use crate::value::Value;

impl FormatDirective {
    /// Format a value with this directive.
    ///
    /// This is an infallible method: when the strategy fails, the plain
    /// string form of the value is returned and the failure is logged.
    pub fn format(&self, value: &Value<'_>, opts: &FormatOptions) -> String {
        match self.try_format(value, opts) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(
                    directive = %self,
                    value_type = value.type_name(),
                    error = %err,
                    "format failed, falling back to plain value"
                );
                value.to_string()
            }
        }
    }

    /// Try to format a value with this directive.
    ///
    /// Unknown kinds are not an error: they yield the plain value without unit.
    pub fn try_format(&self, value: &Value<'_>, opts: &FormatOptions) -> Result<String, FormatError> {
        let result = match &self.kind {
            FormatKind::Date => format_date_kind(value, opts)?,
            FormatKind::Number | FormatKind::Currency => {
                let pattern = NumberPattern::parse(self.pattern())?;
                format_number(value.to_number()?, &pattern, &Locale::en_us())?
            }
            FormatKind::TrCurrency => {
                let pattern = NumberPattern::parse(self.pattern())?;
                let locale = Locale::en_us().with_swapped_separators();
                format_number(value.to_number_comma_decimal()?, &pattern, &locale)?
            }
            FormatKind::Percentage => {
                let pattern = NumberPattern::parse(self.pattern())?;
                format_number(value.to_number()? / 100.0, &pattern, &Locale::en_us())?
            }
            FormatKind::Duration => {
                let seconds = duration_seconds(value)?;
                format_duration(seconds, DurationStyle::from_name(&self.sub_format))
            }
            FormatKind::Text => {
                format_text(&value.to_string(), TextStyle::from_name(&self.sub_format))
            }
            FormatKind::Unknown(kind) => {
                tracing::debug!(kind = %kind, "unrecognized format type, using plain value");
                return Ok(value.to_string());
            }
        };

        Ok(add_unit(&result, &self.unit, &self.position))
    }
}

/// Decorate a formatted value with a unit.
///
/// `Left` gives `"{unit} {value}"`, every other position `"{value} {unit}"`.
/// An empty unit leaves the value unchanged.
pub fn add_unit(value: &str, unit: &str, position: &UnitPosition) -> String {
    if unit.is_empty() {
        return value.to_string();
    }
    match position {
        UnitPosition::Left => format!("{unit} {value}"),
        _ => format!("{value} {unit}"),
    }
}

/// Coerce a value to whole, non-negative seconds.
fn duration_seconds(value: &Value<'_>) -> Result<u64, FormatError> {
    let seconds = value.to_number()?;
    if seconds < 0.0 {
        return Err(FormatError::NegativeDuration { seconds });
    }
    if seconds >= u64::MAX as f64 {
        return Err(FormatError::DurationOutOfRange { seconds });
    }
    Ok(seconds.floor() as u64)
}

#[cfg(feature = "chrono")]
fn format_date_kind(value: &Value<'_>, opts: &FormatOptions) -> Result<String, FormatError> {
    date::format_date(value, opts)
}

#[cfg(not(feature = "chrono"))]
fn format_date_kind(value: &Value<'_>, _opts: &FormatOptions) -> Result<String, FormatError> {
    Err(FormatError::TypeMismatch {
        expected: "date (requires the `chrono` feature)",
        got: value.type_name(),
    })
}
