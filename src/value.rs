//! Value types that can be formatted.

use std::fmt;

use crate::error::FormatError;

/// A value that can be formatted through a directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// A numeric value
    Number(f64),
    /// A text value
    Text(&'a str),
    /// A boolean value
    Bool(bool),
    /// No value
    Empty,
    /// A chrono DateTime (requires `chrono` feature)
    #[cfg(feature = "chrono")]
    DateTime(chrono::NaiveDateTime),
    /// A chrono Date (requires `chrono` feature)
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<u64> for Value<'a> {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s.as_str())
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a> From<()> for Value<'a> {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Empty, Into::into)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDateTime> for Value<'a> {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDate> for Value<'a> {
    fn from(d: chrono::NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl<'a> Value<'a> {
    /// Returns the value as a number if it is numeric or boolean.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Bool(true) => Some(1.0),
            Value::Bool(false) => Some(0.0),
            _ => None,
        }
    }

    /// Returns a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Empty => "empty",
            #[cfg(feature = "chrono")]
            Value::DateTime(_) => "datetime",
            #[cfg(feature = "chrono")]
            Value::Date(_) => "date",
        }
    }

    /// Coerce the value to a finite number.
    ///
    /// Text is trimmed and parsed; booleans count as 1 and 0.
    pub fn to_number(&self) -> Result<f64, FormatError> {
        let n = match self {
            Value::Text(s) => {
                s.trim()
                    .parse::<f64>()
                    .map_err(|_| FormatError::NotANumber {
                        input: (*s).to_string(),
                    })?
            }
            other => other.as_number().ok_or(FormatError::TypeMismatch {
                expected: "number",
                got: other.type_name(),
            })?,
        };

        if n.is_finite() {
            Ok(n)
        } else {
            Err(FormatError::NotANumber {
                input: js_number_string(n),
            })
        }
    }

    /// Like [`Value::to_number`], but text may use a comma as the decimal mark.
    pub fn to_number_comma_decimal(&self) -> Result<f64, FormatError> {
        match self {
            Value::Text(s) if s.contains(',') => {
                let normalized = s.replacen(',', ".", 1);
                Value::Text(&normalized).to_number()
            }
            other => other.to_number(),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&js_number_string(*n)),
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Empty => Ok(()),
            #[cfg(feature = "chrono")]
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            #[cfg(feature = "chrono")]
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Plain string form of a number, as a browser would print it.
pub(crate) fn js_number_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        s.to_string()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}
