//! Number formatting (grouping, fixed and optional decimals, percent, abbreviations)

use crate::ast::{NumberPattern, SignStyle};
use crate::error::FormatError;
use crate::locale::Locale;
use crate::value::js_number_string;

/// Abbreviation thresholds, largest first.
const ABBREVIATIONS: [(f64, &str); 4] = [(1e12, "t"), (1e9, "b"), (1e6, "m"), (1e3, "k")];

/// Format a number according to a pattern.
///
/// Separators are taken from `locale`; the pattern itself always uses `,`
/// for grouping and `.` for decimals.
pub fn format_number(
    value: f64,
    pattern: &NumberPattern,
    locale: &Locale,
) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NotANumber {
            input: js_number_string(value),
        });
    }

    let mut adjusted = value;
    if pattern.percent.is_some() {
        adjusted *= 100.0;
    }

    let mut abbreviation = None;
    if pattern.abbreviation.is_some() {
        abbreviation = ABBREVIATIONS
            .iter()
            .position(|(threshold, _)| adjusted.abs() >= *threshold);
        if let Some(index) = abbreviation {
            adjusted /= ABBREVIATIONS[index].0;
        }
    }

    let places = pattern.max_decimals();
    let mut digits = rounded_digits(adjusted.abs(), places)?;

    // 999.95k rounds to 1000.0k, which reads as 1.0m
    if let Some(index) = abbreviation.filter(|&index| index > 0) {
        if digits.len() > places + 3 {
            adjusted /= 1000.0;
            abbreviation = Some(index - 1);
            digits = rounded_digits(adjusted.abs(), places)?;
        }
    }

    let negative = adjusted < 0.0 && digits.bytes().any(|b| b != b'0');

    // Split the scaled integer into integer and decimal digits
    let padded = format!("{:0>width$}", digits, width = places + 1);
    let (integer_digits, decimal_digits) = padded.split_at(padded.len() - places);

    let integer_str = format_integer(integer_digits, pattern, locale);
    let decimal_str = format_decimal(decimal_digits, pattern);

    let mut result = integer_str;
    if !decimal_str.is_empty() {
        result.push(locale.decimal_separator);
        result.push_str(decimal_str);
    }

    if let (Some(index), Some(spacing)) = (abbreviation, pattern.abbreviation) {
        result.push_str(spacing.as_str());
        result.push_str(ABBREVIATIONS[index].1);
    }

    if let Some(spacing) = pattern.percent {
        result.push_str(spacing.as_str());
        result.push('%');
    }

    Ok(apply_sign(result, negative, pattern.sign))
}

/// Round `value` to `places` decimals and return the scaled integer's digits.
///
/// The shift goes through the decimal exponent so that values such as 1.005
/// round the way they read rather than the way they are stored.
fn rounded_digits(value: f64, places: usize) -> Result<String, FormatError> {
    let shifted: f64 = format!("{value}e{places}")
        .parse()
        .map_err(|_| FormatError::Precision {
            value,
            decimals: places,
        })?;
    let rounded = shifted.round();
    if !rounded.is_finite() {
        return Err(FormatError::Precision {
            value,
            decimals: places,
        });
    }
    Ok(format!("{rounded:.0}"))
}

/// Format the integer digits with zero padding and thousands separators.
fn format_integer(digits: &str, pattern: &NumberPattern, locale: &Locale) -> String {
    let trimmed = digits.trim_start_matches('0');
    let value_str = format!(
        "{:0>width$}",
        trimmed,
        width = pattern.min_integer_digits.max(1)
    );

    if !pattern.grouping {
        return value_str;
    }

    let len = value_str.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in value_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(locale.thousands_separator);
        }
        result.push(c);
    }
    result
}

/// Keep the fixed decimals and the non-zero prefix of the optional ones.
fn format_decimal<'a>(digits: &'a str, pattern: &NumberPattern) -> &'a str {
    let (fixed, optional) = digits.split_at(pattern.decimals.min(digits.len()));
    let optional = optional.trim_end_matches('0');
    &digits[..fixed.len() + optional.len()]
}

fn apply_sign(formatted: String, negative: bool, sign: SignStyle) -> String {
    match (sign, negative) {
        (SignStyle::Parentheses, true) => format!("({formatted})"),
        (SignStyle::Always, false) => format!("+{formatted}"),
        (_, true) => format!("-{formatted}"),
        (_, false) => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64, pattern: &str) -> String {
        let pattern = NumberPattern::parse(pattern).unwrap();
        format_number(value, &pattern, &Locale::en_us()).unwrap()
    }

    #[test]
    fn test_grouped_integer() {
        assert_eq!(fmt(1234567.0, "0,0"), "1,234,567");
        assert_eq!(fmt(123.0, "0,0"), "123");
        assert_eq!(fmt(0.0, "0,0"), "0");
        assert_eq!(fmt(1234.5, "0,0"), "1,235");
    }

    #[test]
    fn test_fixed_decimals() {
        assert_eq!(fmt(1234.5, "0,0.00"), "1,234.50");
        assert_eq!(fmt(42.567, "0.00"), "42.57");
        assert_eq!(fmt(1.005, "0.00"), "1.01");
        assert_eq!(fmt(3.0, "0,0.0000"), "3.0000");
    }

    #[test]
    fn test_optional_decimals() {
        assert_eq!(fmt(1.5, "0.0[00]"), "1.5");
        assert_eq!(fmt(1.523, "0.0[00]"), "1.523");
        assert_eq!(fmt(1.0, "0[.]00"), "1.00");
        assert_eq!(fmt(2.0, "0.[00]"), "2");
    }

    #[test]
    fn test_leading_zero_padding() {
        assert_eq!(fmt(5.0, "000"), "005");
        assert_eq!(fmt(0.25, ".00"), "0.25");
    }

    #[test]
    fn test_percent() {
        assert_eq!(fmt(0.125, "0.00%"), "12.50%");
        assert_eq!(fmt(0.5, "0 %"), "50 %");
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(fmt(1234.0, "0.0a"), "1.2k");
        assert_eq!(fmt(2_500_000.0, "0.0 a"), "2.5 m");
        assert_eq!(fmt(999.0, "0 a"), "999");
    }

    #[test]
    fn test_abbreviation_rolls_over_after_rounding() {
        assert_eq!(fmt(999_999.0, "0.0a"), "1.0m");
        assert_eq!(fmt(999_950_000.0, "0.0a"), "1.0b");
        assert_eq!(fmt(-999_999.0, "0a"), "-1m");
        assert_eq!(fmt(999_940.0, "0.0a"), "999.9k");
    }

    #[test]
    fn test_signs() {
        assert_eq!(fmt(-1234.0, "0,0"), "-1,234");
        assert_eq!(fmt(-1234.0, "(0,0)"), "(1,234)");
        assert_eq!(fmt(1234.0, "(0,0)"), "1,234");
        assert_eq!(fmt(5.0, "+0"), "+5");
        assert_eq!(fmt(-5.0, "+0"), "-5");
        assert_eq!(fmt(-0.001, "0.00"), "0.00");
    }

    #[test]
    fn test_locale_separators() {
        let pattern = NumberPattern::parse("0,0.00").unwrap();
        let result = format_number(1234567.891, &pattern, &Locale::tr_tr()).unwrap();
        assert_eq!(result, "1.234.567,89");
    }

    #[test]
    fn test_non_finite_is_error() {
        let pattern = NumberPattern::parse("0,0").unwrap();
        assert!(format_number(f64::NAN, &pattern, &Locale::en_us()).is_err());
    }
}
