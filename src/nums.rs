//! Numeric conversion and rounding helpers.

use crate::ast::NumberPattern;
use crate::formatter::format_number;
use crate::locale::Locale;
use crate::value::Value;

/// Round to `fix` decimal places. Missing or NaN input counts as zero.
pub fn round_to(num: Option<f64>, fix: u32) -> f64 {
    let num = match num {
        Some(n) if !n.is_nan() => n,
        _ => return 0.0,
    };
    if fix == 0 {
        return num.round();
    }
    // Round through the decimal string so 1.005 becomes 1.01
    format!("{num}e{fix}")
        .parse::<f64>()
        .map_or(0.0, |shifted| shifted.round() / 10_f64.powi(fix as i32))
}

/// Parse a Turkish-formatted number such as `1.234,5`.
///
/// Drops the first `.` and reads the first `,` as the decimal mark.
/// Unparseable input gives zero.
pub fn parse_turkish_number(s: &str) -> f64 {
    let normalized = s.trim().replacen('.', "", 1).replacen(',', ".", 1);
    normalized
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Parse the leading integer of a string (`"42px"` is 42). Zero when none.
pub fn parse_int(s: &str) -> i64 {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    s[..sign_len + digits_len].parse().unwrap_or(0)
}

/// Group thousands with at least two decimals (`1,234.50`). Zero and NaN give `"0"`.
pub fn format_grouped(num: f64) -> String {
    if num == 0.0 || !num.is_finite() {
        return "0".to_string();
    }
    let pattern = NumberPattern {
        grouping: true,
        decimals: 2,
        optional_decimals: 1,
        ..NumberPattern::default()
    };
    format_number(num, &pattern, &Locale::en_us()).unwrap_or_else(|_| "0".to_string())
}

/// Round to an integer, then [`format_grouped`].
pub fn round_up(num: f64) -> String {
    format_grouped(num.round())
}

/// Round a number or numeric text to an integer string. Invalid input gives `"0"`.
pub fn round_up_str(value: &Value<'_>) -> String {
    match value.to_number() {
        Ok(n) if n != 0.0 => format!("{}", n.round() as i64),
        _ => "0".to_string(),
    }
}

/// Increase `num` by `percentage` percent.
pub fn calc_percentage(num: f64, percentage: f64) -> f64 {
    if num == 0.0 {
        return 0.0;
    }
    num / 100.0 * percentage + num
}

/// Returns true if the textual form starts with a minus sign.
pub fn is_negative(s: &str) -> bool {
    s.starts_with('-')
}

/// Format with a numeric pattern and Turkish separators.
///
/// Text may use a comma as the decimal mark. Empty, invalid or non-numeric
/// input gives `"0"`, as does an invalid pattern.
pub fn format_turkish_currency(value: &Value<'_>, pattern: &str) -> String {
    let pattern = if pattern.is_empty() { "0,0.00" } else { pattern };
    let Ok(pattern) = NumberPattern::parse(pattern) else {
        return "0".to_string();
    };
    value
        .to_number_comma_decimal()
        .and_then(|n| format_number(n, &pattern, &Locale::tr_tr()))
        .unwrap_or_else(|_| "0".to_string())
}
