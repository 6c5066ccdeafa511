//! AST types for parsed numeric and date patterns.

use crate::error::ParseError;

/// How the sign of a number is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignStyle {
    /// Leading `-` on negatives only
    #[default]
    Minus,
    /// `+` - leading `+` on positives, `-` on negatives
    Always,
    /// `(0,0)` - negatives wrapped in parentheses
    Parentheses,
}

/// Whether a trailing marker is separated from the digits by a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// `0%`, `0a`
    Tight,
    /// `0 %`, `0 a`
    Spaced,
}

impl Spacing {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Spacing::Tight => "",
            Spacing::Spaced => " ",
        }
    }
}

/// A parsed numeric pattern such as `0,0.00`, `0.0[00]`, `(0,0)` or `0.00 %`.
///
/// Patterns are always written with `,` for grouping and `.` for decimals;
/// the separators actually printed come from the locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    /// Zeros before the decimal point (integer part is zero-padded to this width)
    pub min_integer_digits: usize,
    /// `,` in the integer part - group thousands
    pub grouping: bool,
    /// Zeros after the decimal point - always printed
    pub decimals: usize,
    /// Digits inside `[...]` after the fixed decimals - printed only when non-zero
    pub optional_decimals: usize,
    pub sign: SignStyle,
    /// `%` - value is multiplied by 100
    pub percent: Option<Spacing>,
    /// `a` - value is abbreviated with k, m, b or t
    pub abbreviation: Option<Spacing>,
}

impl Default for NumberPattern {
    fn default() -> Self {
        Self {
            min_integer_digits: 1,
            grouping: false,
            decimals: 0,
            optional_decimals: 0,
            sign: SignStyle::Minus,
            percent: None,
            abbreviation: None,
        }
    }
}

impl NumberPattern {
    /// Parse a numeric pattern.
    pub fn parse(pattern: &str) -> Result<NumberPattern, ParseError> {
        crate::parser::pattern::parse_number_pattern(pattern)
    }

    /// Largest number of decimal digits this pattern can print.
    pub fn max_decimals(&self) -> usize {
        self.decimals + self.optional_decimals
    }
}

/// Date/time pattern parts (moment-style tokens).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatePart {
    /// `YYYY` - Four-digit year
    Year4,
    /// `YY` - Two-digit year
    Year2,
    /// `MMMM` - Month full name
    MonthFull,
    /// `MMM` - Month abbreviated name
    MonthAbbr,
    /// `MM` - Month with leading zero (01-12)
    Month2,
    /// `M` - Month without leading zero (1-12)
    Month,
    /// `DD` - Day of month with leading zero (01-31)
    Day2,
    /// `D` - Day of month without leading zero (1-31)
    Day,
    /// `dddd` - Weekday full name
    DayFull,
    /// `ddd` - Weekday abbreviated name
    DayAbbr,
    /// `HH` - Hour 00-23
    Hour2,
    /// `H` - Hour 0-23
    Hour,
    /// `hh` - Hour 01-12
    Hour12_2,
    /// `h` - Hour 1-12
    Hour12,
    /// `mm` - Minute with leading zero
    Minute2,
    /// `m` - Minute without leading zero
    Minute,
    /// `ss` - Second with leading zero
    Second2,
    /// `s` - Second without leading zero
    Second,
    /// `A` - AM/PM marker
    AmPmUpper,
    /// `a` - lowercase am/pm marker
    AmPmLower,
    /// Text copied to the output as-is (unrecognized characters and `[...]` escapes)
    Literal(String),
}

/// A parsed date pattern such as `DD-MM-YYYY HH:mm:ss`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    parts: Vec<DatePart>,
}

impl DatePattern {
    pub fn from_parts(parts: Vec<DatePart>) -> Self {
        DatePattern { parts }
    }

    pub fn parts(&self) -> &[DatePart] {
        &self.parts
    }

    /// Parse a date pattern. Never fails; unknown characters become literals.
    pub fn parse(pattern: &str) -> DatePattern {
        crate::parser::date_pattern::parse_date_pattern(pattern)
    }
}
