//! Parsed format directives.
//!
//! A directive is the structured form of a compact format string
//! `type:=format@position|unit`, for example `number:=0,0.00@right|TL`.

use std::fmt;
use std::str::FromStr;

/// Formatting strategy selected by the directive type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `date` - calendar date, `DD.MM.YYYY`
    Date,
    /// `number` - numeric pattern, default `0,0`
    Number,
    /// `currency` - numeric pattern, default `0,0.00`
    Currency,
    /// `tr-currency` - numeric pattern with Turkish separators, default `0,0.00`
    TrCurrency,
    /// `percentage` - value divided by 100, default `0.00%`
    Percentage,
    /// `duration` - seconds rendered in one of the duration styles
    Duration,
    /// `text` - casing transformation
    Text,
    /// Anything else. Formats as the plain value, without unit.
    Unknown(String),
}

impl FormatKind {
    /// Map a trimmed type token to a kind. Never fails.
    pub fn from_token(token: &str) -> Self {
        match token {
            "date" => FormatKind::Date,
            "number" => FormatKind::Number,
            "currency" => FormatKind::Currency,
            "tr-currency" => FormatKind::TrCurrency,
            "percentage" => FormatKind::Percentage,
            "duration" => FormatKind::Duration,
            "text" => FormatKind::Text,
            other => FormatKind::Unknown(other.to_string()),
        }
    }

    /// The token this kind was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            FormatKind::Date => "date",
            FormatKind::Number => "number",
            FormatKind::Currency => "currency",
            FormatKind::TrCurrency => "tr-currency",
            FormatKind::Percentage => "percentage",
            FormatKind::Duration => "duration",
            FormatKind::Text => "text",
            FormatKind::Unknown(s) => s,
        }
    }

    /// Numeric pattern used when the directive carries none.
    pub fn default_pattern(&self) -> Option<&'static str> {
        match self {
            FormatKind::Number => Some("0,0"),
            FormatKind::Currency | FormatKind::TrCurrency => Some("0,0.00"),
            FormatKind::Percentage => Some("0.00%"),
            _ => None,
        }
    }
}

/// Where the unit goes relative to the formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum UnitPosition {
    /// `left` - `"{unit} {value}"`
    Left,
    /// `right` - `"{value} {unit}"`
    #[default]
    Right,
    /// Unrecognized token; decorates like `Right`.
    Other(String),
}

impl UnitPosition {
    /// Map a trimmed position token. Never fails.
    pub fn from_token(token: &str) -> Self {
        match token {
            "left" => UnitPosition::Left,
            "right" => UnitPosition::Right,
            other => UnitPosition::Other(other.to_string()),
        }
    }

    /// The token this position was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            UnitPosition::Left => "left",
            UnitPosition::Right => "right",
            UnitPosition::Other(s) => s,
        }
    }
}

/// A parsed format string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatDirective {
    /// Strategy selector
    pub kind: FormatKind,
    /// Strategy-specific format: a numeric pattern or a style name
    pub sub_format: String,
    /// Unit text; empty means no decoration
    pub unit: String,
    /// Unit placement
    pub position: UnitPosition,
}

impl FormatDirective {
    /// Parse a format string. See [`crate::parser::parse`].
    pub fn parse(format_string: &str) -> FormatDirective {
        crate::parser::parse(format_string)
    }

    /// The numeric pattern to apply: the sub-format, or the kind's default.
    pub fn pattern(&self) -> &str {
        if self.sub_format.is_empty() {
            self.kind.default_pattern().unwrap_or_default()
        } else {
            &self.sub_format
        }
    }

    /// Returns true if the directive adds a unit to the output.
    pub fn has_unit(&self) -> bool {
        !self.unit.is_empty()
    }
}

impl FromStr for FormatDirective {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::parser::parse(s))
    }
}

impl fmt::Display for FormatDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if !self.sub_format.is_empty() {
            write!(f, ":={}", self.sub_format)?;
        }
        if self.position != UnitPosition::Right {
            write!(f, "@{}", self.position.as_str())?;
        }
        if !self.unit.is_empty() {
            write!(f, "|{}", self.unit)?;
        }
        Ok(())
    }
}

/// Output styles of the `duration` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationStyle {
    /// `HH:MM:SS`, or `MM:SS` under an hour
    Video,
    /// `1g 2sa 3dk 4sn`
    Short,
    /// `1 gün 2 saat 3 dakika 4 saniye`
    Long,
    /// `1g:2s:03:04`
    Countdown,
    /// `3 dakika 4 saniye`
    Process,
    /// `az önce`, `3 dakika`, `2 saat`, `1 gün`
    Elapsed,
    /// `45 saniye`, `3:04`, `2:03`
    Progress,
    /// Unrecognized style name: `{seconds} saniye`
    Plain,
}

impl DurationStyle {
    /// Map a style name. Unknown names map to [`DurationStyle::Plain`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "video" => DurationStyle::Video,
            "short" => DurationStyle::Short,
            "long" => DurationStyle::Long,
            "countdown" => DurationStyle::Countdown,
            "process" => DurationStyle::Process,
            "elapsed" => DurationStyle::Elapsed,
            "progress" => DurationStyle::Progress,
            _ => DurationStyle::Plain,
        }
    }
}

/// Casing styles of the `text` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Uppercase,
    Lowercase,
    /// Every space-separated word capitalized
    Capitalize,
    /// Only the first character capitalized
    Sentence,
    /// Like `Capitalize`, but stop-words stay lowercase after the first word
    Title,
    /// Unrecognized style name: text unchanged
    AsIs,
}

impl TextStyle {
    /// Map a style name. Unknown names map to [`TextStyle::AsIs`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "uppercase" => TextStyle::Uppercase,
            "lowercase" => TextStyle::Lowercase,
            "capitalize" => TextStyle::Capitalize,
            "sentence" => TextStyle::Sentence,
            "title" => TextStyle::Title,
            _ => TextStyle::AsIs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tokens() {
        assert_eq!(FormatKind::from_token("tr-currency"), FormatKind::TrCurrency);
        assert_eq!(
            FormatKind::from_token("money"),
            FormatKind::Unknown("money".to_string())
        );
        assert_eq!(FormatKind::from_token("money").as_str(), "money");
    }

    #[test]
    fn test_default_patterns() {
        let directive = FormatDirective {
            kind: FormatKind::Percentage,
            sub_format: String::new(),
            unit: String::new(),
            position: UnitPosition::Right,
        };
        assert_eq!(directive.pattern(), "0.00%");
        assert_eq!(FormatKind::Text.default_pattern(), None);
    }

    #[test]
    fn test_display_is_canonical() {
        let directive = FormatDirective::parse(" number := 0,0.00 @ left | TL ");
        assert_eq!(directive.to_string(), "number:=0,0.00@left|TL");
        assert_eq!(FormatDirective::parse("duration:=video").to_string(), "duration:=video");
    }

    #[test]
    fn test_style_names() {
        assert_eq!(DurationStyle::from_name("countdown"), DurationStyle::Countdown);
        assert_eq!(DurationStyle::from_name("VIDEO"), DurationStyle::Plain);
        assert_eq!(TextStyle::from_name("title"), TextStyle::Title);
        assert_eq!(TextStyle::from_name(""), TextStyle::AsIs);
    }
}
