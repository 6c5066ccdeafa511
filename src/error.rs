//! Error types for parsing and formatting.

use thiserror::Error;

/// Errors that can occur when parsing a pattern or a date string.
///
/// Directive strings themselves never fail to parse; these errors come from
/// the numeric pattern mini-language and the date helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unterminated '{open}' at position {position}")]
    Unterminated { open: char, position: usize },

    #[error("invalid date '{input}': expected {expected}")]
    InvalidDate {
        input: String,
        expected: &'static str,
    },
}

/// Errors that can occur when formatting a value.
///
/// These never reach callers of [`crate::format`]; the dispatcher turns them
/// into the plain string form of the value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("not a number: '{input}'")]
    NotANumber { input: String },

    #[error("{value} cannot be shown with {decimals} decimals")]
    Precision { value: f64, decimals: usize },

    #[error("negative duration: {seconds} seconds")]
    NegativeDuration { seconds: f64 },

    #[error("duration out of range: {seconds} seconds")]
    DurationOutOfRange { seconds: f64 },

    #[error("invalid date: '{input}'")]
    InvalidDate { input: String },

    #[error("timestamp out of range: {millis} ms")]
    TimestampOutOfRange { millis: f64 },

    #[error(transparent)]
    Pattern(#[from] ParseError),
}
