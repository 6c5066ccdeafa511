//! Tests for error messages.

use trfmt::{FormatDirective, FormatError, FormatOptions, NumberPattern, ParseError, Value};

#[test]
fn test_parse_error_display() {
    let err = NumberPattern::parse("0,0[.00").unwrap_err();
    assert_eq!(err, ParseError::Unterminated { open: '[', position: 3 });
    assert_eq!(err.to_string(), "unterminated '[' at position 3");
}

#[test]
fn test_format_error_display() {
    let err = FormatError::NotANumber {
        input: "abc".to_string(),
    };
    assert_eq!(err.to_string(), "not a number: 'abc'");

    let err = FormatError::NegativeDuration { seconds: -3.0 };
    assert_eq!(err.to_string(), "negative duration: -3 seconds");

    let err = FormatError::TypeMismatch {
        expected: "number",
        got: "empty",
    };
    assert_eq!(err.to_string(), "type mismatch: expected number, got empty");
}

#[test]
fn test_pattern_error_is_transparent() {
    let err: FormatError = ParseError::Unterminated { open: '(', position: 0 }.into();
    assert_eq!(err.to_string(), "unterminated '(' at position 0");
}

#[test]
fn test_try_format_reports_cause() {
    let opts = FormatOptions::default();

    let err = FormatDirective::parse("number")
        .try_format(&Value::Text("on iki"), &opts)
        .unwrap_err();
    assert!(matches!(err, FormatError::NotANumber { .. }));

    let err = FormatDirective::parse("currency:=(0.00")
        .try_format(&Value::Number(1.0), &opts)
        .unwrap_err();
    assert!(matches!(err, FormatError::Pattern(ParseError::Unterminated { .. })));
}
