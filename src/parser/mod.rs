//! Parsers for directive strings, numeric patterns and date patterns.
//!
//! Directive grammar, left to right:
//!
//! ```text
//! type[:=format][@position][|unit]
//! ```
//!
//! One pass per delimiter: `|` first, then `@` on the left part, then `:=`
//! on what remains. A field ends at the next occurrence of its own delimiter,
//! so `|kg|m` carries the unit `kg`. All four fields are trimmed.

pub mod date_pattern;
pub mod lexer;
pub mod pattern;
pub mod tokens;

use crate::directive::{FormatDirective, FormatKind, UnitPosition};

const UNIT_SEP: &str = "|";
const POSITION_SEP: &str = "@";
const FORMAT_SEP: &str = ":=";

/// Split off the text before the first `sep` and the text between the first
/// and second `sep`. Anything after a second `sep` is dropped.
fn split_field<'a>(s: &'a str, sep: &str) -> (&'a str, Option<&'a str>) {
    let mut segments = s.split(sep);
    let head = segments.next().unwrap_or_default();
    (head, segments.next())
}

/// Parse a directive string into a [`FormatDirective`].
///
/// Never fails: malformed input yields a directive with empty or unknown
/// fields, which the formatter handles.
pub fn parse(format_string: &str) -> FormatDirective {
    let (head, unit) = split_field(format_string, UNIT_SEP);
    let (type_and_format, position) = split_field(head, POSITION_SEP);
    let (kind, sub_format) = split_field(type_and_format, FORMAT_SEP);

    FormatDirective {
        kind: FormatKind::from_token(kind.trim()),
        sub_format: sub_format.unwrap_or_default().trim().to_string(),
        unit: unit.unwrap_or_default().trim().to_string(),
        position: UnitPosition::from_token(position.unwrap_or("right").trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_directive() {
        let d = parse("number:=0,0.00@left|TL");
        assert_eq!(d.kind, FormatKind::Number);
        assert_eq!(d.sub_format, "0,0.00");
        assert_eq!(d.position, UnitPosition::Left);
        assert_eq!(d.unit, "TL");
    }

    #[test]
    fn test_defaults() {
        let d = parse("currency");
        assert_eq!(d.kind, FormatKind::Currency);
        assert_eq!(d.sub_format, "");
        assert_eq!(d.unit, "");
        assert_eq!(d.position, UnitPosition::Right);
    }

    #[test]
    fn test_empty_string() {
        let d = parse("");
        assert_eq!(d.kind, FormatKind::Unknown(String::new()));
        assert_eq!(d.position, UnitPosition::Right);
    }

    #[test]
    fn test_repeated_separator_ends_field() {
        let d = parse("number:=0,0:=x@left@up|kg|m");
        assert_eq!(d.kind, FormatKind::Number);
        assert_eq!(d.sub_format, "0,0");
        assert_eq!(d.position, UnitPosition::Left);
        assert_eq!(d.unit, "kg");
    }

    #[test]
    fn test_unit_may_contain_at_sign() {
        let d = parse("text:=uppercase|user@host");
        assert_eq!(d.position, UnitPosition::Right);
        assert_eq!(d.unit, "user@host");
    }
}
