//! Parser for moment-style date patterns (`DD-MM-YYYY HH:mm:ss`).

use crate::ast::{DatePart, DatePattern};

/// Parse a date pattern into a [`DatePattern`].
///
/// Letters are grouped into runs (`YYYY`, `MM`, ...). Text inside `[...]` and
/// every character that is not a pattern letter is kept as a literal. An
/// unterminated `[` escapes the rest of the pattern.
pub fn parse_date_pattern(pattern: &str) -> DatePattern {
    let chars: Vec<char> = pattern.chars().collect();
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '[' {
            let close = chars[i + 1..].iter().position(|&c| c == ']');
            let end = close.map_or(chars.len(), |offset| i + 1 + offset);
            literal.extend(&chars[i + 1..end]);
            i = (end + 1).min(chars.len());
            continue;
        }

        let run = chars[i..].iter().take_while(|&&c| c == ch).count();
        match run_part(ch, run) {
            Some(part) => {
                flush_literal(&mut parts, &mut literal);
                parts.push(part);
            }
            None => literal.extend(&chars[i..i + run]),
        }
        i += run;
    }

    flush_literal(&mut parts, &mut literal);
    DatePattern::from_parts(parts)
}

/// Map a run of one pattern letter to its part.
fn run_part(ch: char, run: usize) -> Option<DatePart> {
    let part = match (ch, run) {
        ('Y', 2 | 3) => DatePart::Year2,
        ('Y', _) => DatePart::Year4,
        ('M', 1) => DatePart::Month,
        ('M', 2) => DatePart::Month2,
        ('M', 3) => DatePart::MonthAbbr,
        ('M', _) => DatePart::MonthFull,
        ('D', 1) => DatePart::Day,
        ('D', _) => DatePart::Day2,
        ('d', 3) => DatePart::DayAbbr,
        ('d', n) if n >= 4 => DatePart::DayFull,
        ('H', 1) => DatePart::Hour,
        ('H', _) => DatePart::Hour2,
        ('h', 1) => DatePart::Hour12,
        ('h', _) => DatePart::Hour12_2,
        ('m', 1) => DatePart::Minute,
        ('m', _) => DatePart::Minute2,
        ('s', 1) => DatePart::Second,
        ('s', _) => DatePart::Second2,
        ('A', 1) => DatePart::AmPmUpper,
        ('a', 1) => DatePart::AmPmLower,
        _ => return None,
    };
    Some(part)
}

fn flush_literal(parts: &mut Vec<DatePart>, literal: &mut String) {
    if !literal.is_empty() {
        parts.push(DatePart::Literal(std::mem::take(literal)));
    }
}
