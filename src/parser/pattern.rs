//! Parser for numeric patterns (`0,0.00`, `0.0[00]`, `(0,0)`, `+0.00 %`, `0.0a`).

use crate::ast::{NumberPattern, SignStyle, Spacing};
use crate::error::ParseError;
use crate::parser::lexer::Lexer;
use crate::parser::tokens::Token;

/// Parse a numeric pattern into a [`NumberPattern`].
///
/// Characters that carry no meaning in the mini-language are skipped.
pub fn parse_number_pattern(pattern: &str) -> Result<NumberPattern, ParseError> {
    let tokens = Lexer::new(pattern).tokenize();

    let mut result = NumberPattern::default();
    let mut leading_zeros = 0;
    let mut seen_group = false;
    let mut after_decimal = false;
    let mut open_bracket: Option<usize> = None;
    let mut open_paren: Option<usize> = None;
    let mut previous = Token::Eof;

    for spanned in &tokens {
        match spanned.token {
            Token::Zero | Token::Hash => {
                let required = spanned.token == Token::Zero;
                if open_bracket.is_some() || (after_decimal && !required) {
                    result.optional_decimals += 1;
                } else if after_decimal {
                    result.decimals += 1;
                } else if required && !seen_group {
                    leading_zeros += 1;
                }
            }
            Token::DecimalPoint => after_decimal = true,
            Token::ThousandsSep => {
                if !after_decimal {
                    result.grouping = true;
                    seen_group = true;
                }
            }
            Token::OpenBracket => open_bracket = Some(spanned.start),
            Token::CloseBracket => open_bracket = None,
            Token::OpenParen => {
                result.sign = SignStyle::Parentheses;
                open_paren = Some(spanned.start);
            }
            Token::CloseParen => open_paren = None,
            Token::Plus => {
                if result.sign != SignStyle::Parentheses {
                    result.sign = SignStyle::Always;
                }
            }
            Token::Percent => result.percent = Some(spacing_after(previous)),
            Token::Abbreviation => result.abbreviation = Some(spacing_after(previous)),
            Token::Minus | Token::Space | Token::Other(_) | Token::Eof => {}
        }
        previous = spanned.token;
    }

    if let Some(position) = open_bracket {
        return Err(ParseError::Unterminated {
            open: '[',
            position,
        });
    }
    if let Some(position) = open_paren {
        return Err(ParseError::Unterminated {
            open: '(',
            position,
        });
    }

    result.min_integer_digits = leading_zeros.max(1);
    Ok(result)
}

fn spacing_after(previous: Token) -> Spacing {
    if previous == Token::Space {
        Spacing::Spaced
    } else {
        Spacing::Tight
    }
}
