//! Lexer for tokenizing numeric patterns.

use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for numeric pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> SpannedToken {
        let start = self.position;
        let Some(ch) = self.input[start..].chars().next() else {
            return SpannedToken {
                token: Token::Eof,
                start,
            };
        };
        self.position += ch.len_utf8();

        let token = match ch {
            '0' => Token::Zero,
            '#' => Token::Hash,
            '.' => Token::DecimalPoint,
            ',' => Token::ThousandsSep,
            '[' => Token::OpenBracket,
            ']' => Token::CloseBracket,
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '%' => Token::Percent,
            'a' => Token::Abbreviation,
            ' ' => Token::Space,
            other => Token::Other(other),
        };

        SpannedToken { token, start }
    }

    /// Tokenize the whole input, excluding the final `Eof`.
    pub fn tokenize(mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            if tok.token == Token::Eof {
                break;
            }
            tokens.push(tok);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_grouped_decimal() {
        assert_eq!(
            kinds("0,0.00"),
            vec![
                Token::Zero,
                Token::ThousandsSep,
                Token::Zero,
                Token::DecimalPoint,
                Token::Zero,
                Token::Zero,
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = Lexer::new("₺0").tokenize();
        assert_eq!(tokens[0].token, Token::Other('₺'));
        assert_eq!(tokens[1].start, '₺'.len_utf8());
    }

    #[test]
    fn test_suffix_markers() {
        assert_eq!(
            kinds("0 %"),
            vec![Token::Zero, Token::Space, Token::Percent]
        );
        assert_eq!(kinds("0a"), vec![Token::Zero, Token::Abbreviation]);
    }
}
