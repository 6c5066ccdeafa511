//! Token types for the numeric pattern lexer.

/// A token in a numeric pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // Digit placeholders
    Zero, // 0
    Hash, // #

    // Separators
    DecimalPoint, // .
    ThousandsSep, // ,

    // Optional decimals
    OpenBracket,  // [
    CloseBracket, // ]

    // Sign
    OpenParen,  // (
    CloseParen, // )
    Plus,       // +
    Minus,      // -

    // Suffix markers
    Percent,      // %
    Abbreviation, // a
    Space,        // ' '

    /// Any other character; ignored by the parser
    Other(char),

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone, Copy)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
}
