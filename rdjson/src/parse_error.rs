// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// The token that was required at the failing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific character, e.g. the `:` between key and value or a letter
    /// of `null`/`true`/`false`.
    Char {
        expected: char,
        /// What was found instead, `None` at end of input.
        found: Option<char>,
    },
    /// An object key must start with `"`.
    StringKey,
    /// Separator or terminator inside an array.
    CommaOrBracket,
    /// Separator or terminator inside an object.
    CommaOrBrace,
}

/// The offending part of an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Backslash followed by a character that starts no escape.
    Char(char),
    /// `\u` not followed by four hexadecimal digits.
    UnicodeHex,
}

/// The part of a number literal where a digit was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPart {
    /// The first character after an optional `-`.
    Integer,
    /// After the decimal point.
    Fraction,
    /// After `e`/`E` and an optional sign.
    Exponent,
}

/// Categories of parse failure.
///
/// Every kind is terminal: parsing stops at the first one detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input exhausted where a value was expected.
    UnexpectedEndOfInput,
    /// The lookahead character does not start any value.
    UnexpectedCharacter(char),
    /// A specific required token was missing.
    ExpectedToken(Expected),
    /// String literal not closed before end of input.
    UnterminatedString,
    /// Backslash followed by something that is not a valid escape.
    InvalidEscapeSequence(Escape),
    /// A digit was required but not found.
    MalformedNumber(NumberPart),
    /// Characters remain after a complete top-level value.
    UnexpectedTrailingData,
    /// A numeral does not fit the value representation (`i64` or finite `f64`).
    NumericOverflow,
    /// Arrays and objects nested deeper than the configured limit.
    NestingTooDeep(usize),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedEndOfInput => f.write_str("Unexpected end of input"),
            ErrorKind::UnexpectedCharacter(ch) => write!(f, "Unexpected character: '{ch}'"),
            ErrorKind::ExpectedToken(Expected::Char { expected, found }) => match found {
                Some(found) => write!(f, "Expected '{expected}' but got '{found}'"),
                None => write!(f, "Expected '{expected}' but got end of input"),
            },
            ErrorKind::ExpectedToken(Expected::StringKey) => f.write_str("Expected string key"),
            ErrorKind::ExpectedToken(Expected::CommaOrBracket) => {
                f.write_str("Expected ',' or ']'")
            }
            ErrorKind::ExpectedToken(Expected::CommaOrBrace) => f.write_str("Expected ',' or '}'"),
            ErrorKind::UnterminatedString => f.write_str("Unterminated string"),
            ErrorKind::InvalidEscapeSequence(Escape::Char(ch)) => {
                write!(f, "Invalid escape sequence: \\{ch}")
            }
            ErrorKind::InvalidEscapeSequence(Escape::UnicodeHex) => {
                f.write_str("Invalid unicode escape")
            }
            ErrorKind::MalformedNumber(NumberPart::Integer) => f.write_str("Expected digit"),
            ErrorKind::MalformedNumber(NumberPart::Fraction) => {
                f.write_str("Expected digit after decimal point")
            }
            ErrorKind::MalformedNumber(NumberPart::Exponent) => {
                f.write_str("Expected digit in exponent")
            }
            ErrorKind::UnexpectedTrailingData => {
                f.write_str("Unexpected characters after JSON value")
            }
            ErrorKind::NumericOverflow => f.write_str("Number out of range"),
            ErrorKind::NestingTooDeep(limit) => write!(f, "Nesting too deep (limit {limit})"),
        }
    }
}

/// Error returned by [`parse`](crate::parse) and friends.
///
/// Carries the failure category and the zero-based character offset (not byte
/// offset) where the input deviated from the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    position: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Character offset of the offending character, or the input length when
    /// the input ended early.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The bare diagnostic, without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at position {}: {}", self.position, self.kind)
    }
}

impl std::error::Error for ParseError {}
