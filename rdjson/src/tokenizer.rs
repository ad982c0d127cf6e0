// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ErrorKind, Expected, ParseError};

/// Character cursor over a fully materialized input.
///
/// Positions count decoded characters, not bytes, so the input is held as a
/// `Vec<char>` for O(1) indexed access.
#[derive(Debug)]
pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the input in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character under the cursor, `None` at or past the end.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The character `offset` positions ahead of the cursor.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.pos
            .checked_add(offset)
            .and_then(|index| self.chars.get(index))
            .copied()
    }

    /// Returns the current character and moves forward by one.
    ///
    /// The cursor keeps moving past the end; every such call returns `None`.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current();
        self.pos = self.pos.saturating_add(1);
        ch
    }

    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Consumes `expected` or fails without moving.
    pub fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.current() {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            found => Err(self.error(ErrorKind::ExpectedToken(Expected::Char { expected, found }))),
        }
    }

    /// Builds an error positioned at the cursor.
    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.pos)
    }
}
