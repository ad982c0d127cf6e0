// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::escape_processor::EscapeProcessor;
use crate::json_number;
use crate::parse_error::{ErrorKind, Escape, Expected, NumberPart, ParseError};
use crate::parser_config::ParserConfig;
use crate::tokenizer::Tokenizer;
use crate::value::{Map, Value};

/// Recursive-descent JSON parser.
///
/// One procedure per value kind, one character of lookahead. The first
/// grammar violation aborts the whole parse; there is no recovery and no
/// partial result.
///
/// A parser is single-use: [`Parser::parse`] consumes it.
#[derive(Debug)]
pub struct Parser {
    tokenizer: Tokenizer,
    config: ParserConfig,
    /// Containers currently open.
    depth: usize,
}

impl Parser {
    /// Creates a parser with the default [`ParserConfig`].
    ///
    /// # Example
    /// ```
    /// use rdjson::{Parser, Value};
    /// let value = Parser::new("[1, 2]").parse().unwrap();
    /// assert_eq!(value.get_index(1), Some(&Value::Integer(2)));
    /// ```
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &str, config: ParserConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            config,
            depth: 0,
        }
    }

    /// Parses exactly one value surrounded by optional whitespace.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        debug!(
            "parsing {} characters (max depth {})",
            self.tokenizer.len(),
            self.config.max_depth
        );
        self.parse_document().inspect_err(|err| debug!("{err}"))
    }

    fn parse_document(&mut self) -> Result<Value, ParseError> {
        self.tokenizer.skip_whitespace();
        let value = self.parse_value()?;
        self.tokenizer.skip_whitespace();

        if !self.tokenizer.eof() {
            return Err(self.tokenizer.error(ErrorKind::UnexpectedTrailingData));
        }
        trace!("parsed top-level {}", value.type_name());
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.tokenizer.skip_whitespace();

        match self.tokenizer.current() {
            None => Err(self.tokenizer.error(ErrorKind::UnexpectedEndOfInput)),
            Some('n') => self.parse_null(),
            Some('t' | 'f') => self.parse_bool(),
            Some('"') => self.parse_string().map(Value::String),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
            Some(ch) => Err(self.tokenizer.error(ErrorKind::UnexpectedCharacter(ch))),
        }
    }

    fn parse_null(&mut self) -> Result<Value, ParseError> {
        self.expect_keyword("null")?;
        Ok(Value::Null)
    }

    fn parse_bool(&mut self) -> Result<Value, ParseError> {
        if self.tokenizer.current() == Some('t') {
            self.expect_keyword("true")?;
            Ok(Value::Boolean(true))
        } else {
            self.expect_keyword("false")?;
            Ok(Value::Boolean(false))
        }
    }

    /// Matches `keyword` character by character, failing at the first mismatch.
    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        for expected in keyword.chars() {
            self.tokenizer.expect(expected)?;
        }
        Ok(())
    }

    /// Consumes a string literal, cursor on the opening quote.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.tokenizer.advance();
        let mut out = String::new();

        loop {
            let pos = self.tokenizer.position();
            match self.tokenizer.advance() {
                None => return Err(ParseError::new(ErrorKind::UnterminatedString, pos)),
                Some('"') => break,
                Some('\\') => out.push(self.parse_escape_sequence()?),
                // Control characters are accepted verbatim
                Some(ch) => out.push(ch),
            }
        }

        Ok(out)
    }

    /// Decodes one escape, cursor just past the backslash.
    fn parse_escape_sequence(&mut self) -> Result<char, ParseError> {
        let pos = self.tokenizer.position();
        match self.tokenizer.advance() {
            None => Err(ParseError::new(ErrorKind::UnterminatedString, pos)),
            Some('u') => self.parse_unicode_escape(),
            Some(ch) => EscapeProcessor::process_simple_escape(ch).ok_or_else(|| {
                ParseError::new(ErrorKind::InvalidEscapeSequence(Escape::Char(ch)), pos)
            }),
        }
    }

    /// Reads the four hex digits of a `\uXXXX` escape.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let mut codepoint = 0u32;
        for _ in 0..4 {
            let pos = self.tokenizer.position();
            let digit = self
                .tokenizer
                .advance()
                .and_then(EscapeProcessor::hex_digit_value)
                .ok_or_else(|| {
                    ParseError::new(ErrorKind::InvalidEscapeSequence(Escape::UnicodeHex), pos)
                })?;
            codepoint = (codepoint << 4) | digit;
        }
        Ok(EscapeProcessor::codepoint_to_char(codepoint))
    }

    /// Scans `-? (0 | [0-9]+) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` greedily.
    ///
    /// A leading `0` consumes only itself; any digits after it are left for
    /// the caller to trip over.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.tokenizer.position();
        let mut literal = String::new();

        if self.tokenizer.current() == Some('-') {
            literal.push('-');
            self.tokenizer.advance();
        }

        match self.tokenizer.current() {
            Some('0') => {
                literal.push('0');
                self.tokenizer.advance();
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.take_digits(&mut literal);
            }
            _ => return Err(self.malformed_number(NumberPart::Integer)),
        }

        if self.tokenizer.current() == Some('.') {
            literal.push('.');
            self.tokenizer.advance();
            if self.take_digits(&mut literal) == 0 {
                return Err(self.malformed_number(NumberPart::Fraction));
            }
        }

        if let Some(marker @ ('e' | 'E')) = self.tokenizer.current() {
            literal.push(marker);
            self.tokenizer.advance();
            if let Some(sign @ ('+' | '-')) = self.tokenizer.current() {
                literal.push(sign);
                self.tokenizer.advance();
            }
            if self.take_digits(&mut literal) == 0 {
                return Err(self.malformed_number(NumberPart::Exponent));
            }
        }

        json_number::value_from_literal(&literal).map_err(|kind| ParseError::new(kind, start))
    }

    /// Appends a maximal run of ASCII digits, returning how many were taken.
    fn take_digits(&mut self, literal: &mut String) -> usize {
        let mut count = 0;
        while let Some(ch) = self.tokenizer.current().filter(char::is_ascii_digit) {
            literal.push(ch);
            self.tokenizer.advance();
            count += 1;
        }
        count
    }

    fn malformed_number(&self, part: NumberPart) -> ParseError {
        self.tokenizer.error(ErrorKind::MalformedNumber(part))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.tokenizer.advance();
        self.tokenizer.skip_whitespace();

        let mut items = Vec::new();

        if self.tokenizer.current() == Some(']') {
            self.tokenizer.advance();
            self.leave_container();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.tokenizer.skip_whitespace();

            match self.tokenizer.current() {
                Some(',') => {
                    self.tokenizer.advance();
                    self.tokenizer.skip_whitespace();
                }
                Some(']') => {
                    self.tokenizer.advance();
                    break;
                }
                _ => {
                    return Err(self
                        .tokenizer
                        .error(ErrorKind::ExpectedToken(Expected::CommaOrBracket)))
                }
            }
        }

        self.leave_container();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.tokenizer.advance();
        self.tokenizer.skip_whitespace();

        let mut map = Map::new();

        if self.tokenizer.current() == Some('}') {
            self.tokenizer.advance();
            self.leave_container();
            return Ok(Value::Object(map));
        }

        loop {
            self.tokenizer.skip_whitespace();

            if self.tokenizer.current() != Some('"') {
                return Err(self
                    .tokenizer
                    .error(ErrorKind::ExpectedToken(Expected::StringKey)));
            }
            let key = self.parse_string()?;

            self.tokenizer.skip_whitespace();
            self.tokenizer.expect(':')?;

            let value = self.parse_value()?;
            // Last occurrence wins, first occurrence fixes the order
            map.insert(key, value);

            self.tokenizer.skip_whitespace();

            match self.tokenizer.current() {
                Some(',') => {
                    self.tokenizer.advance();
                }
                Some('}') => {
                    self.tokenizer.advance();
                    break;
                }
                _ => {
                    return Err(self
                        .tokenizer
                        .error(ErrorKind::ExpectedToken(Expected::CommaOrBrace)))
                }
            }
        }

        self.leave_container();
        Ok(Value::Object(map))
    }

    /// Called with the cursor on the opening bracket, which is where a depth
    /// violation is reported.
    fn enter_container(&mut self) -> Result<(), ParseError> {
        let depth = self.depth.saturating_add(1);
        if depth > self.config.max_depth {
            return Err(self
                .tokenizer
                .error(ErrorKind::NestingTooDeep(self.config.max_depth)));
        }
        self.depth = depth;
        trace!("enter container at {} (depth {depth})", self.tokenizer.position());
        Ok(())
    }

    fn leave_container(&mut self) {
        trace!("leave container at {} (depth {})", self.tokenizer.position(), self.depth);
        self.depth = self.depth.saturating_sub(1);
    }
}
