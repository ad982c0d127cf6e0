// SPDX-License-Identifier: Apache-2.0

//! A recursive-descent JSON parser with position-annotated errors.
//!
//! [`parse`] turns a complete JSON document into a [`Value`] tree, or fails
//! with a [`ParseError`] naming the first grammar violation and the
//! zero-based character offset where it was found.
//!
//! ```
//! use rdjson::{parse, Value};
//!
//! let value = parse(r#"{"arr": [1, {"nested": true}]}"#).unwrap();
//! let nested = value.get("arr").and_then(|arr| arr.get_index(1));
//! assert_eq!(nested.and_then(|n| n.get("nested")), Some(&Value::Boolean(true)));
//!
//! let err = parse("123abc").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Parse error at position 3: Unexpected characters after JSON value"
//! );
//! ```
//!
//! Numbers are classified lexically: a numeral with a `.` or an exponent is a
//! [`Value::Float`], anything else is a [`Value::Integer`]. Objects keep keys
//! in first-seen order and the last duplicate wins.

mod escape_processor;

mod int_parser;

mod json_number;

mod parse_error;
pub use parse_error::{ErrorKind, Escape, Expected, NumberPart, ParseError};

mod parser;
pub use parser::Parser;

mod parser_config;
pub use parser_config::{ParserConfig, DEFAULT_MAX_DEPTH};

mod tokenizer;
pub use tokenizer::Tokenizer;

mod value;
pub use value::{Map, Value};

/// Parses a complete JSON document with the default [`ParserConfig`].
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::new(input).parse()
}

/// Parses a complete JSON document with a custom [`ParserConfig`].
///
/// # Example
/// ```
/// use rdjson::{parse_with_config, ErrorKind, ParserConfig};
///
/// let config = ParserConfig::with_max_depth(1);
/// let err = parse_with_config("[[]]", config).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NestingTooDeep(1));
/// assert_eq!(err.position(), 1);
/// ```
pub fn parse_with_config(input: &str, config: ParserConfig) -> Result<Value, ParseError> {
    Parser::with_config(input, config).parse()
}
