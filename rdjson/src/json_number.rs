// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::int_parser::{from_ascii_i64, ParseIntegerError};
use crate::parse_error::{ErrorKind, NumberPart};
use crate::Value;

/// Detects if a number literal represents an integer (no decimal point or exponent).
///
/// Classification is purely lexical; the magnitude of the value plays no part.
pub fn is_integer(literal: &str) -> bool {
    !literal.contains(['.', 'e', 'E'])
}

/// Converts an already validated numeral into `Value::Integer` or `Value::Float`.
///
/// Integers must fit in `i64` and floats must stay finite, otherwise the
/// numeral is rejected with [`ErrorKind::NumericOverflow`].
pub fn value_from_literal(literal: &str) -> Result<Value, ErrorKind> {
    if is_integer(literal) {
        parse_integer(literal).map(Value::Integer)
    } else {
        parse_float(literal).map(Value::Float)
    }
}

fn parse_integer(literal: &str) -> Result<i64, ErrorKind> {
    from_ascii_i64(literal.as_bytes()).map_err(|err| match err {
        ParseIntegerError::Overflow => ErrorKind::NumericOverflow,
        // The scanner only hands over well-formed numerals
        _ => ErrorKind::MalformedNumber(NumberPart::Integer),
    })
}

fn parse_float(literal: &str) -> Result<f64, ErrorKind> {
    match f64::from_str(literal) {
        Ok(val) if val.is_finite() => Ok(val),
        Ok(_) => Err(ErrorKind::NumericOverflow),
        Err(_) => Err(ErrorKind::MalformedNumber(NumberPart::Integer)),
    }
}
