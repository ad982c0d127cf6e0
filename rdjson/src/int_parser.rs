// SPDX-License-Identifier: Apache-2.0

// Checked base-10 parsing, shaped after core::num's radix parser but without
// panics or a detour through a wider type.

/// Failure modes of [`from_ascii_i64`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseIntegerError {
    /// The input was empty.
    Empty,
    /// The input consisted only of a `-` sign.
    SignOnly,
    /// A character other than an ASCII digit was found.
    InvalidDigit,
    /// The value does not fit in an `i64`.
    Overflow,
}

/// Parses an optionally `-`-prefixed run of ASCII digits into an `i64`.
///
/// Negative values are accumulated downward so that `i64::MIN` parses.
pub const fn from_ascii_i64(src: &[u8]) -> Result<i64, ParseIntegerError> {
    let (is_negative, mut digits) = match src {
        [] => return Err(ParseIntegerError::Empty),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, src),
    };

    if digits.is_empty() {
        return Err(ParseIntegerError::SignOnly);
    }

    let mut result: i64 = 0;

    while let Some((&byte, rest)) = digits.split_first() {
        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as i64,
            _ => return Err(ParseIntegerError::InvalidDigit),
        };

        result = match result.checked_mul(10) {
            Some(val) => val,
            None => return Err(ParseIntegerError::Overflow),
        };

        result = if is_negative {
            match result.checked_sub(digit) {
                Some(val) => val,
                None => return Err(ParseIntegerError::Overflow),
            }
        } else {
            match result.checked_add(digit) {
                Some(val) => val,
                None => return Err(ParseIntegerError::Overflow),
            }
        };

        digits = rest;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii_i64_simple() {
        assert_eq!(from_ascii_i64(b"0"), Ok(0));
        assert_eq!(from_ascii_i64(b"42"), Ok(42));
        assert_eq!(from_ascii_i64(b"-42"), Ok(-42));
        assert_eq!(from_ascii_i64(b"-0"), Ok(0));
        assert_eq!(from_ascii_i64(b"007"), Ok(7));
    }

    #[test]
    fn test_from_ascii_i64_limits() {
        assert_eq!(from_ascii_i64(b"9223372036854775807"), Ok(i64::MAX));
        assert_eq!(from_ascii_i64(b"-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn test_from_ascii_i64_overflow() {
        assert_eq!(
            from_ascii_i64(b"9223372036854775808"),
            Err(ParseIntegerError::Overflow)
        );
        assert_eq!(
            from_ascii_i64(b"-9223372036854775809"),
            Err(ParseIntegerError::Overflow)
        );
        assert_eq!(
            from_ascii_i64(b"123456789012345678901234567890"),
            Err(ParseIntegerError::Overflow)
        );
    }

    #[test]
    fn test_from_ascii_i64_errors() {
        assert_eq!(from_ascii_i64(b""), Err(ParseIntegerError::Empty));
        assert_eq!(from_ascii_i64(b"-"), Err(ParseIntegerError::SignOnly));
        assert_eq!(from_ascii_i64(b"+1"), Err(ParseIntegerError::InvalidDigit));
        assert_eq!(from_ascii_i64(b"1.5"), Err(ParseIntegerError::InvalidDigit));
        assert_eq!(from_ascii_i64(b"--1"), Err(ParseIntegerError::InvalidDigit));
    }
}
