// SPDX-License-Identifier: Apache-2.0

/// Pure helpers for decoding the escape sequences inside JSON strings.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Decodes the character following a backslash, for every escape except
    /// `\u`.
    ///
    /// # Returns
    /// The unescaped character, or `None` if `escape_char` does not form a
    /// recognized single-character escape.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape('n'), Some('\n'));
    /// ```
    pub fn process_simple_escape(escape_char: char) -> Option<char> {
        match escape_char {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '"' => Some('"'),
            '\\' => Some('\\'),
            '/' => Some('/'),
            _ => None,
        }
    }

    /// Numeric value (0-15) of a hexadecimal digit.
    pub fn hex_digit_value(ch: char) -> Option<u32> {
        match ch {
            '0'..='9' => Some(ch as u32 - '0' as u32),
            'a'..='f' => Some(ch as u32 - 'a' as u32 + 10),
            'A'..='F' => Some(ch as u32 - 'A' as u32 + 10),
            _ => None,
        }
    }

    /// Check if a code point falls in the UTF-16 surrogate range (0xD800-0xDFFF)
    pub fn is_surrogate(codepoint: u32) -> bool {
        (0xD800..=0xDFFF).contains(&codepoint)
    }

    /// Maps the code point of one `\uXXXX` escape to a character.
    ///
    /// Escapes are decoded independently; surrogate pairs are not combined.
    /// A surrogate half has no `char` representation and becomes U+FFFD.
    pub fn codepoint_to_char(codepoint: u32) -> char {
        if Self::is_surrogate(codepoint) {
            log::trace!("lone surrogate {codepoint:#06X} replaced with U+FFFD");
            return char::REPLACEMENT_CHARACTER;
        }
        char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}
