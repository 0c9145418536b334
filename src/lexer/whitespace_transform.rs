//! Whitespace normalization
//!
//! Whitespace is insignificant everywhere except inside quoted literals. Before the
//! input reaches the lexer, it is split on the literal delimiter: even segments lie
//! outside a literal and lose all their whitespace, odd segments are literal payloads
//! and are kept verbatim. The segments are joined back with the delimiter, so an
//! unterminated literal is still unterminated afterwards and gets reported by the
//! lexer.

use crate::error::ParseError;
use crate::options::ParserOptions;

/// The character that opens and closes a literal
pub const DELIMITER: char = '\'';

/// Strip insignificant whitespace from `input`
pub fn normalize(input: &str, options: &ParserOptions) -> Result<String, ParseError> {
    let normalized = if options.remove_all_whitespaces {
        strip_whitespace(input)
    } else {
        input
            .split(DELIMITER)
            .enumerate()
            .map(|(i, segment)| {
                if i % 2 == 0 {
                    strip_whitespace(segment)
                } else {
                    segment.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(DELIMITER.to_string().as_str())
    };

    if normalized.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(normalized)
}

fn strip_whitespace(segment: &str) -> String {
    segment.chars().filter(|c| !c.is_whitespace()).collect()
}
