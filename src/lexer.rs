//! Lexer module for the query language
//!
//! Lexing happens in two passes:
//!
//! 1. [`normalize`] removes whitespace that carries no meaning. Whitespace inside
//!    quoted literals is kept unless the caller asks for every whitespace to go.
//! 2. [`tokenize`] runs the logos lexer over the normalized string.
//!
//! Doing the whitespace pass first keeps the token set free of whitespace tokens,
//! and lets the parser work on a stream where every token is significant.

pub mod lexer_impl;
pub mod tokens;
pub mod whitespace_transform;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;
pub use whitespace_transform::{normalize, DELIMITER};

use crate::error::ParseError;
use crate::options::ParserOptions;

/// Main lexer function: normalize whitespace, then tokenize
pub fn lex(source: &str, options: &ParserOptions) -> Result<Vec<Token>, ParseError> {
    Ok(lex_with_spans(source, options)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Lexing function that keeps the token spans.
/// Spans are byte ranges into the normalized string, not into `source`.
pub fn lex_with_spans(
    source: &str,
    options: &ParserOptions,
) -> Result<Vec<(Token, std::ops::Range<usize>)>, ParseError> {
    let normalized = normalize(source, options)?;
    log::debug!("normalized query: {}", normalized);

    let tokens = tokenize_with_spans(&normalized)?;
    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}
