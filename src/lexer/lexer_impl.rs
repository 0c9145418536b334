//! Implementation of the query lexer
//!
//! Tokenization itself is handled by logos; this module turns the stream into
//! collected vectors and maps lexing failures onto [`ParseError`].

use crate::error::ParseError;
use crate::lexer::tokens::Token;
use crate::lexer::whitespace_transform::DELIMITER;
use logos::Logos;

/// Tokenize a normalized string and collect all tokens
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize a normalized string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, logos::Span)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                log::trace!("lexed {} at {:?}", token, lexer.span());
                tokens.push((token, lexer.span()));
            }
            Err(()) => return Err(lexing_error(lexer.slice(), lexer.span().start)),
        }
    }

    Ok(tokens)
}

fn lexing_error(slice: &str, position: usize) -> ParseError {
    if slice.starts_with(DELIMITER) {
        ParseError::literal("unterminated quoted literal", position)
    } else {
        ParseError::syntax(format!("unexpected character(s) '{}'", slice), position)
    }
}
