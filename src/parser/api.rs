//! Public API for the parser.

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::Stream;
use std::ops::Range;

use crate::ast::{AstNode, Query};
use crate::error::ParseError;
use crate::lexer::{lex_with_spans, Token};
use crate::options::ParserOptions;
use crate::parser::ast_conversion::convert_query;
use crate::parser::combinators::{query, ParserError};

/// Type alias for token with span
type TokenSpan = (Token, Range<usize>);

/// Deepest group nesting accepted; the grammar and the tree walks recurse once per level
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parse a query string into its AST
pub fn parse_query(source: &str, options: &ParserOptions) -> Result<Query, ParseError> {
    let tokens = lex_with_spans(source, options)?;
    parse_with_spans(tokens)
}

/// Parse a token stream, spans being byte ranges of the normalized query
pub fn parse_with_spans(tokens: Vec<TokenSpan>) -> Result<Query, ParseError> {
    let Some(end) = tokens.last().map(|(_, span)| span.end) else {
        return Err(ParseError::EmptyInput);
    };
    check_balance(&tokens)?;

    let raw = query()
        .parse(Stream::from_iter(end..end + 1, tokens.into_iter()))
        .map_err(first_error)?;

    let query = convert_query(raw)?;
    log::debug!(
        "parsed {} with {} expression(s)",
        query.node_type(),
        query.expression_count()
    );
    Ok(query)
}

/// Parse a token stream without spans; positions in errors are token indices
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Query, ParseError> {
    parse_with_spans(
        tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| (token, i..i + 1))
            .collect(),
    )
}

/// Every '(' needs a matching ')' and the other way around, at most
/// [`MAX_NESTING_DEPTH`] levels deep
fn check_balance(tokens: &[TokenSpan]) -> Result<(), ParseError> {
    let mut open = Vec::new();
    for (token, span) in tokens {
        match token {
            Token::OpenParen if open.len() == MAX_NESTING_DEPTH => {
                return Err(ParseError::syntax("groups nested too deeply", span.start));
            }
            Token::OpenParen => open.push(span.start),
            Token::CloseParen => {
                if open.pop().is_none() {
                    return Err(ParseError::unbalanced("unmatched ')'", span.start));
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some(position) => Err(ParseError::unbalanced("unclosed '('", position)),
        None => Ok(()),
    }
}

fn first_error(errors: Vec<ParserError>) -> ParseError {
    let Some(error) = errors.into_iter().next() else {
        return ParseError::syntax("invalid query", 0);
    };
    let position = error.span().start;

    if let SimpleReason::Custom(message) = error.reason() {
        return ParseError::syntax(message.clone(), position);
    }

    let mut expected: Vec<String> = error
        .expected()
        .map(|token| match token {
            Some(token) => format!("'{}'", token.source_text()),
            None => "end of input".to_string(),
        })
        .collect();
    expected.sort();

    let found = match error.found() {
        Some(token) => format!("unexpected '{}'", token.source_text()),
        None => "unexpected end of input".to_string(),
    };
    let message = match (error.label(), expected.is_empty()) {
        (Some(label), _) => format!("{}, expected {}", found, label),
        (None, false) => format!("{}, expected {}", found, expected.join(" or ")),
        (None, true) => found,
    };
    ParseError::syntax(message, position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn parse(source: &str) -> Result<Query, ParseError> {
        parse_query(source, &ParserOptions::default())
    }

    #[test]
    fn test_unclosed_group() {
        let err = parse("(field='value'").unwrap_err();
        assert_eq!(err, ParseError::unbalanced("unclosed '('", 0));
    }

    #[test]
    fn test_unmatched_close() {
        let err = parse("x='1')").unwrap_err();
        assert_eq!(err, ParseError::unbalanced("unmatched ')'", 5));
    }

    fn nested(depth: usize) -> String {
        format!("{}x='1'{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_nesting_up_to_the_limit() {
        assert!(parse(&nested(MAX_NESTING_DEPTH)).is_ok());
    }

    #[test]
    fn test_nesting_beyond_the_limit() {
        let err = parse(&nested(MAX_NESTING_DEPTH + 1)).unwrap_err();
        assert_eq!(
            err,
            ParseError::syntax("groups nested too deeply", MAX_NESTING_DEPTH)
        );

        let err = parse(&nested(10_000)).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Syntax);
    }

    #[test]
    fn test_depth_is_reported_before_unclosed_groups() {
        let err = parse(&"(".repeat(MAX_NESTING_DEPTH * 2)).unwrap_err();
        assert_eq!(
            err,
            ParseError::syntax("groups nested too deeply", MAX_NESTING_DEPTH)
        );
    }

    #[test]
    fn test_unknown_combinator_position() {
        let err = parse("field = 'value' ? field = 'value'").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Syntax);
        match err {
            ParseError::Syntax { position, .. } => assert_eq!(position, 13),
            other => panic!("expected syntax error, found {:?}", other),
        }
    }

    #[test]
    fn test_operator_as_field() {
        for symbol in [",", "|", "<", ">", "=", "^"] {
            let err = parse(&format!("{} = 'value'", symbol)).unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::Syntax, "field {:?}", symbol);
        }
    }

    #[test]
    fn test_missing_value() {
        let err = parse("x=").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Syntax);
    }

    #[test]
    fn test_empty_group() {
        let err = parse("()").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::Syntax);
    }

    #[test]
    fn test_parse_tokens() {
        let query = parse_tokens(vec![
            Token::Word("x".to_string()),
            Token::Equals,
            Token::Word("3".to_string()),
        ])
        .unwrap();
        assert!(matches!(query, Query::Expression(_)));
        assert_eq!(parse_tokens(vec![]), Err(ParseError::EmptyInput));
    }
}
