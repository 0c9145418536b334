//! Parser combinators for the query grammar
//!
//! ```text
//! Query       := Combination EOI
//! Combination := Term (Combinator Term)*
//! Term        := '(' Combination ')' | Expression
//! Expression  := Word Operator Value
//! Operator    := '=' | '>' | '<' | '^'
//! Value       := Quoted | Word
//! Combinator  := ',' | '|'
//! ```
//!
//! Mixed combinators and mixed term kinds are accepted here and rejected during
//! conversion.

use chumsky::prelude::*;
use std::ops::Range;

use crate::ast::{Combinator, Operator};
use crate::lexer::Token;
use crate::parser::intermediate_ast::{RawCombination, RawExpression, RawLink, RawTerm, RawValue};

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// A field name, with its position
pub(crate) fn field() -> impl Parser<Token, (String, usize), Error = ParserError> + Clone {
    select! { Token::Word(name) => name }
        .map_with_span(|name, span: Range<usize>| (name, span.start))
        .labelled("field name")
}

pub(crate) fn operator() -> impl Parser<Token, Operator, Error = ParserError> + Clone {
    select! {
        Token::Equals => Operator::Equals,
        Token::Greater => Operator::GreaterOrEqual,
        Token::Less => Operator::LessOrEqual,
        Token::Caret => Operator::Regex,
    }
    .labelled("operator")
}

/// A quoted or bare value, with its position
pub(crate) fn value() -> impl Parser<Token, (RawValue, usize), Error = ParserError> + Clone {
    select! {
        Token::Quoted(payload) => RawValue::Quoted(payload),
        Token::Word(word) => RawValue::Bare(word),
    }
    .map_with_span(|value, span: Range<usize>| (value, span.start))
    .labelled("value")
}

pub(crate) fn combinator() -> impl Parser<Token, (Combinator, usize), Error = ParserError> + Clone
{
    select! {
        Token::Comma => Combinator::And,
        Token::Pipe => Combinator::Or,
    }
    .map_with_span(|combinator, span: Range<usize>| (combinator, span.start))
    .labelled("combinator")
}

pub(crate) fn expression() -> impl Parser<Token, RawExpression, Error = ParserError> + Clone {
    field()
        .then(operator())
        .then(value())
        .map(
            |(((field, field_position), operator), (value, value_position))| RawExpression {
                field,
                field_position,
                operator,
                value,
                value_position,
            },
        )
}

/// The whole query: one combination that must consume every token
pub(crate) fn query() -> impl Parser<Token, RawCombination, Error = ParserError> + Clone {
    recursive(|combination| {
        let group = combination
            .delimited_by(just(Token::OpenParen), just(Token::CloseParen))
            .map_with_span(|inner, span: Range<usize>| RawTerm::Group {
                inner: Box::new(inner),
                position: span.start,
            });

        let term = group.or(expression().map(RawTerm::Expression));

        term.clone()
            .then(combinator().then(term).repeated())
            .map(|(first, rest)| RawCombination {
                first,
                rest: rest
                    .into_iter()
                    .map(|((combinator, position), term)| RawLink {
                        combinator,
                        position,
                        term,
                    })
                    .collect(),
            })
    })
    .then_ignore(end())
}
