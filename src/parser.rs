//! Parser module for the query language
//!
//! Parsing happens in two stages. The [`combinators`] module holds a chumsky
//! grammar that turns the token stream into a loose intermediate tree, then
//! [`ast_conversion`] checks the rules the grammar leaves open and builds the
//! final [`Query`](crate::ast::Query).

pub mod api;
pub mod ast_conversion;
pub mod combinators;
pub mod intermediate_ast;

pub use api::{parse_query, parse_tokens, parse_with_spans, MAX_NESTING_DEPTH};
