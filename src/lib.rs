//! # mgoquery
//!
//! A terse query language that compiles to MongoDB filter documents.
//!
//! ```text
//! x='3', y>4                       =>  {'$and': [{'x': '3'}, {'y': {'$gte': 4}}]}
//! (x>'1', x<'5') | (name^'^a')     =>  {'$or': [{'$and': [...]}, {'name': {'$regex': '^a'}}]}
//! ```
//!
//! The pipeline is `input -> lexer -> parser -> formats`:
//!
//! - [`lexer`] strips insignificant whitespace and tokenizes
//! - [`parser`] builds the [`ast::Query`] and enforces the language rules
//! - [`formats`] renders the canonical filter string (and debug views)
//!
//! [`parse`] runs the whole pipeline; [`QueryParser`] adds callback and async
//! calling styles.
//!
//! ## Testing
//!
//! Parser tests assert on AST shape with the fluent API in the `testing` module.

pub mod api;
pub mod ast;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod processor;

#[cfg(test)]
pub mod testing;

pub use api::{parse, parse_with_options, QueryParser};
pub use error::{ParseError, ParseErrorKind};
pub use options::ParserOptions;
