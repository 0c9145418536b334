//! Intermediate AST produced by the grammar stage
//!
//! The grammar accepts more than the language allows: a combination may mix `,`
//! and `|`, and groups may sit next to bare expressions. Keeping these shapes
//! around lets [`ast_conversion`](super::ast_conversion) reject them with a
//! precise error instead of a generic "unexpected token". Positions are byte
//! offsets into the normalized query.

use crate::ast::{Combinator, Operator};

/// An expression value before classification
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Quoted(String),
    Bare(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawExpression {
    pub field: String,
    pub field_position: usize,
    pub operator: Operator,
    pub value: RawValue,
    pub value_position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawTerm {
    Expression(RawExpression),
    Group {
        inner: Box<RawCombination>,
        position: usize,
    },
}

impl RawTerm {
    pub fn is_group(&self) -> bool {
        matches!(self, RawTerm::Group { .. })
    }
}

/// A combinator and the term that follows it
#[derive(Debug, Clone, PartialEq)]
pub struct RawLink {
    pub combinator: Combinator,
    pub position: usize,
    pub term: RawTerm,
}

/// A term followed by any number of links, combinators not yet checked
#[derive(Debug, Clone, PartialEq)]
pub struct RawCombination {
    pub first: RawTerm,
    pub rest: Vec<RawLink>,
}
