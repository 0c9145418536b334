//! AST node definitions
//!
//! The tree is built once, bottom-up, by the parser and never changes afterwards:
//! every node owns its children and exposes them through accessors only.
//!
//! - [`Query`] is the root: an expression, a group, or a combination
//! - [`Combination`] joins two or more [`Term`]s with one [`Combinator`]
//! - [`Term`] is either an [`Expression`] or a [`Group`]
//! - [`Group`] wraps a parenthesized sub-query

use super::field::FieldName;
use super::literal::Literal;
use crate::error::ParseError;
use serde::Serialize;
use std::fmt;

/// Comparison operator of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    Equals,
    GreaterOrEqual,
    LessOrEqual,
    Regex,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Equals => '=',
            Operator::GreaterOrEqual => '>',
            Operator::LessOrEqual => '<',
            Operator::Regex => '^',
        }
    }

    /// The Mongo query operator, `None` for plain equality
    pub fn mongo_name(&self) -> Option<&'static str> {
        match self {
            Operator::Equals => None,
            Operator::GreaterOrEqual => Some("$gte"),
            Operator::LessOrEqual => Some("$lte"),
            Operator::Regex => Some("$regex"),
        }
    }
}

/// Joins the terms of a combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn symbol(&self) -> char {
        match self {
            Combinator::And => ',',
            Combinator::Or => '|',
        }
    }

    pub fn mongo_name(&self) -> &'static str {
        match self {
            Combinator::And => "$and",
            Combinator::Or => "$or",
        }
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

/// An atomic predicate on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    field: FieldName,
    operator: Operator,
    value: Literal,
}

impl Expression {
    pub fn new(field: FieldName, operator: Operator, value: Literal) -> Self {
        Expression {
            field,
            operator,
            value,
        }
    }

    pub fn field(&self) -> &FieldName {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &Literal {
        &self.value
    }
}

impl AstNode for Expression {
    fn node_type(&self) -> &'static str {
        "Expression"
    }

    fn display_label(&self) -> String {
        format!(
            "{} {} {}",
            self.field,
            self.operator.symbol(),
            self.value.render()
        )
    }
}

/// A parenthesized sub-query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    inner: Box<Query>,
}

impl Group {
    pub fn new(inner: Query) -> Self {
        Group {
            inner: Box::new(inner),
        }
    }

    pub fn inner(&self) -> &Query {
        &self.inner
    }
}

impl AstNode for Group {
    fn node_type(&self) -> &'static str {
        "Group"
    }

    fn display_label(&self) -> String {
        "( )".to_string()
    }
}

/// One operand of a combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Term {
    Expression(Expression),
    Group(Group),
}

impl Term {
    pub fn is_group(&self) -> bool {
        matches!(self, Term::Group(_))
    }
}

impl AstNode for Term {
    fn node_type(&self) -> &'static str {
        match self {
            Term::Expression(expression) => expression.node_type(),
            Term::Group(group) => group.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Term::Expression(expression) => expression.display_label(),
            Term::Group(group) => group.display_label(),
        }
    }
}

/// Two or more terms of the same kind joined by a single combinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    combinator: Combinator,
    terms: Vec<Term>,
}

impl Combination {
    /// Build a combination. Fails unless there are at least two terms and they
    /// are either all expressions or all groups.
    pub fn new(combinator: Combinator, terms: Vec<Term>) -> Result<Self, ParseError> {
        if terms.len() < 2 {
            return Err(ParseError::syntax(
                format!(
                    "a combination needs at least two terms, found {}",
                    terms.len()
                ),
                0,
            ));
        }

        let groups = terms.iter().filter(|term| term.is_group()).count();
        if groups != 0 && groups != terms.len() {
            return Err(ParseError::syntax(
                "groups and expressions cannot be combined at the same level; \
                 wrap the expressions in parentheses",
                0,
            ));
        }

        Ok(Combination { combinator, terms })
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl AstNode for Combination {
    fn node_type(&self) -> &'static str {
        "Combination"
    }

    fn display_label(&self) -> String {
        format!(
            "{} ({} terms)",
            self.combinator.mongo_name(),
            self.terms.len()
        )
    }
}

/// The root of a parsed query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Query {
    Expression(Expression),
    Group(Group),
    Combination(Combination),
}

impl Query {
    /// Wrap a single term as a query, the degenerate one-term combination
    pub fn from_term(term: Term) -> Self {
        match term {
            Term::Expression(expression) => Query::Expression(expression),
            Term::Group(group) => Query::Group(group),
        }
    }

    /// Number of expressions in the whole tree
    pub fn expression_count(&self) -> usize {
        match self {
            Query::Expression(_) => 1,
            Query::Group(group) => group.inner().expression_count(),
            Query::Combination(combination) => combination
                .terms()
                .iter()
                .map(|term| match term {
                    Term::Expression(_) => 1,
                    Term::Group(group) => group.inner().expression_count(),
                })
                .sum(),
        }
    }
}

impl AstNode for Query {
    fn node_type(&self) -> &'static str {
        match self {
            Query::Expression(expression) => expression.node_type(),
            Query::Group(group) => group.node_type(),
            Query::Combination(combination) => combination.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Query::Expression(expression) => expression.display_label(),
            Query::Group(group) => group.display_label(),
            Query::Combination(combination) => combination.display_label(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formats::serialize(self))
    }
}
