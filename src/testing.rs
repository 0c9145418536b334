//! Fluent assertion API for query ASTs
//!
//! Matching on nested [`Query`] enums by hand takes a dozen lines per level. The
//! builders here mirror the tree instead:
//!
//! ```rust,ignore
//! assert_query(&query)
//!     .combination()
//!     .combinator(Combinator::Or)
//!     .group_term(0, |inner| {
//!         inner.expression().field("x").raw("1");
//!     });
//! ```
//!
//! Every failure message carries the path to the node, e.g. `root.terms[0].inner`.

use crate::ast::{Combination, Combinator, Expression, LiteralKind, Operator, Query, Term};

/// Create an assertion builder for a query
pub fn assert_query(query: &Query) -> QueryAssertion<'_> {
    QueryAssertion {
        query,
        context: "root".to_string(),
    }
}

pub struct QueryAssertion<'a> {
    query: &'a Query,
    context: String,
}

impl<'a> QueryAssertion<'a> {
    /// Assert this node is a bare expression
    pub fn expression(self) -> ExpressionAssertion<'a> {
        match self.query {
            Query::Expression(expression) => ExpressionAssertion {
                expression,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Expression, found {}",
                self.context,
                describe(other)
            ),
        }
    }

    /// Assert this node is a combination
    pub fn combination(self) -> CombinationAssertion<'a> {
        match self.query {
            Query::Combination(combination) => CombinationAssertion {
                combination,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Combination, found {}",
                self.context,
                describe(other)
            ),
        }
    }

    /// Assert this node is a group and run `assertion` on its content
    pub fn group<F>(self, assertion: F) -> Self
    where
        F: FnOnce(QueryAssertion<'a>),
    {
        match self.query {
            Query::Group(group) => assertion(QueryAssertion {
                query: group.inner(),
                context: format!("{}.inner", self.context),
            }),
            other => panic!(
                "{}: Expected Group, found {}",
                self.context,
                describe(other)
            ),
        }
        self
    }
}

pub struct CombinationAssertion<'a> {
    combination: &'a Combination,
    context: String,
}

impl<'a> CombinationAssertion<'a> {
    pub fn combinator(self, expected: Combinator) -> Self {
        assert_eq!(
            self.combination.combinator(),
            expected,
            "{}: Expected combinator {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn term_count(self, expected: usize) -> Self {
        let actual = self.combination.terms().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} terms, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the term at `index` is an expression
    pub fn expression_term<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        let context = format!("{}.terms[{}]", self.context, index);
        match self.term(index) {
            Term::Expression(expression) => assertion(ExpressionAssertion {
                expression,
                context,
            }),
            Term::Group(_) => panic!("{}: Expected Expression, found Group", context),
        }
        self
    }

    /// Assert the term at `index` is a group and run `assertion` on its content
    pub fn group_term<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(QueryAssertion<'a>),
    {
        let context = format!("{}.terms[{}]", self.context, index);
        match self.term(index) {
            Term::Group(group) => assertion(QueryAssertion {
                query: group.inner(),
                context: format!("{}.inner", context),
            }),
            Term::Expression(expression) => panic!(
                "{}: Expected Group, found Expression on '{}'",
                context,
                expression.field()
            ),
        }
        self
    }

    fn term(&self, index: usize) -> &'a Term {
        let terms = self.combination.terms();
        assert!(
            index < terms.len(),
            "{}: Term index {} out of bounds ({} terms)",
            self.context,
            index,
            terms.len()
        );
        &terms[index]
    }
}

pub struct ExpressionAssertion<'a> {
    expression: &'a Expression,
    context: String,
}

impl ExpressionAssertion<'_> {
    pub fn field(self, expected: &str) -> Self {
        assert_eq!(
            self.expression.field().as_str(),
            expected,
            "{}: Expected field '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn operator(self, expected: Operator) -> Self {
        assert_eq!(
            self.expression.operator(),
            expected,
            "{}: Expected operator {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn value_kind(self, expected: LiteralKind) -> Self {
        assert_eq!(
            self.expression.value().kind(),
            expected,
            "{}: Expected a {:?} value",
            self.context,
            expected
        );
        self
    }

    /// Assert the raw value payload, without delimiters
    pub fn raw(self, expected: &str) -> Self {
        assert_eq!(
            self.expression.value().raw(),
            expected,
            "{}: Expected value '{}'",
            self.context,
            expected
        );
        self
    }
}

fn describe(query: &Query) -> String {
    match query {
        Query::Expression(expression) => format!("Expression on '{}'", expression.field()),
        Query::Group(_) => "Group".to_string(),
        Query::Combination(combination) => format!(
            "Combination {:?} with {} terms",
            combination.combinator(),
            combination.terms().len()
        ),
    }
}
