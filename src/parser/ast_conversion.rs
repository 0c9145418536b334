//! Conversion from the intermediate AST to the final AST
//!
//! This is where the rules the grammar stage leaves open are enforced:
//!
//! - one combinator per nesting level
//! - no groups next to bare expressions at one level
//! - the regex operator only takes quoted values
//! - booleans only compare with `=`
//! - bare values must be booleans or integers

use crate::ast::{
    Combination, Expression, FieldName, Group, Literal, LiteralKind, Operator, Query, Term,
};
use crate::error::ParseError;
use crate::parser::intermediate_ast::{RawCombination, RawExpression, RawTerm, RawValue};

/// Convert a parsed combination into a query
pub fn convert_query(raw: RawCombination) -> Result<Query, ParseError> {
    convert_combination(raw)
}

fn convert_combination(raw: RawCombination) -> Result<Query, ParseError> {
    let RawCombination { first, rest } = raw;

    let Some(head) = rest.first() else {
        return Ok(Query::from_term(convert_term(first)?));
    };
    let combinator = head.combinator;

    if let Some(link) = rest.iter().find(|link| link.combinator != combinator) {
        return Err(ParseError::syntax(
            format!(
                "'{}' and '{}' cannot be mixed at the same level; use parentheses",
                combinator.symbol(),
                link.combinator.symbol()
            ),
            link.position,
        ));
    }

    let expects_group = first.is_group();
    if let Some(link) = rest
        .iter()
        .find(|link| link.term.is_group() != expects_group)
    {
        return Err(ParseError::syntax(
            "groups and expressions cannot be combined at the same level; \
             wrap the expressions in parentheses",
            link.position,
        ));
    }

    let mut terms = Vec::with_capacity(rest.len() + 1);
    terms.push(convert_term(first)?);
    for link in rest {
        terms.push(convert_term(link.term)?);
    }

    Combination::new(combinator, terms).map(Query::Combination)
}

fn convert_term(raw: RawTerm) -> Result<Term, ParseError> {
    match raw {
        RawTerm::Expression(expression) => convert_expression(expression).map(Term::Expression),
        RawTerm::Group { inner, .. } => {
            convert_combination(*inner).map(|query| Term::Group(Group::new(query)))
        }
    }
}

fn convert_expression(raw: RawExpression) -> Result<Expression, ParseError> {
    let field = FieldName::new(&raw.field).map_err(|err| err.at(raw.field_position))?;

    let (payload, quoted) = match raw.value {
        RawValue::Quoted(payload) => (payload, true),
        RawValue::Bare(word) => (word, false),
    };
    let literal = Literal::classify(&payload, quoted).map_err(|err| err.at(raw.value_position))?;

    let value = match raw.operator {
        Operator::Regex if !literal.is_quoted() => {
            return Err(ParseError::operator_value(
                raw.operator.symbol(),
                format!("a regular expression must be quoted, found {}", payload),
            ));
        }
        Operator::Regex => literal.into_regex(),
        Operator::GreaterOrEqual | Operator::LessOrEqual
            if literal.kind() == LiteralKind::Boolean =>
        {
            return Err(ParseError::operator_value(
                raw.operator.symbol(),
                format!("boolean {} can only be compared with '='", payload),
            ));
        }
        _ => literal,
    };

    if value.kind() == LiteralKind::String && !value.is_quoted() {
        return Err(ParseError::syntax(
            format!("value {} must be quoted", payload),
            raw.value_position,
        ));
    }

    Ok(Expression::new(field, raw.operator, value))
}
