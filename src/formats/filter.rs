//! Canonical filter-document serializer
//!
//! Output is the textual form of a MongoDB filter: single-quoted keys and
//! strings, bare booleans and integers. Terms keep their source order and
//! duplicates are kept; groups contribute nesting only.
//!
//! | Node | Output |
//! |---|---|
//! | `x = v` | `{'x': v}` |
//! | `x > v`, `x < v`, `x ^ v` | `{'x': {'$gte': v}}`, `{'x': {'$lte': v}}`, `{'x': {'$regex': v}}` |
//! | `a , b` / `a \| b` | `{'$and': [a, b]}` / `{'$or': [a, b]}` |

use crate::ast::{Expression, Query, Term};

/// Serialize a query to its canonical filter string
pub fn serialize(query: &Query) -> String {
    let mut out = String::new();
    write_query(&mut out, query);
    out
}

fn write_query(out: &mut String, query: &Query) {
    match query {
        Query::Expression(expression) => write_expression(out, expression),
        Query::Group(group) => write_query(out, group.inner()),
        Query::Combination(combination) => {
            out.push_str("{'");
            out.push_str(combination.combinator().mongo_name());
            out.push_str("': [");
            for (i, term) in combination.terms().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_term(out, term);
            }
            out.push_str("]}");
        }
    }
}

fn write_term(out: &mut String, term: &Term) {
    match term {
        Term::Expression(expression) => write_expression(out, expression),
        Term::Group(group) => write_query(out, group.inner()),
    }
}

fn write_expression(out: &mut String, expression: &Expression) {
    let value = expression.value().render();
    out.push_str("{'");
    out.push_str(expression.field().as_str());
    out.push_str("': ");
    match expression.operator().mongo_name() {
        None => out.push_str(&value),
        Some(operator) => {
            out.push_str("{'");
            out.push_str(operator);
            out.push_str("': ");
            out.push_str(&value);
            out.push('}');
        }
    }
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Combination, Combinator, FieldName, Group, Literal, Operator};

    fn expression(field: &str, operator: Operator, raw: &str, quoted: bool) -> Expression {
        let literal = Literal::classify(raw, quoted).unwrap();
        let literal = if operator == Operator::Regex {
            literal.into_regex()
        } else {
            literal
        };
        Expression::new(FieldName::new(field).unwrap(), operator, literal)
    }

    #[test]
    fn test_equality_values() {
        let cases = [
            (expression("x", Operator::Equals, "3", false), "{'x': 3}"),
            (expression("x", Operator::Equals, "3", true), "{'x': '3'}"),
            (
                expression("x", Operator::Equals, "true", false),
                "{'x': true}",
            ),
            (
                expression("x", Operator::Equals, "a b", true),
                "{'x': 'a b'}",
            ),
        ];
        for (expr, expected) in cases {
            assert_eq!(serialize(&Query::Expression(expr)), expected);
        }
    }

    #[test]
    fn test_operators() {
        let cases = [
            (Operator::GreaterOrEqual, "{'f': {'$gte': '4'}}"),
            (Operator::LessOrEqual, "{'f': {'$lte': '4'}}"),
            (Operator::Regex, "{'f': {'$regex': '4'}}"),
        ];
        for (operator, expected) in cases {
            let query = Query::Expression(expression("f", operator, "4", true));
            assert_eq!(serialize(&query), expected);
        }
    }

    #[test]
    fn test_group_adds_no_syntax() {
        let inner = Query::Expression(expression("x", Operator::Equals, "1", true));
        let query = Query::Group(Group::new(inner.clone()));
        assert_eq!(serialize(&query), serialize(&inner));
    }

    #[test]
    fn test_combination_keeps_order_and_duplicates() {
        let combination = Combination::new(
            Combinator::And,
            vec![
                Term::Expression(expression("x", Operator::Equals, "3", true)),
                Term::Expression(expression("a", Operator::Equals, "1", false)),
                Term::Expression(expression("x", Operator::Equals, "3", true)),
            ],
        )
        .unwrap();
        assert_eq!(
            serialize(&Query::Combination(combination)),
            "{'$and': [{'x': '3'}, {'a': 1}, {'x': '3'}]}"
        );
    }

    #[test]
    fn test_display_uses_serializer() {
        let query = Query::Expression(expression("x", Operator::Equals, "3", false));
        assert_eq!(query.to_string(), "{'x': 3}");
    }
}
