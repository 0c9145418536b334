//! Treeviz formatter for query ASTs

use crate::ast::{AstNode, Query, Term};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(query: &Query) -> String {
    let mut result = String::new();
    append_query(&mut result, query, "", true);
    result
}

fn append_node(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), 40);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        display_label
    ));

    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_query(result: &mut String, query: &Query, prefix: &str, is_last: bool) {
    let new_prefix = append_node(result, query, prefix, is_last);

    match query {
        Query::Expression(_) => {}
        Query::Group(group) => append_query(result, group.inner(), &new_prefix, true),
        Query::Combination(combination) => {
            append_terms(result, combination.terms(), &new_prefix);
        }
    }
}

fn append_terms(result: &mut String, terms: &[Term], prefix: &str) {
    for (i, term) in terms.iter().enumerate() {
        let is_last = i == terms.len() - 1;
        match term {
            Term::Expression(expression) => {
                append_node(result, expression, prefix, is_last);
            }
            Term::Group(group) => {
                let new_prefix = append_node(result, group, prefix, is_last);
                append_query(result, group.inner(), &new_prefix, true);
            }
        }
    }
}
