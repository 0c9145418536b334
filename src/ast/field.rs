//! Field names

use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static FIELD_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-&%$?.:]+$").unwrap());

/// The document field an expression tests.
///
/// Letters, digits and `_ - & % $ ? . :` are allowed. Operators, combinators,
/// parentheses and whitespace are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: &str) -> Result<Self, ParseError> {
        if FIELD_NAME.is_match(name) {
            Ok(FieldName(name.to_string()))
        } else {
            Err(ParseError::syntax(
                format!("invalid field name '{}'", name),
                0,
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
