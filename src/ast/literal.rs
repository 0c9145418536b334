//! Typed literal values
//!
//! Only unquoted tokens can be booleans or integers. Quoted tokens are always
//! strings until the parser pairs them with the regex operator, at which point a
//! new [`Literal`] of kind [`LiteralKind::Regex`] replaces the string.

use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static BOOLEAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(true|false)$").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// The semantic type of a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Boolean,
    Integer,
    String,
    Regex,
}

/// A typed value attached to an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal {
    kind: LiteralKind,
    raw: String,
    quoted: bool,
}

impl Literal {
    /// Determine the type of a raw token.
    ///
    /// `raw` is the payload without its delimiters; `quoted` tells whether it was
    /// written between delimiters. Quoted payloads must not be empty.
    pub fn classify(raw: &str, quoted: bool) -> Result<Self, ParseError> {
        let kind = if quoted {
            if raw.is_empty() {
                return Err(ParseError::literal("empty quoted literal", 0));
            }
            LiteralKind::String
        } else if BOOLEAN.is_match(raw) {
            LiteralKind::Boolean
        } else if INTEGER.is_match(raw) {
            LiteralKind::Integer
        } else {
            LiteralKind::String
        };

        Ok(Literal {
            kind,
            raw: raw.to_string(),
            quoted,
        })
    }

    /// Reinterpret this literal as a regular expression
    pub fn into_regex(self) -> Literal {
        Literal {
            kind: LiteralKind::Regex,
            ..self
        }
    }

    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// The value as it appears in the filter document
    pub fn render(&self) -> String {
        match self.kind {
            LiteralKind::Boolean | LiteralKind::Integer => self.raw.clone(),
            LiteralKind::String | LiteralKind::Regex => format!("'{}'", self.raw),
        }
    }
}
