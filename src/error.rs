//! Error types for query parsing
//!
//! Every failure of the pipeline is reported through [`ParseError`]. Each variant
//! corresponds to one category of malformed input; the message is informative only
//! and callers should match on the variant (or on [`ParseError::kind`]).

use std::fmt;
use thiserror::Error;

/// Errors that can occur while turning a query string into a filter document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained nothing but whitespace
    #[error("empty query")]
    EmptyInput,

    /// A quoted literal is unterminated or has an empty payload
    #[error("invalid literal at {position}: {message}")]
    Literal { message: String, position: usize },

    /// Invalid field characters, unknown operator or combinator, or an illegal
    /// mix of groups, expressions or combinators at one level
    #[error("syntax error at {position}: {message}")]
    Syntax { message: String, position: usize },

    /// An operator was paired with a value it cannot take
    #[error("invalid value for operator '{operator}': {message}")]
    OperatorValue { operator: char, message: String },

    /// A parenthesis without its counterpart
    #[error("unbalanced group at {position}: {message}")]
    UnbalancedGroup { message: String, position: usize },
}

/// The category of a [`ParseError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    EmptyInput,
    Literal,
    Syntax,
    OperatorValue,
    UnbalancedGroup,
}

impl ParseError {
    pub fn literal(message: impl Into<String>, position: usize) -> Self {
        ParseError::Literal {
            message: message.into(),
            position,
        }
    }

    pub fn syntax(message: impl Into<String>, position: usize) -> Self {
        ParseError::Syntax {
            message: message.into(),
            position,
        }
    }

    pub fn operator_value(operator: char, message: impl Into<String>) -> Self {
        ParseError::OperatorValue {
            operator,
            message: message.into(),
        }
    }

    pub fn unbalanced(message: impl Into<String>, position: usize) -> Self {
        ParseError::UnbalancedGroup {
            message: message.into(),
            position,
        }
    }

    /// Move a positioned error to `offset`; errors without a position are unchanged
    pub fn at(self, offset: usize) -> Self {
        match self {
            ParseError::Literal { message, .. } => ParseError::literal(message, offset),
            ParseError::Syntax { message, .. } => ParseError::syntax(message, offset),
            ParseError::UnbalancedGroup { message, .. } => ParseError::unbalanced(message, offset),
            other => other,
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyInput => ParseErrorKind::EmptyInput,
            ParseError::Literal { .. } => ParseErrorKind::Literal,
            ParseError::Syntax { .. } => ParseErrorKind::Syntax,
            ParseError::OperatorValue { .. } => ParseErrorKind::OperatorValue,
            ParseError::UnbalancedGroup { .. } => ParseErrorKind::UnbalancedGroup,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::EmptyInput => "empty-input",
            ParseErrorKind::Literal => "literal",
            ParseErrorKind::Syntax => "syntax",
            ParseErrorKind::OperatorValue => "operator-value",
            ParseErrorKind::UnbalancedGroup => "unbalanced-group",
        };
        f.write_str(name)
    }
}
