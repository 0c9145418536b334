//! Token definitions for the query language
//!
//! Tokens are produced from normalized input (see
//! [`whitespace_transform`](super::whitespace_transform)), so there is no
//! whitespace token: whitespace only survives inside quoted literals, which are
//! matched as a whole.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in a query
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub enum Token {
    // Literals
    #[regex(r"'[^']*'", |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Quoted(String),

    // Field names and unquoted values share one character class
    #[regex(r"[A-Za-z0-9_\-&%$?.:]+", |lex| lex.slice().to_string())]
    Word(String),

    // Operators
    #[token("=")]
    Equals,
    #[token(">")]
    Greater,
    #[token("<")]
    Less,
    #[token("^")]
    Caret,

    // Combinators
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,

    // Grouping
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
}

impl Token {
    /// The source text this token was lexed from
    pub fn source_text(&self) -> String {
        match self {
            Token::Quoted(payload) => format!("'{}'", payload),
            Token::Word(word) => word.clone(),
            Token::Equals => "=".to_string(),
            Token::Greater => ">".to_string(),
            Token::Less => "<".to_string(),
            Token::Caret => "^".to_string(),
            Token::Comma => ",".to_string(),
            Token::Pipe => "|".to_string(),
            Token::OpenParen => "(".to_string(),
            Token::CloseParen => ")".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Quoted(payload) => write!(f, "<quoted:{}>", payload),
            Token::Word(word) => write!(f, "<word:{}>", word),
            Token::Equals => write!(f, "<equals>"),
            Token::Greater => write!(f, "<greater>"),
            Token::Less => write!(f, "<less>"),
            Token::Caret => write!(f, "<caret>"),
            Token::Comma => write!(f, "<comma>"),
            Token::Pipe => write!(f, "<pipe>"),
            Token::OpenParen => write!(f, "<open-paren>"),
            Token::CloseParen => write!(f, "<close-paren>"),
        }
    }
}
