//! AST definitions for the query language
//!
//! ## Modules
//!
//! - `literal` - Typed values and the literal classifier
//! - `field` - Validated field names
//! - `node` - Expression, group, combination and query nodes

pub mod field;
pub mod literal;
pub mod node;

pub use field::FieldName;
pub use literal::{Literal, LiteralKind};
pub use node::{AstNode, Combination, Combinator, Expression, Group, Operator, Query, Term};
