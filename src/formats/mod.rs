//! Output formats for parsed queries
//!
//! - `filter` - the canonical filter-document string
//! - `treeviz` - a box-drawing view of the AST, for debugging

pub mod filter;
pub mod treeviz;

pub use filter::serialize;
pub use treeviz::to_treeviz_str;
