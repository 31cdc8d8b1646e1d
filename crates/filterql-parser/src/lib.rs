//! FilterQL Parser - Combination DSL parser for FilterQL
//!
//! This crate turns combination expressions such as `(f1 & f2) | !f3` into
//! a [`FilterTree`], and evaluates a tree against a
//! [`filterql_core::Context`] to produce a combined condition.

pub mod dsl_parser;
pub mod error;
pub mod token;
pub mod tree;

// Re-export main parser types
pub use dsl_parser::{DslParser, Parser, DEFAULT_MAX_LENGTH};
pub use error::{DslSyntaxError, Result};
pub use tree::FilterTree;

/// Parse `expression` with the default [`DslParser`]
pub fn parse(expression: &str) -> Result<FilterTree> {
    DslParser::default().parse(expression)
}
