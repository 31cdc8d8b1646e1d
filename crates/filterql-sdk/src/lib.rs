//! FilterQL SDK
//!
//! High-level API for resolving filter requests: validate the named filter
//! definitions, parse the combination expression and produce one combined
//! condition for a query technology.

pub mod builder;
pub mod config;
pub mod error;
pub mod executor;
pub mod resolver;

// Re-export main types
pub use builder::FilterResolverBuilder;
pub use config::{ResolverConfig, UnusedFilterPolicy};
pub use error::{FilterError, Result};
pub use executor::FilterExecutor;
pub use resolver::FilterResolver;

// Re-export commonly used types from dependencies
pub use filterql_core::{
    Condition, ConditionBuilder, Context, FilterContext, FilterDefinition, FilterRequest,
    Operator, Predicate, PredicateBuilder, Property, PropertyRef, PropertyRegistry,
    RawFilterRequest, Value, ValueType,
};
pub use filterql_parser::{DslParser, FilterTree, Parser};
