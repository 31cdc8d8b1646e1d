//! FilterQL Core - Validation and condition composition for FilterQL
//!
//! This crate provides the contracts shared across the FilterQL workspace:
//! - The operator catalog and the property reference contract
//! - Filter values and declared property types
//! - Filter definitions and requests, typed and wire form
//! - The `Condition` / `ConditionBuilder` / `Context` composition protocol
//! - Error types

pub mod condition;
pub mod context;
pub mod error;
pub mod model;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use condition::{Condition, ConditionBuilder, Predicate, PredicateBuilder};
pub use context::{Context, FilterContext};
pub use error::{ContextError, ValidationError};
pub use model::{FilterDefinition, FilterRequest, RawFilterDefinition, RawFilterRequest};
pub use types::{Value, ValueType};
pub use validation::{Operator, Property, PropertyRef, PropertyRegistry, FOR_NUMBER, FOR_TEXT};
