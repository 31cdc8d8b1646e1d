//! Validation contract for filter definitions
//!
//! This module contains:
//! - The operator catalog
//! - The property reference contract and its runtime implementation
//! - Common operator sets
//! - The property registry used by the wire form of a request

pub mod operator;
pub mod presets;
pub mod property;
pub mod registry;

pub use operator::Operator;
pub use presets::{FOR_NUMBER, FOR_TEXT};
pub use property::{Property, PropertyRef};
pub use registry::PropertyRegistry;
