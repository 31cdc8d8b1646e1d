//! Value model for FilterQL
//!
//! This module contains:
//! - Filter values
//! - Declared property types and their compatibility rules

pub mod value;
pub mod value_type;

pub use value::Value;
pub use value_type::ValueType;
