//! Declared property types and value compatibility

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar type a filterable property is declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Boolean property
    Boolean,
    /// Integer property
    Integer,
    /// Floating point property; integer literals are accepted
    Float,
    /// Any numeric property
    Number,
    /// Text property
    Text,
    /// Untyped property; any non-null scalar is accepted
    Any,
}

impl ValueType {
    /// Check whether a scalar value is compatible with this declared type.
    ///
    /// Null and lists are never compatible; callers handle them per operator.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) | (_, Value::List(_)) => false,
            (ValueType::Any, _) => true,
            (ValueType::Boolean, Value::Bool(_)) => true,
            (ValueType::Integer, Value::Integer(_)) => true,
            (ValueType::Float, Value::Float(_) | Value::Integer(_)) => true,
            (ValueType::Number, Value::Float(_) | Value::Integer(_)) => true,
            (ValueType::Text, Value::String(_)) => true,
            _ => false,
        }
    }

    /// Returns true for the numeric types
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Integer | ValueType::Float | ValueType::Number)
    }

    /// Returns true for `Text`
    pub fn is_textual(&self) -> bool {
        matches!(self, ValueType::Text)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Number => "number",
            ValueType::Text => "text",
            ValueType::Any => "any",
        };
        f.write_str(name)
    }
}
