//! Error types for FilterQL Core

use crate::types::ValueType;
use crate::validation::Operator;
use thiserror::Error;

/// Raised when a filter definition violates its property's contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Operator not in the property's supported set
    #[error("Operator {operator} is not supported for property {property}. Supported operators: {}", format_operators(.supported))]
    UnsupportedOperator {
        operator: Operator,
        property: String,
        supported: Vec<Operator>,
    },

    /// Scalar operator given a null value
    #[error("Operator {operator} requires a non-null value")]
    MissingValue { operator: Operator },

    /// Scalar value not assignable to the declared type
    #[error("Value of type {actual} is not compatible with property type {expected} for operator {operator}")]
    TypeMismatch {
        operator: Operator,
        expected: ValueType,
        actual: String,
    },

    /// Multi-value operator given something other than a list
    #[error("Operator {operator} requires a list value, got {actual}")]
    NotAList { operator: Operator, actual: String },

    /// Multi-value operator given an empty list
    #[error("Operator {operator} requires a non-empty list")]
    EmptyList { operator: Operator },

    /// Range operator given the wrong number of bounds
    #[error("Operator {operator} requires exactly 2 values for range, got {actual}")]
    RangeArity { operator: Operator, actual: usize },

    /// List element not assignable to the declared type
    #[error("List element at index {index} of type {actual} is not compatible with property type {expected} for operator {operator}")]
    ElementTypeMismatch {
        operator: Operator,
        expected: ValueType,
        index: usize,
        actual: String,
    },

    /// Operator token matched neither a symbol nor a code
    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    /// Property name not present in the registry
    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    /// Property declared without any operator
    #[error("Property '{0}' must support at least one operator")]
    EmptyOperatorSet(String),
}

/// Raised by a context lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// No condition registered under the key
    #[error("No condition found for filter key '{key}'")]
    MissingCondition { key: String },
}

fn format_operators(ops: &[Operator]) -> String {
    let codes: Vec<&str> = ops.iter().map(|op| op.code()).collect();
    format!("[{}]", codes.join(", "))
}

pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operator_message() {
        let err = ValidationError::UnsupportedOperator {
            operator: Operator::Like,
            property: "AGE".to_string(),
            supported: vec![Operator::Equals, Operator::GreaterThan],
        };
        let msg = err.to_string();
        assert!(msg.contains("MATCHES"));
        assert!(msg.contains("AGE"));
        assert!(msg.contains("[EQ, GT]"));
    }

    #[test]
    fn test_range_arity_message() {
        let err = ValidationError::RangeArity {
            operator: Operator::Between,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Operator RANGE requires exactly 2 values for range, got 1"
        );
    }

    #[test]
    fn test_missing_condition_names_key() {
        let err = ContextError::MissingCondition {
            key: "f2".to_string(),
        };
        assert!(err.to_string().contains("'f2'"));
    }
}
