//! SDK error types

use filterql_core::{ContextError, ValidationError};
use filterql_parser::DslSyntaxError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Malformed combination expression
    #[error("Syntax error: {0}")]
    Syntax(#[from] DslSyntaxError),

    /// Filter definition rejected by its property contract
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Expression references an undefined filter
    #[error("Resolution error: {0}")]
    MissingCondition(#[from] ContextError),

    /// Filters defined but never referenced, under the `reject` policy
    #[error("Unused filters: {}", .0.join(", "))]
    UnusedFilters(Vec<String>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FilterError {
    /// True when the error was caused by the request rather than the setup
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FilterError::Config(_))
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use filterql_core::Operator;

    #[test]
    fn test_syntax_error_conversion() {
        let err: FilterError = DslSyntaxError::EmptyExpression.into();
        assert!(err.to_string().contains("Syntax error"));
        assert!(err.to_string().contains("cannot be null or empty"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: FilterError = ValidationError::EmptyList {
            operator: Operator::In,
        }
        .into();
        assert!(matches!(err, FilterError::Validation(_)));
        assert!(err.to_string().contains("non-empty list"));
    }

    #[test]
    fn test_missing_condition_conversion() {
        let err: FilterError = ContextError::MissingCondition {
            key: "f2".to_string(),
        }
        .into();
        assert!(err.to_string().contains("'f2'"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_unused_filters() {
        let err = FilterError::UnusedFilters(vec!["f3".to_string(), "f4".to_string()]);
        assert_eq!(err.to_string(), "Unused filters: f3, f4");
    }

    #[test]
    fn test_config_error() {
        let err = FilterError::Config("bad yaml".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_debug_format() {
        let err = FilterError::Config("test".to_string());
        assert!(format!("{:?}", err).contains("Config"));
    }
}
