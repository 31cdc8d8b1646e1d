//! Parser error types

use thiserror::Error;

/// Malformed combination expression
///
/// Always a client input error. Positions are 0-based character offsets into
/// the original expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DslSyntaxError {
    /// Empty or whitespace-only expression
    #[error("DSL expression cannot be null or empty")]
    EmptyExpression,

    /// Character outside the DSL alphabet
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Unbalanced parenthesis
    #[error("Mismatched parentheses: unmatched '{paren}' at position {position}")]
    MismatchedParentheses { paren: char, position: usize },

    /// Token not allowed after its predecessor
    #[error("Invalid syntax: {message} at position {position}")]
    UnexpectedToken { message: String, position: usize },

    /// Operator without enough operands
    #[error("Invalid expression: {operator} operator requires {expected} operand(s) at position {position}")]
    MissingOperand {
        operator: &'static str,
        expected: usize,
        position: usize,
    },

    /// Postfix evaluation left other than one tree
    #[error("Invalid expression: malformed syntax - expected single result but got {0}")]
    Malformed(usize),

    /// Expression longer than the configured limit
    #[error("DSL expression is {length} characters long, maximum is {max}")]
    ExpressionTooLong { length: usize, max: usize },
}

impl DslSyntaxError {
    /// Character offset the error points at, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            DslSyntaxError::InvalidCharacter { position, .. }
            | DslSyntaxError::MismatchedParentheses { position, .. }
            | DslSyntaxError::UnexpectedToken { position, .. }
            | DslSyntaxError::MissingOperand { position, .. } => Some(*position),
            DslSyntaxError::EmptyExpression
            | DslSyntaxError::Malformed(_)
            | DslSyntaxError::ExpressionTooLong { .. } => None,
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, DslSyntaxError>;
