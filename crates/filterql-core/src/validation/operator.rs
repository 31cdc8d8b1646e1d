//! Operator catalog for filter definitions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Comparison operators a filter definition may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    // Scalar comparison operators
    /// Equal (=)
    Equals,
    /// Not equal (!=)
    NotEquals,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,

    // Pattern operators
    /// Pattern match (LIKE)
    Like,
    /// Negated pattern match (NOT LIKE)
    NotLike,

    // Set operators
    /// Membership (IN)
    In,
    /// Negated membership (NOT IN)
    NotIn,

    // Null checks
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,

    // Range operators
    /// Inclusive range (BETWEEN)
    Between,
    /// Negated range (NOT BETWEEN)
    NotBetween,
}

impl Operator {
    /// Every operator in catalog order
    pub const ALL: [Operator; 14] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::Like,
        Operator::NotLike,
        Operator::In,
        Operator::NotIn,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::Between,
        Operator::NotBetween,
    ];

    /// Display symbol, e.g. `>=` or `NOT BETWEEN`
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT BETWEEN",
        }
    }

    /// Short code, e.g. `GTE` or `NOT_RANGE`
    pub fn code(&self) -> &'static str {
        match self {
            Operator::Equals => "EQ",
            Operator::NotEquals => "NE",
            Operator::GreaterThan => "GT",
            Operator::GreaterThanOrEqual => "GTE",
            Operator::LessThan => "LT",
            Operator::LessThanOrEqual => "LTE",
            Operator::Like => "MATCHES",
            Operator::NotLike => "NOT_MATCHES",
            Operator::In => "IN",
            Operator::NotIn => "NOT_IN",
            Operator::IsNull => "IS_NULL",
            Operator::IsNotNull => "NOT_NULL",
            Operator::Between => "RANGE",
            Operator::NotBetween => "NOT_RANGE",
        }
    }

    /// Look up an operator by symbol or code, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for unknown tokens so the caller can report the failure
    /// with its own context.
    pub fn lookup(token: &str) -> Option<Operator> {
        let token = token.trim();
        Self::ALL.into_iter().find(|op| {
            op.symbol().eq_ignore_ascii_case(token) || op.code().eq_ignore_ascii_case(token)
        })
    }

    /// Returns false only for the null checks
    pub fn requires_value(&self) -> bool {
        !matches!(self, Operator::IsNull | Operator::IsNotNull)
    }

    /// Returns true for set and range operators
    pub fn supports_multiple_values(&self) -> bool {
        matches!(
            self,
            Operator::In | Operator::NotIn | Operator::Between | Operator::NotBetween
        )
    }

    /// Returns true for BETWEEN and NOT BETWEEN
    pub fn is_range(&self) -> bool {
        matches!(self, Operator::Between | Operator::NotBetween)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Operator::lookup(&token)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown operator '{}'", token)))
    }
}
