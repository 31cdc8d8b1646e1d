//! Condition composition
//!
//! A [`Condition`] is an opaque boolean fragment produced by a query
//! technology (SQL text, ORM criteria, a search DSL...). The core never looks
//! inside one; it only combines conditions with `and`, `or` and `not`.
//!
//! A [`ConditionBuilder`] turns a validated `(property, operator, value)`
//! triple into a leaf condition. Conditions from different builders are
//! different types, so they cannot be mixed by accident.
//!
//! [`Predicate`] is a technology-neutral implementation that adapters can
//! translate from.

mod predicate;

pub use predicate::{Predicate, PredicateBuilder};

use crate::types::Value;
use crate::validation::{Operator, PropertyRef};

/// Composable boolean condition
///
/// Every combinator is pure: it returns a new condition and leaves both
/// operands untouched.
pub trait Condition: Clone {
    /// `self AND other`
    fn and(&self, other: &Self) -> Self;

    /// `self OR other`
    fn or(&self, other: &Self) -> Self;

    /// `NOT self`
    fn not(&self) -> Self;
}

/// Materializes leaf conditions for one query technology
pub trait ConditionBuilder<P: PropertyRef> {
    type Condition: Condition;

    /// Build a condition from an already validated triple
    fn build(&self, property: &P, operator: Operator, value: &Value) -> Self::Condition;
}

impl<P, C, F> ConditionBuilder<P> for F
where
    P: PropertyRef,
    C: Condition,
    F: Fn(&P, Operator, &Value) -> C,
{
    type Condition = C;

    fn build(&self, property: &P, operator: Operator, value: &Value) -> C {
        self(property, operator, value)
    }
}
