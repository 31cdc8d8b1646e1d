//! Hand-off of the combined condition to a query technology

use filterql_core::Condition;

/// Runs a combined condition against a data source
///
/// Closures `Fn(C) -> R` implement this trait, so a one-off executor can be
/// written inline.
pub trait FilterExecutor<C: Condition> {
    type Output;

    fn execute(&self, condition: C) -> Self::Output;
}

impl<C, R, F> FilterExecutor<C> for F
where
    C: Condition,
    F: Fn(C) -> R,
{
    type Output = R;

    fn execute(&self, condition: C) -> R {
        self(condition)
    }
}
