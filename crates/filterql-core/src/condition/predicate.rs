//! Technology-neutral condition tree

use super::{Condition, ConditionBuilder};
use crate::types::Value;
use crate::validation::{Operator, PropertyRef};
use serde::Serialize;
use std::fmt;

/// A portable boolean predicate
///
/// Nested conjunctions and disjunctions are flattened as they are built, so
/// `(a AND b) AND c` becomes a single `All` group of three items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Leaf comparison
    Compare {
        property: String,
        operator: Operator,
        value: Value,
    },
    /// All items must hold (AND)
    All(Vec<Predicate>),
    /// At least one item must hold (OR)
    Any(Vec<Predicate>),
    /// Negation
    Not(Box<Predicate>),
}

impl Predicate {
    /// Create a leaf comparison
    pub fn compare(property: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Predicate::Compare {
            property: property.into(),
            operator,
            value: value.into(),
        }
    }

    /// Number of leaf comparisons in this predicate
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Predicate::Compare { .. } => count += 1,
                Predicate::All(items) | Predicate::Any(items) => pending.extend(items),
                Predicate::Not(inner) => pending.push(inner),
            }
        }
        count
    }

    fn all_items(&self) -> Vec<Predicate> {
        match self {
            Predicate::All(items) => items.clone(),
            other => vec![other.clone()],
        }
    }

    fn any_items(&self) -> Vec<Predicate> {
        match self {
            Predicate::Any(items) => items.clone(),
            other => vec![other.clone()],
        }
    }
}

impl Condition for Predicate {
    fn and(&self, other: &Self) -> Self {
        let mut items = self.all_items();
        items.extend(other.all_items());
        Predicate::All(items)
    }

    fn or(&self, other: &Self) -> Self {
        let mut items = self.any_items();
        items.extend(other.any_items());
        Predicate::Any(items)
    }

    fn not(&self) -> Self {
        Predicate::Not(Box::new(self.clone()))
    }
}

/// Pending piece of the rendering walk
enum Piece<'a> {
    Node(&'a Predicate),
    Text(&'static str),
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Predicate::Compare {
                    property,
                    operator,
                    value,
                }) => write_compare(f, property, *operator, value)?,
                Piece::Node(Predicate::All(items)) => open_group(f, &mut pieces, items, " AND ")?,
                Piece::Node(Predicate::Any(items)) => open_group(f, &mut pieces, items, " OR ")?,
                Piece::Node(Predicate::Not(inner)) => {
                    f.write_str("NOT (")?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(inner));
                }
            }
        }
        Ok(())
    }
}

fn write_compare(
    f: &mut fmt::Formatter<'_>,
    property: &str,
    operator: Operator,
    value: &Value,
) -> fmt::Result {
    match (operator, value.as_list()) {
        (Operator::IsNull | Operator::IsNotNull, _) => {
            write!(f, "{} {}", property, operator.symbol())
        }
        (Operator::Between | Operator::NotBetween, Some([low, high])) => {
            write!(f, "{} {} {} AND {}", property, operator.symbol(), low, high)
        }
        _ => write!(f, "{} {} {}", property, operator.symbol(), value),
    }
}

/// Write the opening parenthesis and schedule the items, last item first
fn open_group<'a>(
    f: &mut fmt::Formatter<'_>,
    pieces: &mut Vec<Piece<'a>>,
    items: &'a [Predicate],
    separator: &'static str,
) -> fmt::Result {
    f.write_str("(")?;
    pieces.push(Piece::Text(")"));
    for (i, item) in items.iter().enumerate().rev() {
        pieces.push(Piece::Node(item));
        if i > 0 {
            pieces.push(Piece::Text(separator));
        }
    }
    Ok(())
}

/// Builds [`Predicate`] leaves for any property type
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateBuilder;

impl<P: PropertyRef> ConditionBuilder<P> for PredicateBuilder {
    type Condition = Predicate;

    fn build(&self, property: &P, operator: Operator, value: &Value) -> Predicate {
        Predicate::Compare {
            property: property.name().to_string(),
            operator,
            value: value.clone(),
        }
    }
}
