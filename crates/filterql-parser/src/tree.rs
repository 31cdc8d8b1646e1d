//! Filter tree
//!
//! The parsed form of a combination expression. Leaves are filter names;
//! inner nodes are `NOT`, `AND` and `OR`. A tree holds no state, so one parsed
//! expression can be evaluated against any number of contexts, from any
//! number of threads.

use filterql_core::{Condition, Context, ContextError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean expression over filter names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterTree {
    /// Reference to a named filter
    Identifier(String),
    /// Negation
    Not(Box<FilterTree>),
    /// Conjunction
    And(Box<FilterTree>, Box<FilterTree>),
    /// Disjunction
    Or(Box<FilterTree>, Box<FilterTree>),
}

/// Pending step of the evaluation walk
enum Step<'a> {
    Visit(&'a FilterTree),
    Negate,
    Conjoin,
    Disjoin,
}

impl FilterTree {
    pub fn identifier(name: impl Into<String>) -> Self {
        FilterTree::Identifier(name.into())
    }

    pub fn not(child: FilterTree) -> Self {
        FilterTree::Not(Box::new(child))
    }

    pub fn and(left: FilterTree, right: FilterTree) -> Self {
        FilterTree::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: FilterTree, right: FilterTree) -> Self {
        FilterTree::Or(Box::new(left), Box::new(right))
    }

    /// Combine the conditions registered in `context` following this tree.
    ///
    /// Leaves are resolved left to right and both sides of every binary node
    /// are always resolved. Fails with `MissingCondition` for the first name
    /// the context does not know.
    pub fn generate<X: Context>(&self, context: &X) -> Result<X::Condition, ContextError> {
        let mut steps = vec![Step::Visit(self)];
        let mut operands: Vec<X::Condition> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(FilterTree::Identifier(name)) => {
                    operands.push(context.get_condition(name)?);
                }
                Step::Visit(FilterTree::Not(child)) => {
                    steps.push(Step::Negate);
                    steps.push(Step::Visit(child));
                }
                Step::Visit(FilterTree::And(left, right)) => {
                    steps.push(Step::Conjoin);
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Visit(FilterTree::Or(left, right)) => {
                    steps.push(Step::Disjoin);
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Negate => {
                    let operand = pop_operand(&mut operands);
                    operands.push(operand.not());
                }
                Step::Conjoin => {
                    let right = pop_operand(&mut operands);
                    let left = pop_operand(&mut operands);
                    operands.push(left.and(&right));
                }
                Step::Disjoin => {
                    let right = pop_operand(&mut operands);
                    let left = pop_operand(&mut operands);
                    operands.push(left.or(&right));
                }
            }
        }

        Ok(pop_operand(&mut operands))
    }

    /// Filter names referenced by this tree, in order of first appearance
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                FilterTree::Identifier(name) => {
                    if !names.contains(&name.as_str()) {
                        names.push(name);
                    }
                }
                FilterTree::Not(child) => pending.push(child),
                FilterTree::And(left, right) | FilterTree::Or(left, right) => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
        names
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                FilterTree::Identifier(_) => {}
                FilterTree::Not(child) => pending.push(child),
                FilterTree::And(left, right) | FilterTree::Or(left, right) => {
                    pending.push(left);
                    pending.push(right);
                }
            }
        }
        count
    }
}

// The walk pushes exactly one operand per visited leaf and every combinator
// step is scheduled after the operands it consumes.
fn pop_operand<C>(operands: &mut Vec<C>) -> C {
    match operands.pop() {
        Some(operand) => operand,
        None => unreachable!("filter tree walk is balanced"),
    }
}

/// Pending piece of the rendering walk
enum Piece<'a> {
    Node(&'a FilterTree),
    Text(&'static str),
}

impl fmt::Display for FilterTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(FilterTree::Identifier(name)) => f.write_str(name)?,
                Piece::Node(FilterTree::Not(child)) => {
                    f.write_str("NOT(")?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(child));
                }
                Piece::Node(FilterTree::And(left, right)) => {
                    f.write_str("(")?;
                    pieces.extend([
                        Piece::Text(")"),
                        Piece::Node(right),
                        Piece::Text(" AND "),
                        Piece::Node(left),
                    ]);
                }
                Piece::Node(FilterTree::Or(left, right)) => {
                    f.write_str("(")?;
                    pieces.extend([
                        Piece::Text(")"),
                        Piece::Node(right),
                        Piece::Text(" OR "),
                        Piece::Node(left),
                    ]);
                }
            }
        }
        Ok(())
    }
}
