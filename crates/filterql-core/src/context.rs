//! Filter context
//!
//! A context maps filter names to conditions. [`FilterContext`] is the
//! registry populated for one request: each definition is validated against
//! its property contract, materialized through a [`ConditionBuilder`] and
//! stored under its name.
//!
//! A context is single-writer. Build one per resolution, or guard it with a
//! lock if it must be shared and warmed incrementally.

use crate::condition::{Condition, ConditionBuilder};
use crate::error::{ContextError, ValidationError};
use crate::model::FilterDefinition;
use crate::validation::PropertyRef;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Lookup of conditions by filter name
pub trait Context {
    type Condition: Condition;

    /// Get the condition registered under `key`
    fn get_condition(&self, key: &str) -> Result<Self::Condition, ContextError>;
}

/// Registry of conditions built from filter definitions
pub struct FilterContext<P, B>
where
    P: PropertyRef,
    B: ConditionBuilder<P>,
{
    builder: B,
    conditions: HashMap<String, B::Condition>,
    _property: PhantomData<fn(&P)>,
}

impl<P, B> FilterContext<P, B>
where
    P: PropertyRef,
    B: ConditionBuilder<P>,
{
    /// Create an empty context backed by `builder`
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            conditions: HashMap::new(),
            _property: PhantomData,
        }
    }

    /// Validate `definition`, build its condition and store it under `name`.
    ///
    /// An existing entry with the same name is replaced. On failure nothing
    /// is built and prior entries are left as they were.
    pub fn add_condition(
        &mut self,
        name: impl Into<String>,
        definition: &FilterDefinition<P>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        definition.validate()?;

        let condition = self.builder.build(
            definition.property(),
            definition.operator(),
            definition.value(),
        );
        log::debug!(
            "Added condition '{}' ({} {})",
            name,
            definition.property().name(),
            definition.operator()
        );
        if self.conditions.insert(name.clone(), condition).is_some() {
            log::trace!("Replaced existing condition '{}'", name);
        }
        Ok(())
    }

    /// Borrow the condition registered under `key`
    pub fn condition(&self, key: &str) -> Option<&B::Condition> {
        self.conditions.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.conditions.contains_key(key)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.conditions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Remove and return the condition registered under `key`
    pub fn remove(&mut self, key: &str) -> Option<B::Condition> {
        self.conditions.remove(key)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn clear(&mut self) {
        self.conditions.clear();
    }

    /// The builder this context materializes conditions with
    pub fn builder(&self) -> &B {
        &self.builder
    }
}

impl<P, B> Context for FilterContext<P, B>
where
    P: PropertyRef,
    B: ConditionBuilder<P>,
{
    type Condition = B::Condition;

    fn get_condition(&self, key: &str) -> Result<B::Condition, ContextError> {
        self.conditions
            .get(key)
            .cloned()
            .ok_or_else(|| ContextError::MissingCondition {
                key: key.to_string(),
            })
    }
}

impl<P, B> std::fmt::Debug for FilterContext<P, B>
where
    P: PropertyRef,
    B: ConditionBuilder<P>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterContext")
            .field("conditions", &self.names())
            .finish()
    }
}
