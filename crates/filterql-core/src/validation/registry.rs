//! Name to property lookup for the wire form of a request

use super::property::{Property, PropertyRef};
use crate::error::{Result, ValidationError};
use std::collections::HashMap;

/// Registry of runtime properties keyed by name
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    properties: HashMap<String, Property>,
}

impl PropertyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a property under its own name, replacing any previous entry
    pub fn register(&mut self, property: Property) -> Option<Property> {
        log::debug!("Registering property '{}'", property.name());
        self.properties.insert(property.name().to_string(), property)
    }

    /// Builder-style registration
    pub fn with(mut self, property: Property) -> Self {
        self.register(property);
        self
    }

    /// Get a property by name
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Get a property by name or fail with `UnknownProperty`
    pub fn resolve(&self, name: &str) -> Result<&Property> {
        self.get(name)
            .ok_or_else(|| ValidationError::UnknownProperty(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }
}

impl FromIterator<Property> for PropertyRegistry {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut registry = Self::new();
        for property in iter {
            registry.register(property);
        }
        registry
    }
}
