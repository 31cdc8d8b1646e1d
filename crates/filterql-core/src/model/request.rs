//! Filter requests
//!
//! [`FilterRequest`] is the typed form handed to the resolver.
//! [`RawFilterRequest`] is the wire form:
//!
//! ```json
//! {
//!   "filters": {
//!     "f1": { "ref": "name", "operator": "LIKE", "value": "John%" },
//!     "f2": { "ref": "age", "operator": "GT", "value": 18 }
//!   },
//!   "combineWith": "f1 & f2"
//! }
//! ```

use super::definition::FilterDefinition;
use crate::error::{Result, ValidationError};
use crate::types::Value;
use crate::validation::{Operator, Property, PropertyRef, PropertyRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named filter definitions plus the expression combining them
///
/// Names referenced by `combine_with` are only checked against `filters`
/// when the expression is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRequest<P> {
    filters: HashMap<String, FilterDefinition<P>>,
    combine_with: String,
}

impl<P: PropertyRef> FilterRequest<P> {
    /// Create a request from prepared filters
    pub fn new(filters: HashMap<String, FilterDefinition<P>>, combine_with: impl Into<String>) -> Self {
        Self {
            filters,
            combine_with: combine_with.into(),
        }
    }

    /// Start a request with no filters
    pub fn builder(combine_with: impl Into<String>) -> Self {
        Self::new(HashMap::new(), combine_with)
    }

    /// Add a filter, replacing any filter with the same name
    pub fn with_filter(mut self, name: impl Into<String>, definition: FilterDefinition<P>) -> Self {
        self.filters.insert(name.into(), definition);
        self
    }

    pub fn filters(&self) -> &HashMap<String, FilterDefinition<P>> {
        &self.filters
    }

    pub fn combine_with(&self) -> &str {
        &self.combine_with
    }

    /// Filter names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Wire form of a single filter definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFilterDefinition {
    /// Property name, resolved through a [`PropertyRegistry`]
    #[serde(rename = "ref")]
    pub property: String,
    /// Operator symbol or code
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

/// Wire form of a filter request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterRequest {
    #[serde(default)]
    pub filters: HashMap<String, RawFilterDefinition>,
    /// Absent is treated like an empty expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combine_with: Option<String>,
}

impl RawFilterRequest {
    /// Parse the wire form from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Resolve property names and operator tokens into a typed request.
    ///
    /// Values are not validated here; that happens when the definitions are
    /// added to a context.
    pub fn resolve(&self, registry: &PropertyRegistry) -> Result<FilterRequest<Property>> {
        let mut filters = HashMap::with_capacity(self.filters.len());
        for (name, raw) in &self.filters {
            let property = registry.resolve(&raw.property)?.clone();
            let operator = Operator::lookup(&raw.operator)
                .ok_or_else(|| ValidationError::UnknownOperator(raw.operator.clone()))?;
            filters.insert(
                name.clone(),
                FilterDefinition::new(property, operator, raw.value.clone()),
            );
        }
        Ok(FilterRequest::new(
            filters,
            self.combine_with.clone().unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueType;
    use crate::validation::{FOR_NUMBER, FOR_TEXT};

    fn registry() -> PropertyRegistry {
        PropertyRegistry::new()
            .with(Property::new("name", ValueType::Text, FOR_TEXT).unwrap())
            .with(Property::new("age", ValueType::Integer, FOR_NUMBER).unwrap())
    }

    #[test]
    fn test_resolve_wire_request() {
        let raw = RawFilterRequest::from_json(
            r#"{
                "filters": {
                    "f1": {"ref": "name", "operator": "LIKE", "value": "John%"},
                    "f2": {"ref": "age", "operator": ">", "value": 18},
                    "f3": {"ref": "age", "operator": "is_null"}
                },
                "combineWith": "(f1 & f2) | f3"
            }"#,
        )
        .unwrap();

        let request = raw.resolve(&registry()).unwrap();
        assert_eq!(request.combine_with(), "(f1 & f2) | f3");
        assert_eq!(request.names(), vec!["f1", "f2", "f3"]);

        let f2 = &request.filters()["f2"];
        assert_eq!(f2.property().name(), "age");
        assert_eq!(f2.operator(), Operator::GreaterThan);
        assert_eq!(f2.value(), &Value::Integer(18));

        assert_eq!(request.filters()["f3"].value(), &Value::Null);
    }

    #[test]
    fn test_missing_combine_with_becomes_empty() {
        let raw = RawFilterRequest::from_json(r#"{"filters": {}}"#).unwrap();
        assert_eq!(raw.combine_with, None);
        assert_eq!(raw.resolve(&registry()).unwrap().combine_with(), "");
    }

    #[test]
    fn test_unknown_property() {
        let raw = RawFilterRequest::from_json(
            r#"{"filters": {"f1": {"ref": "email", "operator": "=", "value": "a"}}, "combineWith": "f1"}"#,
        )
        .unwrap();
        assert_eq!(
            raw.resolve(&registry()).unwrap_err(),
            ValidationError::UnknownProperty("email".to_string())
        );
    }

    #[test]
    fn test_unknown_operator() {
        let raw = RawFilterRequest::from_json(
            r#"{"filters": {"f1": {"ref": "name", "operator": "CONTAINS", "value": "a"}}, "combineWith": "f1"}"#,
        )
        .unwrap();
        assert_eq!(
            raw.resolve(&registry()).unwrap_err(),
            ValidationError::UnknownOperator("CONTAINS".to_string())
        );
    }

    #[test]
    fn test_typed_builder() {
        let name = Property::new("name", ValueType::Text, FOR_TEXT).unwrap();
        let request = FilterRequest::builder("a | b")
            .with_filter("a", FilterDefinition::new(name.clone(), Operator::Equals, "x"))
            .with_filter("b", FilterDefinition::new(name, Operator::Equals, "y"));
        assert_eq!(request.filters().len(), 2);
        assert_eq!(request.combine_with(), "a | b");
    }
}
