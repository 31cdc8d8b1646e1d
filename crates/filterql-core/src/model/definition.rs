//! A single named filter: property, operator, value

use crate::error::Result;
use crate::types::Value;
use crate::validation::{Operator, PropertyRef};
use std::fmt;

/// Pairing of a property reference, an operator and a value
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDefinition<P> {
    property: P,
    operator: Operator,
    value: Value,
}

impl<P: PropertyRef> FilterDefinition<P> {
    /// Create a definition without checking it.
    ///
    /// The definition is validated when it is added to a context.
    pub fn new(property: P, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            property,
            operator,
            value: value.into(),
        }
    }

    /// Create a definition and validate it immediately
    pub fn validated(property: P, operator: Operator, value: impl Into<Value>) -> Result<Self> {
        let definition = Self::new(property, operator, value);
        definition.validate()?;
        Ok(definition)
    }

    /// Check the operator and value against the property contract
    pub fn validate(&self) -> Result<()> {
        self.property
            .validate_operator_for_value(self.operator, &self.value)
    }

    pub fn property(&self) -> &P {
        &self.property
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl<P: PropertyRef> fmt::Display for FilterDefinition<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FilterDefinition{{ref={}, operator={}, value={}}}",
            self.property.name(),
            self.operator,
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::ValueType;
    use crate::validation::{Property, FOR_NUMBER, FOR_TEXT};

    fn age() -> Property {
        Property::new("age", ValueType::Integer, FOR_NUMBER).unwrap()
    }

    fn name() -> Property {
        Property::new("name", ValueType::Text, FOR_TEXT).unwrap()
    }

    #[test]
    fn test_between_needs_two_values() {
        let err = FilterDefinition::validated(age(), Operator::Between, vec![18]).unwrap_err();
        assert!(matches!(err, ValidationError::RangeArity { actual: 1, .. }));

        let ok = FilterDefinition::validated(age(), Operator::Between, vec![18, 65]).unwrap();
        assert_eq!(ok.value(), &Value::from(vec![18, 65]));
    }

    #[test]
    fn test_type_compatibility() {
        assert!(matches!(
            FilterDefinition::validated(name(), Operator::Equals, 42),
            Err(ValidationError::TypeMismatch { .. })
        ));
        assert!(FilterDefinition::validated(name(), Operator::Equals, "John").is_ok());
    }

    #[test]
    fn test_new_is_unchecked() {
        let definition = FilterDefinition::new(name(), Operator::GreaterThan, 1);
        assert!(matches!(
            definition.validate(),
            Err(ValidationError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn test_display() {
        let definition = FilterDefinition::new(name(), Operator::Like, "J%");
        assert_eq!(
            definition.to_string(),
            "FilterDefinition{ref=name, operator=MATCHES, value='J%'}"
        );
    }
}
