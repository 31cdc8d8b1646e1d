//! Property reference contract
//!
//! A property reference describes one logical, filterable property: the
//! scalar type its values must have and the operators it accepts. Integrators
//! usually implement [`PropertyRef`] on a fieldless enum, one variant per
//! column. [`Property`] is a ready-made implementation for properties that are
//! only known at runtime.

use super::operator::Operator;
use crate::error::{Result, ValidationError};
use crate::types::{Value, ValueType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capability of a filterable property
pub trait PropertyRef {
    /// Name used in error messages
    fn name(&self) -> &str;

    /// Declared scalar type
    fn value_type(&self) -> ValueType;

    /// Operators this property accepts. Must not be empty.
    fn supported_operators(&self) -> &[Operator];

    /// Set-membership check on the supported operators
    fn supports_operator(&self, operator: Operator) -> bool {
        self.supported_operators().contains(&operator)
    }

    /// True if every given operator is supported
    fn supports_all_operators(&self, operators: &[Operator]) -> bool {
        operators.iter().all(|op| self.supports_operator(*op))
    }

    /// The given operators this property does not support, in input order
    fn unsupported_operators(&self, operators: &[Operator]) -> Vec<Operator> {
        operators
            .iter()
            .copied()
            .filter(|op| !self.supports_operator(*op))
            .collect()
    }

    /// Fail if the operator is not supported
    fn validate_operator(&self, operator: Operator) -> Result<()> {
        if self.supports_operator(operator) {
            return Ok(());
        }
        Err(ValidationError::UnsupportedOperator {
            operator,
            property: self.name().to_string(),
            supported: self.supported_operators().to_vec(),
        })
    }

    /// Validate the operator, then the value's shape and type for that operator
    fn validate_operator_for_value(&self, operator: Operator, value: &Value) -> Result<()> {
        self.validate_operator(operator)?;
        check_value(self.value_type(), operator, value)
    }

    fn is_numeric(&self) -> bool {
        self.value_type().is_numeric()
    }

    fn is_textual(&self) -> bool {
        self.value_type().is_textual()
    }
}

/// Operator-specific value rules, independent of the operator set
fn check_value(expected: ValueType, operator: Operator, value: &Value) -> Result<()> {
    match operator {
        Operator::Equals
        | Operator::NotEquals
        | Operator::GreaterThan
        | Operator::GreaterThanOrEqual
        | Operator::LessThan
        | Operator::LessThanOrEqual
        | Operator::Like
        | Operator::NotLike => check_single(expected, operator, value),
        // Any value is tolerated alongside a null check
        Operator::IsNull | Operator::IsNotNull => Ok(()),
        Operator::In | Operator::NotIn => check_list(expected, operator, value, false),
        Operator::Between | Operator::NotBetween => check_list(expected, operator, value, true),
    }
}

fn check_single(expected: ValueType, operator: Operator, value: &Value) -> Result<()> {
    if value.is_null() {
        return Err(ValidationError::MissingValue { operator });
    }
    if !expected.accepts(value) {
        return Err(ValidationError::TypeMismatch {
            operator,
            expected,
            actual: value.type_name().to_string(),
        });
    }
    Ok(())
}

fn check_list(expected: ValueType, operator: Operator, value: &Value, range: bool) -> Result<()> {
    let items = match value {
        Value::Null => return Err(ValidationError::MissingValue { operator }),
        Value::List(items) => items,
        other => {
            return Err(ValidationError::NotAList {
                operator,
                actual: other.type_name().to_string(),
            })
        }
    };

    if items.is_empty() {
        return Err(ValidationError::EmptyList { operator });
    }
    if range && items.len() != 2 {
        return Err(ValidationError::RangeArity {
            operator,
            actual: items.len(),
        });
    }

    for (index, item) in items.iter().enumerate() {
        // Null elements are skipped for set operators; range bounds must be present
        if item.is_null() && !range {
            continue;
        }
        if !expected.accepts(item) {
            return Err(ValidationError::ElementTypeMismatch {
                operator,
                expected,
                index,
                actual: item.type_name().to_string(),
            });
        }
    }
    Ok(())
}

/// A property defined at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PropertySpec")]
pub struct Property {
    name: String,
    #[serde(rename = "type")]
    value_type: ValueType,
    operators: Vec<Operator>,
}

/// Unchecked serde form of [`Property`]
#[derive(Debug, Deserialize)]
struct PropertySpec {
    name: String,
    #[serde(rename = "type")]
    value_type: ValueType,
    operators: Vec<Operator>,
}

impl TryFrom<PropertySpec> for Property {
    type Error = ValidationError;

    fn try_from(spec: PropertySpec) -> Result<Self> {
        Property::new(spec.name, spec.value_type, spec.operators)
    }
}

impl Property {
    /// Create a property; fails if `operators` is empty.
    ///
    /// Duplicate operators are collapsed and the set is kept in catalog order.
    pub fn new(
        name: impl Into<String>,
        value_type: ValueType,
        operators: impl IntoIterator<Item = Operator>,
    ) -> Result<Self> {
        let name = name.into();
        let operators: Vec<Operator> = operators
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if operators.is_empty() {
            return Err(ValidationError::EmptyOperatorSet(name));
        }
        Ok(Self {
            name,
            value_type,
            operators,
        })
    }
}

impl PropertyRef for Property {
    fn name(&self) -> &str {
        &self.name
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn supported_operators(&self) -> &[Operator] {
        &self.operators
    }
}

impl<P: PropertyRef + ?Sized> PropertyRef for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value_type(&self) -> ValueType {
        (**self).value_type()
    }

    fn supported_operators(&self) -> &[Operator] {
        (**self).supported_operators()
    }
}
