//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use filterql_sdk::{
    Condition, Operator, Property, PropertyRef, PropertyRegistry, Value, ValueType,
};
use filterql_core::{FOR_NUMBER, FOR_TEXT};
use std::cell::RefCell;
use std::rc::Rc;

const TEXT_OPERATORS: &[Operator] = &FOR_TEXT;
const NUMBER_OPERATORS: &[Operator] = &FOR_NUMBER;

/// Filterable user columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserProperty {
    Name,
    Age,
}

impl PropertyRef for UserProperty {
    fn name(&self) -> &str {
        match self {
            UserProperty::Name => "name",
            UserProperty::Age => "age",
        }
    }

    fn value_type(&self) -> ValueType {
        match self {
            UserProperty::Name => ValueType::Text,
            UserProperty::Age => ValueType::Integer,
        }
    }

    fn supported_operators(&self) -> &[Operator] {
        match self {
            UserProperty::Name => TEXT_OPERATORS,
            UserProperty::Age => NUMBER_OPERATORS,
        }
    }
}

/// SQL-like condition text
#[derive(Debug, Clone, PartialEq)]
pub struct Sql(pub String);

impl Condition for Sql {
    fn and(&self, other: &Self) -> Self {
        Sql(format!("({} AND {})", self.0, other.0))
    }

    fn or(&self, other: &Self) -> Self {
        Sql(format!("({} OR {})", self.0, other.0))
    }

    fn not(&self) -> Self {
        Sql(format!("NOT ({})", self.0))
    }
}

/// Records every leaf the resolver asks for
#[derive(Debug, Default)]
pub struct CallLog {
    calls: RefCell<Vec<String>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a leaf and record it
    pub fn build<P: PropertyRef>(&self, property: &P, operator: Operator, value: &Value) -> Sql {
        let text = match operator {
            Operator::IsNull | Operator::IsNotNull => {
                format!("{} {}", property.name(), operator.symbol())
            }
            _ => format!("{} {} {}", property.name(), operator.symbol(), value),
        };
        self.calls.borrow_mut().push(text.clone());
        Sql(text)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

/// Registry with the runtime equivalents of [`UserProperty`]
pub fn user_registry() -> PropertyRegistry {
    PropertyRegistry::new()
        .with(Property::new("name", ValueType::Text, FOR_TEXT).expect("text operators"))
        .with(Property::new("age", ValueType::Integer, FOR_NUMBER).expect("number operators"))
}

/// Condition that appends every combinator call to a shared journal
#[derive(Debug, Clone)]
pub struct Recorded {
    pub label: String,
    journal: Rc<RefCell<Vec<String>>>,
}

impl Recorded {
    fn derive(&self, label: String) -> Self {
        self.journal.borrow_mut().push(label.clone());
        Recorded {
            label,
            journal: Rc::clone(&self.journal),
        }
    }
}

impl Condition for Recorded {
    fn and(&self, other: &Self) -> Self {
        self.derive(format!("{}.and({})", self.label, other.label))
    }

    fn or(&self, other: &Self) -> Self {
        self.derive(format!("{}.or({})", self.label, other.label))
    }

    fn not(&self) -> Self {
        self.derive(format!("{}.not()", self.label))
    }
}

/// Shared journal of builder and combinator calls
#[derive(Debug, Default, Clone)]
pub struct Journal {
    entries: Rc<RefCell<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a leaf labelled with the property name and record the call
    pub fn build<P: PropertyRef>(&self, property: &P, _operator: Operator, _value: &Value) -> Recorded {
        self.entries
            .borrow_mut()
            .push(format!("build {}", property.name()));
        Recorded {
            label: property.name().to_string(),
            journal: Rc::clone(&self.entries),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}
