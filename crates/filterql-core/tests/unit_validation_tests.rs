//! Unit tests for the property contract, filter definitions and contexts
//!
//! Uses an enum-based property reference the way integrators declare their
//! filterable columns.

use filterql_core::*;

// =============================================================================
// Product properties
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductProperty {
    Title,
    Price,
    InStock,
    Sku,
}

const TITLE_OPERATORS: &[Operator] = &FOR_TEXT;
const PRICE_OPERATORS: &[Operator] = &FOR_NUMBER;
const FLAG_OPERATORS: &[Operator] = &[Operator::Equals, Operator::IsNull];
const SKU_OPERATORS: &[Operator] = &[Operator::Equals, Operator::In];

impl PropertyRef for ProductProperty {
    fn name(&self) -> &str {
        match self {
            ProductProperty::Title => "title",
            ProductProperty::Price => "price",
            ProductProperty::InStock => "in_stock",
            ProductProperty::Sku => "sku",
        }
    }

    fn value_type(&self) -> ValueType {
        match self {
            ProductProperty::Title => ValueType::Text,
            ProductProperty::Price => ValueType::Float,
            ProductProperty::InStock => ValueType::Boolean,
            ProductProperty::Sku => ValueType::Any,
        }
    }

    fn supported_operators(&self) -> &[Operator] {
        match self {
            ProductProperty::Title => TITLE_OPERATORS,
            ProductProperty::Price => PRICE_OPERATORS,
            ProductProperty::InStock => FLAG_OPERATORS,
            ProductProperty::Sku => SKU_OPERATORS,
        }
    }
}

/// SQL-like text condition
#[derive(Debug, Clone, PartialEq)]
struct Where(String);

impl Condition for Where {
    fn and(&self, other: &Self) -> Self {
        Where(format!("({} AND {})", self.0, other.0))
    }

    fn or(&self, other: &Self) -> Self {
        Where(format!("({} OR {})", self.0, other.0))
    }

    fn not(&self) -> Self {
        Where(format!("NOT {}", self.0))
    }
}

fn where_builder(property: &ProductProperty, operator: Operator, value: &Value) -> Where {
    Where(format!("{} {} {}", property.name(), operator.code(), value))
}

// =============================================================================
// Property Contract Tests
// =============================================================================

#[test]
fn test_enum_property_contract() {
    assert!(ProductProperty::Title.supports_operator(Operator::Like));
    assert!(!ProductProperty::Title.supports_operator(Operator::GreaterThan));
    assert!(ProductProperty::Price.is_numeric());
    assert!(ProductProperty::Title.is_textual());
    assert!(!ProductProperty::InStock.is_numeric());

    assert_eq!(
        ProductProperty::InStock.unsupported_operators(&[Operator::Equals, Operator::Like, Operator::In]),
        vec![Operator::Like, Operator::In]
    );
}

#[test]
fn test_unsupported_operator_lists_supported_set() {
    let err = ProductProperty::InStock
        .validate_operator(Operator::GreaterThan)
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnsupportedOperator {
            operator: Operator::GreaterThan,
            property: "in_stock".to_string(),
            supported: vec![Operator::Equals, Operator::IsNull],
        }
    );
    assert!(err.to_string().contains("[EQ, IS_NULL]"));
}

#[test]
fn test_float_property_accepts_integers() {
    assert!(ProductProperty::Price
        .validate_operator_for_value(Operator::GreaterThan, &Value::from(10))
        .is_ok());
    assert!(ProductProperty::Price
        .validate_operator_for_value(Operator::Between, &Value::from(vec![Value::from(1), Value::from(9.5)]))
        .is_ok());
    assert!(matches!(
        ProductProperty::Price.validate_operator_for_value(Operator::Equals, &Value::from("10")),
        Err(ValidationError::TypeMismatch { .. })
    ));
}

#[test]
fn test_any_property_accepts_mixed_scalars() {
    let value = Value::from(vec![Value::from("A-1"), Value::from(42), Value::Null]);
    assert!(ProductProperty::Sku
        .validate_operator_for_value(Operator::In, &value)
        .is_ok());
    assert!(matches!(
        ProductProperty::Sku.validate_operator_for_value(Operator::Equals, &Value::Null),
        Err(ValidationError::MissingValue { .. })
    ));
}

#[test]
fn test_list_shape_errors() {
    let price = ProductProperty::Price;
    assert!(matches!(
        price.validate_operator_for_value(Operator::In, &Value::from(5)),
        Err(ValidationError::NotAList { .. })
    ));
    assert!(matches!(
        price.validate_operator_for_value(Operator::NotIn, &Value::List(vec![])),
        Err(ValidationError::EmptyList { .. })
    ));
    assert!(matches!(
        price.validate_operator_for_value(Operator::NotBetween, &Value::from(vec![1, 2, 3])),
        Err(ValidationError::RangeArity { actual: 3, .. })
    ));
    assert!(matches!(
        price.validate_operator_for_value(Operator::Between, &Value::from(vec![Value::from(1), Value::Null])),
        Err(ValidationError::ElementTypeMismatch { index: 1, .. })
    ));
}

// =============================================================================
// Filter Definition Tests
// =============================================================================

#[test]
fn test_validated_definition() {
    let ok = FilterDefinition::validated(ProductProperty::Title, Operator::Like, "Lamp%");
    assert!(ok.is_ok());

    let err = FilterDefinition::validated(ProductProperty::InStock, Operator::Equals, "yes");
    assert!(matches!(err, Err(ValidationError::TypeMismatch { expected: ValueType::Boolean, .. })));
}

#[test]
fn test_definition_display() {
    let def = FilterDefinition::new(ProductProperty::Title, Operator::Like, "Lamp%");
    assert_eq!(
        def.to_string(),
        "FilterDefinition{ref=title, operator=MATCHES, value='Lamp%'}"
    );
}

// =============================================================================
// Context Tests
// =============================================================================

#[test]
fn test_context_with_custom_condition() {
    let mut ctx = FilterContext::new(where_builder);
    ctx.add_condition("cheap", &FilterDefinition::new(ProductProperty::Price, Operator::LessThan, 20))
        .unwrap();
    ctx.add_condition("stocked", &FilterDefinition::new(ProductProperty::InStock, Operator::Equals, true))
        .unwrap();

    let cheap = ctx.get_condition("cheap").unwrap();
    let stocked = ctx.get_condition("stocked").unwrap();
    assert_eq!(
        cheap.and(&stocked.not()),
        Where("(price LT 20 AND NOT in_stock EQ true)".to_string())
    );
    assert_eq!(ctx.names(), vec!["cheap", "stocked"]);
}

#[test]
fn test_combinators_leave_operands_untouched() {
    let a = Where("a".to_string());
    let b = Where("b".to_string());
    let _ = a.or(&b).not();
    assert_eq!(a, Where("a".to_string()));
    assert_eq!(b, Where("b".to_string()));
}

#[test]
fn test_context_rejects_invalid_definition() {
    let mut ctx = FilterContext::new(where_builder);
    let err = ctx
        .add_condition("bad", &FilterDefinition::new(ProductProperty::Title, Operator::Between, vec!["a", "b"]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedOperator { .. }));
    assert!(ctx.is_empty());
    assert_eq!(
        ctx.get_condition("bad"),
        Err(ContextError::MissingCondition {
            key: "bad".to_string()
        })
    );
}

// =============================================================================
// Runtime Properties
// =============================================================================

#[test]
fn test_registry_from_json_config() -> anyhow::Result<()> {
    let properties: Vec<Property> = serde_json::from_str(
        r#"[
            {"name": "title", "type": "text", "operators": ["=", "LIKE", "IN"]},
            {"name": "price", "type": "float", "operators": ["GT", "LT", "BETWEEN"]}
        ]"#,
    )?;
    let registry: PropertyRegistry = properties.into_iter().collect();

    assert_eq!(registry.names(), vec!["price", "title"]);
    let price = registry.resolve("price")?;
    assert!(price.supports_all_operators(&[Operator::GreaterThan, Operator::Between]));
    assert!(!price.supports_operator(Operator::Equals));
    Ok(())
}

#[test]
fn test_operator_lookup_variants() {
    assert_eq!(Operator::lookup(" not like "), Some(Operator::NotLike));
    assert_eq!(Operator::lookup("not_matches"), Some(Operator::NotLike));
    assert_eq!(Operator::lookup("is not null"), Some(Operator::IsNotNull));
    assert_eq!(Operator::lookup("NOT_NULL"), Some(Operator::IsNotNull));
    assert_eq!(Operator::lookup("range"), Some(Operator::Between));
    assert_eq!(Operator::lookup("~"), None);
}
