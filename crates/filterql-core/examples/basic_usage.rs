//! Basic usage example for filterql-core
//!
//! Run with: cargo run --example basic_usage

use filterql_core::{
    Condition, Context, FilterContext, FilterDefinition, Operator, PredicateBuilder, Property,
    PropertyRef, RawFilterRequest, Value, ValueType, FOR_NUMBER, FOR_TEXT,
};

fn main() {
    println!("=== FilterQL Core Basic Usage Example ===\n");

    // Example 1: Declaring properties
    println!("1. Declaring Properties:");
    let (name, age) = match (
        Property::new("name", ValueType::Text, FOR_TEXT),
        Property::new("age", ValueType::Integer, FOR_NUMBER),
    ) {
        (Ok(name), Ok(age)) => (name, age),
        _ => return,
    };
    println!("   {} accepts {:?}", name.name(), name.supported_operators());
    println!("   {} accepts {:?}\n", age.name(), age.supported_operators());

    // Example 2: Validating values
    println!("2. Validating Values:");
    for (operator, value) in [
        (Operator::GreaterThan, Value::from(18)),
        (Operator::Between, Value::from(vec![18])),
        (Operator::Like, Value::from("1%")),
    ] {
        match age.validate_operator_for_value(operator, &value) {
            Ok(()) => println!("   age {} {} -> ok", operator.symbol(), value),
            Err(e) => println!("   age {} {} -> {}", operator.symbol(), value, e),
        }
    }
    println!();

    // Example 3: Populating a context and combining conditions
    println!("3. Combining Conditions:");
    let mut context = FilterContext::new(PredicateBuilder);
    let definitions = [
        ("f1", FilterDefinition::new(name.clone(), Operator::Like, "John%")),
        ("f2", FilterDefinition::new(age.clone(), Operator::GreaterThan, 18)),
    ];
    for (key, definition) in &definitions {
        if let Err(e) = context.add_condition(*key, definition) {
            println!("   {} rejected: {}", key, e);
            return;
        }
    }
    if let (Ok(f1), Ok(f2)) = (context.get_condition("f1"), context.get_condition("f2")) {
        println!("   (f1 & f2) | !f2 => {}\n", f1.and(&f2).or(&f2.not()));
    }

    // Example 4: Reading the wire form
    println!("4. Wire Request:");
    let json = r#"{
        "filters": {"f1": {"ref": "name", "operator": "MATCHES", "value": "J%"}},
        "combineWith": "f1"
    }"#;
    match RawFilterRequest::from_json(json) {
        Ok(raw) => println!("   {:?}", raw),
        Err(e) => println!("   invalid request: {}", e),
    }

    println!("\n=== Example Complete ===");
}
