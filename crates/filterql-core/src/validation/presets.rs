//! Common operator sets

use super::operator::Operator;

/// Operators that make sense for text properties
pub const FOR_TEXT: [Operator; 8] = [
    Operator::Equals,
    Operator::NotEquals,
    Operator::Like,
    Operator::NotLike,
    Operator::In,
    Operator::NotIn,
    Operator::IsNull,
    Operator::IsNotNull,
];

/// Operators that make sense for numeric properties
pub const FOR_NUMBER: [Operator; 12] = [
    Operator::Equals,
    Operator::NotEquals,
    Operator::GreaterThan,
    Operator::GreaterThanOrEqual,
    Operator::LessThan,
    Operator::LessThanOrEqual,
    Operator::Between,
    Operator::NotBetween,
    Operator::In,
    Operator::NotIn,
    Operator::IsNull,
    Operator::IsNotNull,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_preset_has_no_ordering_operators() {
        assert!(!FOR_TEXT.contains(&Operator::GreaterThan));
        assert!(!FOR_TEXT.contains(&Operator::Between));
        assert!(FOR_TEXT.contains(&Operator::Like));
    }

    #[test]
    fn test_number_preset_has_no_pattern_operators() {
        assert!(!FOR_NUMBER.contains(&Operator::Like));
        assert!(!FOR_NUMBER.contains(&Operator::NotLike));
        assert!(FOR_NUMBER.contains(&Operator::Between));
    }
}
