//! Deep-equality matcher.

use serde_json::Value;

use super::ArgumentMatcher;
use crate::value;

/// Matches arguments equal to a captured value.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualsMatcher {
    expected: Value,
}

impl EqualsMatcher {
    /// Captures the expected value.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self { expected: expected.into() }
    }
}

impl ArgumentMatcher for EqualsMatcher {
    fn matches(&self, value: &Value) -> bool {
        *value == self.expected
    }

    fn describe(&self) -> String {
        format!("equal to {}", value::render(&self.expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describes_expected_value() {
        assert_eq!(EqualsMatcher::new("test").describe(), "equal to <string:test>");
        assert_eq!(EqualsMatcher::new(5).describe(), "equal to <integer:5>");
    }

    #[test]
    fn compares_nested_values_deeply() {
        let matcher = EqualsMatcher::new(json!({"a": [1, 2], "b": "c"}));
        assert!(matcher.matches(&json!({"b": "c", "a": [1, 2]})));
        assert!(!matcher.matches(&json!({"a": [2, 1], "b": "c"})));
    }

    #[test]
    fn does_not_coerce_types() {
        let matcher = EqualsMatcher::new("1");
        assert!(!matcher.matches(&json!(1)));
    }
}
