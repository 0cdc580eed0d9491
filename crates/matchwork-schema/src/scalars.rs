//! Scalar leaf matchers.
//!
//! These are deliberately minimal contract implementers: one type check,
//! one error message, one schema fragment.

use matchwork_core::{ErrorRecord, Matcher};
use serde_json::{json, Value};

/// Leaf matcher accepting any JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMatcher;

impl StringMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for StringMatcher {
    fn matches(&self, path: &str, value: &Value) -> Vec<ErrorRecord> {
        if value.is_string() {
            Vec::new()
        } else {
            vec![ErrorRecord::new(path, value.clone(), "should be a string")]
        }
    }

    fn to_json_schema(&self) -> Value {
        json!({"type": "string"})
    }
}

/// Leaf matcher accepting any JSON number.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberMatcher;

impl NumberMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for NumberMatcher {
    fn matches(&self, path: &str, value: &Value) -> Vec<ErrorRecord> {
        if value.is_number() {
            Vec::new()
        } else {
            vec![ErrorRecord::new(path, value.clone(), "should be a number")]
        }
    }

    fn to_json_schema(&self) -> Value {
        json!({"type": "number"})
    }
}

/// Leaf matcher accepting a JSON boolean.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanMatcher;

impl BooleanMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for BooleanMatcher {
    fn matches(&self, path: &str, value: &Value) -> Vec<ErrorRecord> {
        if value.is_boolean() {
            Vec::new()
        } else {
            vec![ErrorRecord::new(path, value.clone(), "should be a boolean")]
        }
    }

    fn to_json_schema(&self) -> Value {
        json!({"type": "boolean"})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_matcher_checks_type() {
        assert!(StringMatcher::new().matches("", &json!("bob")).is_empty());
        let errors = StringMatcher::new().matches("name", &json!(21));
        assert_eq!(errors, vec![ErrorRecord::new("name", json!(21), "should be a string")]);
    }

    #[test]
    fn number_matcher_checks_type() {
        assert!(NumberMatcher::new().matches("", &json!(21)).is_empty());
        assert!(NumberMatcher::new().matches("", &json!(21.5)).is_empty());
        let errors = NumberMatcher::new().matches("age", &json!("21"));
        assert_eq!(errors[0].message, "should be a number");
    }

    #[test]
    fn boolean_matcher_checks_type() {
        assert!(BooleanMatcher::new().matches("", &json!(true)).is_empty());
        let errors = BooleanMatcher::new().matches("active", &json!(0));
        assert_eq!(errors[0].message, "should be a boolean");
    }

    #[test]
    fn null_is_none_of_the_scalar_types() {
        assert!(!StringMatcher::new().matches("", &Value::Null).is_empty());
        assert!(!NumberMatcher::new().matches("", &Value::Null).is_empty());
        assert!(!BooleanMatcher::new().matches("", &Value::Null).is_empty());
    }

    #[test]
    fn scalar_schema_fragments() {
        assert_eq!(StringMatcher::new().to_json_schema(), json!({"type": "string"}));
        assert_eq!(NumberMatcher::new().to_json_schema(), json!({"type": "number"}));
        assert_eq!(BooleanMatcher::new().to_json_schema(), json!({"type": "boolean"}));
    }
}
