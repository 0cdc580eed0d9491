use matchwork_core::{path, ErrorRecord, Matcher};
use serde_json::{json, Value};

/// Combinator applying an inner matcher to every element of an array.
///
/// Element errors are reported at synthesized indexed paths (`field[0]`,
/// `field[1]`, ...) and concatenated in index order.
pub struct ArrayMatcher {
    of: Box<dyn Matcher>,
}

impl ArrayMatcher {
    pub fn new(of: impl Matcher + 'static) -> Self {
        Self { of: Box::new(of) }
    }

    pub fn boxed(of: Box<dyn Matcher>) -> Self {
        Self { of }
    }
}

impl Matcher for ArrayMatcher {
    fn matches(&self, path: &str, value: &Value) -> Vec<ErrorRecord> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return vec![ErrorRecord::new(path, value.clone(), "should be an array")],
        };

        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            errors.extend(self.of.matches(&path::element(path, index), item));
        }
        errors
    }

    fn to_json_schema(&self) -> Value {
        json!({"type": "array", "items": self.of.to_json_schema()})
    }
}
