use matchwork_core::relationship::evaluate_relationships;
use matchwork_core::{path, ErrorRecord, Matcher, Relationship, Result};
use serde_json::{json, Map, Value};

use crate::fields::Fields;

/// Exact-shape object matcher.
///
/// Validates that a value is an object whose key set matches the declared
/// fields exactly: every required key present and valid, optional keys
/// allowed to be absent, undeclared keys rejected with `should not exist`.
/// Relationship constraints, when supplied, are evaluated only after
/// structural validation comes back clean.
pub struct ObjectWithOnly {
    fields: Vec<(String, Box<dyn Matcher>)>,
}

impl ObjectWithOnly {
    /// Build the matcher from an ordered field declaration, resolving
    /// shorthand and unchecked rules up front.
    pub fn new(fields: Fields) -> Result<Self> {
        Ok(Self {
            fields: fields.normalize()?,
        })
    }

    fn declared(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == key)
    }

    fn structural_errors(&self, path: &str, object: &Map<String, Value>) -> Vec<ErrorRecord> {
        let mut errors = Vec::new();

        for (name, matcher) in &self.fields {
            match object.get(name) {
                None if matcher.is_optional() => continue,
                // An absent required key is validated as null so the field's
                // own matcher reports the mismatch.
                None => errors.extend(matcher.matches(&path::child(path, name), &Value::Null)),
                Some(field) => errors.extend(matcher.matches(&path::child(path, name), field)),
            }
        }

        for (key, field) in object {
            if !self.declared(key) {
                errors.push(ErrorRecord::new(
                    path::child(path, key),
                    field.clone(),
                    "should not exist",
                ));
            }
        }

        errors
    }
}

impl Matcher for ObjectWithOnly {
    fn matches(&self, path: &str, value: &Value) -> Vec<ErrorRecord> {
        self.matches_with(path, value, &[])
    }

    fn matches_with(
        &self,
        path: &str,
        value: &Value,
        relationships: &[Relationship],
    ) -> Vec<ErrorRecord> {
        let object = match value.as_object() {
            Some(object) => object,
            None => return vec![ErrorRecord::new(path, value.clone(), "should be an object")],
        };

        let errors = self.structural_errors(path, object);
        tracing::trace!(
            event = "structural_check",
            path = %path,
            fields = self.fields.len(),
            errors = errors.len()
        );
        if !errors.is_empty() || relationships.is_empty() {
            return errors;
        }

        tracing::trace!(
            event = "relationship_check",
            path = %path,
            constraints = relationships.len()
        );
        evaluate_relationships(relationships, path, object)
    }

    fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (name, matcher) in &self.fields {
            properties.insert(name.clone(), matcher.to_json_schema());
            if !matcher.is_optional() {
                required.push(Value::String(name.clone()));
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }
}
