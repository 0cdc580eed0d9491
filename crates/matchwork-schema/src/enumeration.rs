use matchwork_core::{ErrorRecord, Matcher, MatcherError, Result};
use serde_json::{Map, Value};

/// Optional configuration for [`EnumMatcher`].
#[derive(Debug, Clone, Default)]
pub struct EnumOptions {
    /// Display label used in error messages. Defaults to "enum value".
    pub name: Option<String>,
    /// Append the literal allowed-values list to error messages.
    pub verbose: bool,
    /// JSON Schema `description` passthrough.
    pub description: Option<String>,
    /// JSON Schema `type` passthrough.
    pub schema_type: Option<String>,
}

/// Leaf matcher accepting one of a fixed list of values.
#[derive(Debug, Clone)]
pub struct EnumMatcher {
    values: Vec<Value>,
    options: EnumOptions,
}

impl EnumMatcher {
    /// Build from a JSON array of allowed values.
    ///
    /// Fails when `values` is not a non-empty array; the error names the
    /// offending configuration value.
    pub fn new(values: Value) -> Result<Self> {
        Self::with_options(values, EnumOptions::default())
    }

    /// Build with explicit options.
    pub fn with_options(values: Value, options: EnumOptions) -> Result<Self> {
        match values {
            Value::Array(values) if !values.is_empty() => Ok(Self { values, options }),
            other => Err(MatcherError::InvalidEnumValues(other)),
        }
    }

    fn label(&self) -> &str {
        self.options.name.as_deref().unwrap_or("enum value")
    }

    fn allowed_list(&self) -> String {
        let rendered: Vec<String> = self
            .values
            .iter()
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        rendered.join(",")
    }
}

impl Matcher for EnumMatcher {
    fn matches(&self, path: &str, value: &Value) -> Vec<ErrorRecord> {
        if self.values.contains(value) {
            return Vec::new();
        }
        let mut message = format!("should be a valid {}", self.label());
        if self.options.verbose {
            message.push_str(&format!(" ({})", self.allowed_list()));
        }
        vec![ErrorRecord::new(path, value.clone(), message)]
    }

    fn to_json_schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("enum".to_string(), Value::Array(self.values.clone()));
        if let Some(description) = &self.options.description {
            schema.insert("description".to_string(), Value::String(description.clone()));
        }
        if let Some(schema_type) = &self.options.schema_type {
            schema.insert("type".to_string(), Value::String(schema_type.clone()));
        }
        Value::Object(schema)
    }
}
