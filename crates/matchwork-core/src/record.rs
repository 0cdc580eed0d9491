use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single validation failure, qualified by the structural path at which it
/// was discovered.
///
/// The `{path, value, message}` shape is wire-stable: consumers rendering
/// validation results rely on these exact field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorRecord {
    /// Location within the value tree, relative to the root (e.g.
    /// `address[0].street`). Empty string for the root itself.
    pub path: String,
    /// The offending value, echoed verbatim.
    pub value: Value,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ErrorRecord {
    /// Create a new error record.
    pub fn new(path: impl Into<String>, value: Value, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value,
            message: message.into(),
        }
    }
}
