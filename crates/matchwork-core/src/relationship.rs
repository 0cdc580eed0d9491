use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::ErrorRecord;

/// Kind of cross-field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    /// The named fields must be jointly present or jointly absent.
    And,
}

/// A cross-field presence constraint, supplied per match call and evaluated
/// once after structural validation succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Relationship {
    /// Constraint kind.
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
    /// Field names the constraint ranges over, in declaration order.
    pub values: Vec<String>,
}

impl Relationship {
    /// Declare that the named fields are jointly present or jointly absent.
    pub fn and<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: RelationshipKind::And,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Evaluate relationship constraints against a structurally valid object.
///
/// A field counts as present iff its key exists in the map; an explicit
/// `null` is still a present key. Each violated constraint contributes
/// exactly one error at the object's own `path`, carrying the full list of
/// related field names.
pub fn evaluate_relationships(
    relationships: &[Relationship],
    path: &str,
    object: &Map<String, Value>,
) -> Vec<ErrorRecord> {
    let mut errors = Vec::new();
    for relationship in relationships {
        match relationship.kind {
            RelationshipKind::And => {
                let present = relationship
                    .values
                    .iter()
                    .filter(|field| object.contains_key(field.as_str()))
                    .count();
                if present > 0 && present < relationship.values.len() {
                    let names = Value::from(relationship.values.clone());
                    let message = format!("{names} are related and therefore required");
                    errors.push(ErrorRecord::new(path, names, message));
                }
            }
        }
    }
    errors
}
