use matchwork_core::{ErrorRecord, Matcher, MatcherError, Result};
use serde_json::{json, Value};

use crate::array::ArrayMatcher;
use crate::enumeration::EnumMatcher;
use crate::object_with_only::ObjectWithOnly;
use crate::optional::Optional;
use crate::scalars::{BooleanMatcher, NumberMatcher, StringMatcher};

/// Declaration for a single field of an exact-shape object schema.
///
/// Every bundled matcher type converts into a rule, as does a plain
/// type-name shorthand (`"string"`, `"number"`, `"boolean"`) and a
/// prebuilt `Box<dyn Matcher>` for anything else implementing the
/// contract.
pub enum FieldRule {
    /// Validate the field with the given matcher.
    Matcher(Box<dyn Matcher>),
    /// Resolve a plain type name to the corresponding leaf matcher.
    Shorthand(String),
    /// Declare the key but never descend into its subtree.
    Unchecked,
}

impl FieldRule {
    /// Declare a key whose subtree is accepted without validation.
    pub fn unchecked() -> Self {
        FieldRule::Unchecked
    }

    pub(crate) fn normalize(self) -> Result<Box<dyn Matcher>> {
        match self {
            FieldRule::Matcher(matcher) => Ok(matcher),
            FieldRule::Shorthand(name) => match name.as_str() {
                "string" => Ok(Box::new(StringMatcher::new())),
                "number" => Ok(Box::new(NumberMatcher::new())),
                "boolean" => Ok(Box::new(BooleanMatcher::new())),
                _ => Err(MatcherError::InvalidShorthand(name)),
            },
            FieldRule::Unchecked => Ok(Box::new(AnyValue)),
        }
    }
}

impl From<Box<dyn Matcher>> for FieldRule {
    fn from(matcher: Box<dyn Matcher>) -> Self {
        FieldRule::Matcher(matcher)
    }
}

impl From<&str> for FieldRule {
    fn from(shorthand: &str) -> Self {
        FieldRule::Shorthand(shorthand.to_string())
    }
}

// A blanket conversion over `Matcher` would overlap with the shorthand
// conversion above, so each bundled matcher type converts explicitly.
macro_rules! field_rule_from {
    ($($matcher:ty),+ $(,)?) => {
        $(
            impl From<$matcher> for FieldRule {
                fn from(matcher: $matcher) -> Self {
                    FieldRule::Matcher(Box::new(matcher))
                }
            }
        )+
    };
}

field_rule_from!(
    StringMatcher,
    NumberMatcher,
    BooleanMatcher,
    EnumMatcher,
    Optional,
    ArrayMatcher,
    ObjectWithOnly,
);

/// Declaration-ordered field map for
/// [`ObjectWithOnly`](crate::ObjectWithOnly).
#[derive(Default)]
pub struct Fields {
    entries: Vec<(String, FieldRule)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Declaration order is preserved and drives both
    /// validation order and the `required` list of the projected schema.
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<FieldRule>) -> Self {
        self.entries.push((name.into(), rule.into()));
        self
    }

    /// Resolve every rule into a matcher, once, at construction time.
    pub(crate) fn normalize(self) -> Result<Vec<(String, Box<dyn Matcher>)>> {
        self.entries
            .into_iter()
            .map(|(name, rule)| Ok((name, rule.normalize()?)))
            .collect()
    }
}

/// Matcher behind [`FieldRule::Unchecked`]; accepts any value, including an
/// absent one, and projects an unconstrained schema.
struct AnyValue;

impl Matcher for AnyValue {
    fn matches(&self, _path: &str, _value: &Value) -> Vec<ErrorRecord> {
        Vec::new()
    }

    fn to_json_schema(&self) -> Value {
        json!({})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::MatcherExt;

    #[test]
    fn every_bundled_matcher_converts_into_a_rule() {
        let rules: Vec<FieldRule> = vec![
            StringMatcher::new().into(),
            NumberMatcher::new().into(),
            BooleanMatcher::new().into(),
            EnumMatcher::new(json!(["a"])).expect("enum").into(),
            NumberMatcher::new().optional().into(),
            ArrayMatcher::new(StringMatcher::new()).into(),
            ObjectWithOnly::new(Fields::new()).expect("object").into(),
            (Box::new(StringMatcher::new()) as Box<dyn Matcher>).into(),
        ];
        for rule in rules {
            assert!(matches!(rule, FieldRule::Matcher(_)));
        }
    }

    #[test]
    fn shorthands_resolve_to_leaf_matchers() {
        for (name, ok, bad) in [
            ("string", json!("x"), json!(1)),
            ("number", json!(1), json!("x")),
            ("boolean", json!(true), json!("x")),
        ] {
            let matcher = FieldRule::from(name).normalize().expect("shorthand");
            assert!(matcher.matches("", &ok).is_empty());
            assert!(!matcher.matches("", &bad).is_empty());
        }
    }

    #[test]
    fn unknown_shorthands_fail_construction() {
        let err = match FieldRule::from("strnig").normalize() {
            Ok(_) => panic!("unknown shorthand should not resolve"),
            Err(err) => err,
        };
        assert_eq!(err.to_string(), "invalid matcher shorthand: strnig");
    }

    #[test]
    fn unchecked_accepts_anything() {
        let matcher = FieldRule::unchecked().normalize().expect("unchecked");
        assert!(matcher.matches("", &json!({"any": ["thing"]})).is_empty());
        assert!(matcher.matches("", &Value::Null).is_empty());
        assert_eq!(matcher.to_json_schema(), json!({}));
    }
}
