use matchwork_core::{ErrorRecord, Matcher};
use serde_json::Value;

/// Decorator marking a field as allowed to be absent from its container.
///
/// The container (not this wrapper) checks [`Matcher::is_optional`] and
/// skips absent keys; when the key is present, validation delegates fully
/// to the inner matcher at the same path. "Missing is acceptable" is
/// distinct from "present but matches anything".
pub struct Optional {
    inner: Box<dyn Matcher>,
}

impl Optional {
    pub fn new(inner: impl Matcher + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn boxed(inner: Box<dyn Matcher>) -> Self {
        Self { inner }
    }
}

impl Matcher for Optional {
    fn matches(&self, path: &str, value: &Value) -> Vec<ErrorRecord> {
        self.inner.matches(path, value)
    }

    fn to_json_schema(&self) -> Value {
        self.inner.to_json_schema()
    }

    fn is_optional(&self) -> bool {
        true
    }
}

/// Builder sugar available on every matcher.
pub trait MatcherExt: Matcher + Sized + 'static {
    /// Wrap this matcher in [`Optional`].
    fn optional(self) -> Optional {
        Optional::new(self)
    }
}

impl<M: Matcher + Sized + 'static> MatcherExt for M {}
