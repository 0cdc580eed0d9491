use serde_json::Value;

use crate::record::ErrorRecord;
use crate::relationship::Relationship;

/// The contract every matcher implements, leaf or combinator.
///
/// An empty result means "valid". Matching never panics for well-formed
/// values; malformed *configuration* is a construction-time failure
/// ([`MatcherError`](crate::MatcherError)), not a match-time one. Matchers
/// are immutable once built, so a schema tree may be shared across threads
/// and reused by concurrent `matches` calls without synchronization.
///
/// Combinators hold their children as `Box<dyn Matcher>`. Any conforming
/// implementation can slot into a schema tree, including a test double.
pub trait Matcher: Send + Sync {
    /// Validate `value` at `path`, returning all discoverable errors in
    /// depth-first order.
    fn matches(&self, path: &str, value: &Value) -> Vec<ErrorRecord>;

    /// Validate with cross-field relationship constraints.
    ///
    /// Only matchers with a concept of fields (the exact-shape object
    /// matcher) evaluate relationships; the default ignores them.
    fn matches_with(
        &self,
        path: &str,
        value: &Value,
        relationships: &[Relationship],
    ) -> Vec<ErrorRecord> {
        let _ = relationships;
        self.matches(path, value)
    }

    /// Project this matcher's constraints into a JSON Schema fragment.
    ///
    /// Pure function of the matcher's configuration; recomputed per call.
    fn to_json_schema(&self) -> Value;

    /// Whether a container may treat this matcher's key as absent without
    /// error. Only the optional wrapper reports true.
    fn is_optional(&self) -> bool {
        false
    }
}
