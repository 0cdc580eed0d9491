use thiserror::Error;

/// Construction-time configuration errors.
///
/// These indicate a malformed schema definition and halt construction
/// immediately. Validation failures discovered while matching a value are
/// never raised through this type; they are returned as
/// [`ErrorRecord`](crate::ErrorRecord) sequences instead.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// The enum matcher was configured with something other than a
    /// non-empty array of allowed values.
    #[error("invalid enum values: {0}")]
    InvalidEnumValues(serde_json::Value),
    /// A shorthand type name did not resolve to a known leaf matcher.
    #[error("invalid matcher shorthand: {0}")]
    InvalidShorthand(String),
}

/// Convenience alias for results returned by matcher constructors.
pub type Result<T> = std::result::Result<T, MatcherError>;
