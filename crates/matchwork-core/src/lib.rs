//! Core contracts for Matchwork.
//!
//! This crate defines the matcher contract, the error record emitted by
//! validation, path construction helpers, and cross-field relationship
//! constraints shared by every matcher implementation.

pub mod error;
pub mod matcher;
pub mod path;
pub mod record;
pub mod relationship;

pub use error::{MatcherError, Result};
pub use matcher::Matcher;
pub use record::ErrorRecord;
pub use relationship::{evaluate_relationships, Relationship, RelationshipKind};
