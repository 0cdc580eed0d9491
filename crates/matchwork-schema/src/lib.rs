//! Matcher implementations for Matchwork.
//!
//! Schema trees are built by composing matchers. Leaves check a single
//! value while combinators apply inner matchers across objects and arrays.
//! The root is typically an [`ObjectWithOnly`], which enforces an exact
//! object shape and optionally evaluates cross-field relationship
//! constraints.

pub mod array;
pub mod enumeration;
pub mod fields;
pub mod object_with_only;
pub mod optional;
pub mod scalars;

pub use array::ArrayMatcher;
pub use enumeration::{EnumMatcher, EnumOptions};
pub use fields::{FieldRule, Fields};
pub use object_with_only::ObjectWithOnly;
pub use optional::{MatcherExt, Optional};
pub use scalars::{BooleanMatcher, NumberMatcher, StringMatcher};
