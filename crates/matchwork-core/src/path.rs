//! Path construction for validation errors.
//!
//! Paths are plain strings built by concatenation: object key access appends
//! `.key` (bare `key` at the root), array element access appends `[index]`.
//! The string passed into a child call always encodes the exact route taken
//! from the root.

/// Extend `path` with an object key access.
pub fn child(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Extend `path` with an array element access.
pub fn element(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_at_root_is_bare() {
        assert_eq!(child("", "name"), "name");
    }

    #[test]
    fn nested_keys_are_dotted() {
        assert_eq!(child("address", "street"), "address.street");
    }

    #[test]
    fn element_paths_compose_with_keys() {
        let base = child("", "address");
        let indexed = element(&base, 0);
        assert_eq!(child(&indexed, "street"), "address[0].street");
    }

    #[test]
    fn element_at_root_has_no_separator() {
        assert_eq!(element("", 3), "[3]");
    }
}
