use std::fmt;

/// Location inside a json document, rendered as a dotted/bracketed string
/// rooted at `$`, e.g. `$.foo[2].bar`.
///
/// Paths are append-only values: extending one produces a new path and
/// leaves the parent untouched. They show up in [`CompareError`] variants to
/// point at the exact spot where a comparison failed.
///
/// [`CompareError`]: crate::CompareError
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath(String);

impl JsonPath {
    /// The path of the topmost level in a json document.
    pub(crate) fn root() -> JsonPath {
        JsonPath("$".to_owned())
    }

    /// Returns a new path descending into the given map key.
    pub(crate) fn with_key(&self, key: &str) -> JsonPath {
        JsonPath(format!("{}.{}", self.0, key))
    }

    /// Returns a new path descending into the given array index.
    pub(crate) fn with_index(&self, index: usize) -> JsonPath {
        JsonPath(format!("{}[{}]", self.0, index))
    }

    /// The rendered path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accumulates_keys_and_indexes() {
        let path = JsonPath::root()
            .with_key("foo")
            .with_index(2)
            .with_key("bar")
            .with_key("baz")
            .with_index(3)
            .with_index(0);
        assert_eq!(path.to_string(), "$.foo[2].bar.baz[3][0]");
    }

    #[test]
    fn extending_leaves_parent_untouched() {
        let root = JsonPath::root();
        let child = root.with_key("foo");
        assert_eq!(root.as_str(), "$");
        assert_eq!(child.as_str(), "$.foo");
    }
}
