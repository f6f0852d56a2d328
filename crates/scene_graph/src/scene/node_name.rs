//! Fully-qualified node names

use std::fmt;

/// A node's full path plus the position where its own name starts
///
/// The path is stored once per node so lookups never have to rebuild it
/// from the ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName {
    path: String,
    name_offset: usize,
}

impl NodeName {
    pub(crate) fn new(path: String, name_offset: usize) -> Self {
        debug_assert!(name_offset <= path.len());
        Self { path, name_offset }
    }

    pub(crate) fn root() -> Self {
        Self::new(String::new(), 0)
    }

    /// Full separator-joined path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The node's own (non-qualified) name
    pub fn name(&self) -> &str {
        &self.path[self.name_offset..]
    }

    /// Length of the full path in bytes
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Length of the node's own name in bytes
    pub fn name_len(&self) -> usize {
        self.path.len() - self.name_offset
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_suffix_of_path() {
        let name = NodeName::new("skeleton/hip/knee".to_string(), 13);
        assert_eq!(name.path(), "skeleton/hip/knee");
        assert_eq!(name.name(), "knee");
        assert_eq!(name.path_len(), 17);
        assert_eq!(name.name_len(), 4);
    }

    #[test]
    fn test_root_name_is_empty() {
        let name = NodeName::root();
        assert_eq!(name.path(), "");
        assert_eq!(name.name(), "");
    }
}
