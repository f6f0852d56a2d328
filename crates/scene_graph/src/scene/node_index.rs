//! Node handle implementation

use std::fmt;

/// Handle to a node stored in a [`SceneGraph`](super::SceneGraph)
///
/// A handle is an offset into the graph's parallel stores, tagged with the
/// graph generation it was issued in. Handles are only meaningful when passed
/// back to the graph that issued them; a handle issued before
/// [`SceneGraph::clear`](super::SceneGraph::clear) is rejected afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex {
    offset: u32,
    generation: u32,
}

impl NodeIndex {
    /// Reserved handle meaning "no node"
    pub const INVALID: Self = Self {
        offset: u32::MAX,
        generation: 0,
    };

    pub(crate) const fn new(offset: u32, generation: u32) -> Self {
        Self { offset, generation }
    }

    /// Offset of the node in the graph's storage
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// Generation of the graph this handle was issued in
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Whether this handle is anything other than [`NodeIndex::INVALID`]
    ///
    /// This does not prove the handle belongs to a particular graph; use
    /// [`SceneGraph::is_valid_index`](super::SceneGraph::is_valid_index) for that.
    pub const fn is_valid(self) -> bool {
        self.offset != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}@{}", self.offset, self.generation)
        } else {
            f.write_str("#invalid")
        }
    }
}
