//! Per-node hierarchy record

use bitflags::bitflags;

/// Storage offset meaning "no node"
pub(crate) const NO_NODE: u32 = u32::MAX;

bitflags! {
    /// Per-node state bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        /// The node holds leaf content and may never receive children
        const END_POINT = 1 << 0;
    }
}

/// Hierarchy links for one node
///
/// Children of a node are threaded as a singly linked list: the parent points
/// at its first child and every child points at its next sibling. Links are
/// plain storage offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHeader {
    parent: u32,
    first_child: u32,
    next_sibling: u32,
    flags: NodeFlags,
}

impl NodeHeader {
    pub(crate) const fn with_parent(parent: u32) -> Self {
        Self {
            parent,
            first_child: NO_NODE,
            next_sibling: NO_NODE,
            flags: NodeFlags::empty(),
        }
    }

    /// Storage offset of the parent, `None` for the root
    pub const fn parent_offset(&self) -> Option<u32> {
        link(self.parent)
    }

    /// Storage offset of the first child
    pub const fn first_child_offset(&self) -> Option<u32> {
        link(self.first_child)
    }

    /// Storage offset of the next sibling
    pub const fn next_sibling_offset(&self) -> Option<u32> {
        link(self.next_sibling)
    }

    /// Whether the node has a parent
    pub const fn has_parent(&self) -> bool {
        self.parent != NO_NODE
    }

    /// Whether the node has at least one child
    pub const fn has_child(&self) -> bool {
        self.first_child != NO_NODE
    }

    /// Whether another node follows this one in its parent's child list
    pub const fn has_sibling(&self) -> bool {
        self.next_sibling != NO_NODE
    }

    /// Whether the node is an end point
    pub const fn is_end_point(&self) -> bool {
        self.flags.contains(NodeFlags::END_POINT)
    }

    /// Raw flag bits
    pub const fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub(crate) fn set_first_child(&mut self, child: u32) {
        self.first_child = child;
    }

    pub(crate) fn set_next_sibling(&mut self, sibling: u32) {
        self.next_sibling = sibling;
    }

    pub(crate) fn mark_end_point(&mut self) {
        self.flags.insert(NodeFlags::END_POINT);
    }
}

impl Default for NodeHeader {
    fn default() -> Self {
        Self::with_parent(NO_NODE)
    }
}

const fn link(offset: u32) -> Option<u32> {
    if offset == NO_NODE {
        None
    } else {
        Some(offset)
    }
}
