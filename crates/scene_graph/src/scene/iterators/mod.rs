//! Traversal views over a scene graph
//!
//! All views borrow the graph immutably and walk the hierarchy store in
//! place; nothing is copied up front.

mod child;
mod downwards;
mod upwards;

pub use child::ChildIterator;
pub use downwards::DownwardsIterator;
pub use upwards::UpwardsIterator;

use super::{GraphObject, NodeContent, NodeHeader, NodeIndex, NodeName, SceneGraph};

/// Order in which [`DownwardsIterator`] visits descendants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Level by level, siblings in insertion order
    #[default]
    BreadthFirst,
    /// Pre-order, each subtree finished before the next sibling
    DepthFirst,
}

/// Which nodes a view accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeFilter {
    /// Every node
    #[default]
    All,
    /// Only nodes that are not end points
    NodesOnly,
    /// Only end points
    EndPointsOnly,
}

impl NodeFilter {
    /// Check a hierarchy record against this filter
    pub const fn accepts(self, header: &NodeHeader) -> bool {
        match self {
            Self::All => true,
            Self::NodesOnly => !header.is_end_point(),
            Self::EndPointsOnly => header.is_end_point(),
        }
    }
}

/// Borrowed view of one node, produced by the traversal iterators
#[derive(Debug, Clone, Copy)]
pub struct SceneNode<'a> {
    graph: &'a SceneGraph,
    offset: u32,
}

impl<'a> SceneNode<'a> {
    pub(crate) const fn new(graph: &'a SceneGraph, offset: u32) -> Self {
        Self { graph, offset }
    }

    /// Handle of the node
    pub fn index(&self) -> NodeIndex {
        self.graph.handle(self.offset)
    }

    /// Name of the node
    pub fn name(&self) -> &'a NodeName {
        self.graph.name_at(self.offset)
    }

    /// Content of the node
    pub fn content(&self) -> Option<&'a NodeContent> {
        self.graph.content_at(self.offset)
    }

    /// Hierarchy record of the node
    pub fn header(&self) -> &'a NodeHeader {
        self.graph.header_at(self.offset)
    }

    /// Whether the node is an end point
    pub fn is_end_point(&self) -> bool {
        self.header().is_end_point()
    }

    /// Check whether the node's content is of type `T`
    pub fn content_is<T: GraphObject>(&self) -> bool {
        self.content().is_some_and(|content| content.is::<T>())
    }

    /// Borrow the node's content as `T`
    pub fn content_as<T: GraphObject>(&self) -> Option<&'a T> {
        self.content()?.downcast_ref::<T>()
    }
}
