//! Descendant traversal

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::{SceneNode, TraversalOrder};
use crate::scene::{NodeIndex, SceneGraph};

/// Lazy walk over a node and its descendants
///
/// Children of a yielded node are only scheduled when the iterator is
/// advanced again, so calling
/// [`ignore_node_descendants`](Self::ignore_node_descendants) right after a
/// node was returned skips its whole subtree without visiting it.
///
/// ```
/// use scene_graph::scene::{SceneGraph, TraversalOrder};
///
/// let mut graph = SceneGraph::new();
/// let a = graph.add_child(graph.root(), "a", None).unwrap();
/// graph.add_child(a, "hidden", None).unwrap();
/// graph.add_child(graph.root(), "b", None).unwrap();
///
/// let mut names = Vec::new();
/// let mut iter = graph.downwards(graph.root(), TraversalOrder::BreadthFirst, false);
/// while let Some(node) = iter.next() {
///     names.push(node.name().path().to_string());
///     if node.name().name() == "a" {
///         iter.ignore_node_descendants();
///     }
/// }
/// assert_eq!(names, ["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct DownwardsIterator<'a> {
    graph: &'a SceneGraph,
    order: TraversalOrder,
    start: u32,
    // Queue for breadth-first, stack for depth-first
    pending: VecDeque<u32>,
    last: Option<u32>,
    ignore_last: bool,
}

impl<'a> DownwardsIterator<'a> {
    /// Start a walk at `start`; an invalid handle produces an empty walk
    pub fn new(
        graph: &'a SceneGraph,
        start: NodeIndex,
        order: TraversalOrder,
        include_start: bool,
    ) -> Self {
        let mut iter = Self {
            graph,
            order,
            start: start.offset(),
            pending: VecDeque::new(),
            last: None,
            ignore_last: false,
        };

        if let Some(offset) = graph.resolve(start) {
            let offset = offset as u32;
            if include_start {
                iter.pending.push_back(offset);
            } else {
                iter.advance_from(offset, true);
            }
        }
        iter
    }

    /// Skip the descendants of the node most recently returned by `next`
    pub fn ignore_node_descendants(&mut self) {
        if self.last.is_some() {
            self.ignore_last = true;
        }
    }

    /// Traversal order of this walk
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }

    fn advance_from(&mut self, offset: u32, descend: bool) {
        let header = self.graph.header_at(offset);
        match self.order {
            TraversalOrder::BreadthFirst => {
                if descend {
                    let mut child = header.first_child_offset();
                    while let Some(current) = child {
                        self.pending.push_back(current);
                        child = self.graph.header_at(current).next_sibling_offset();
                    }
                }
            }
            TraversalOrder::DepthFirst => {
                // The start node's own siblings are outside the walk.
                if offset != self.start {
                    if let Some(sibling) = header.next_sibling_offset() {
                        self.pending.push_back(sibling);
                    }
                }
                if descend {
                    if let Some(child) = header.first_child_offset() {
                        self.pending.push_back(child);
                    }
                }
            }
        }
    }
}

impl<'a> Iterator for DownwardsIterator<'a> {
    type Item = SceneNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(last) = self.last.take() {
            let descend = !std::mem::take(&mut self.ignore_last);
            self.advance_from(last, descend);
        }

        let offset = match self.order {
            TraversalOrder::BreadthFirst => self.pending.pop_front(),
            TraversalOrder::DepthFirst => self.pending.pop_back(),
        }?;

        self.last = Some(offset);
        Some(SceneNode::new(self.graph, offset))
    }
}

impl FusedIterator for DownwardsIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// root
    /// ├── a
    /// │   ├── a1
    /// │   │   └── a1x
    /// │   └── a2
    /// └── b
    ///     └── b1
    fn build_graph() -> SceneGraph {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.add_child(root, "a", None).unwrap();
        let b = graph.add_child(root, "b", None).unwrap();
        let a1 = graph.add_child(a, "a1", None).unwrap();
        graph.add_child(a, "a2", None).unwrap();
        graph.add_child(b, "b1", None).unwrap();
        graph.add_child(a1, "a1x", None).unwrap();
        graph
    }

    fn collect(iter: DownwardsIterator<'_>) -> Vec<String> {
        iter.map(|node| node.name().name().to_string()).collect()
    }

    #[test]
    fn test_breadth_first_order() {
        let graph = build_graph();
        let names = collect(graph.downwards(graph.root(), TraversalOrder::BreadthFirst, false));
        assert_eq!(names, ["a", "b", "a1", "a2", "b1", "a1x"]);
    }

    #[test]
    fn test_depth_first_order() {
        let graph = build_graph();
        let names = collect(graph.downwards(graph.root(), TraversalOrder::DepthFirst, false));
        assert_eq!(names, ["a", "a1", "a1x", "a2", "b", "b1"]);
    }

    #[test]
    fn test_include_start_and_subtree_only() {
        let graph = build_graph();
        let a = graph.find("a").unwrap();

        let names = collect(graph.downwards(a, TraversalOrder::DepthFirst, true));
        assert_eq!(names, ["a", "a1", "a1x", "a2"]);

        let names = collect(graph.downwards(a, TraversalOrder::BreadthFirst, true));
        assert_eq!(names, ["a", "a1", "a2", "a1x"]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let graph = build_graph();
        let first = collect(graph.downwards(graph.root(), TraversalOrder::BreadthFirst, true));
        let second = collect(graph.downwards(graph.root(), TraversalOrder::BreadthFirst, true));
        assert_eq!(first, second);
        assert_eq!(first.len(), graph.node_count());
    }

    #[test]
    fn test_pruning_depth_first() {
        let graph = build_graph();
        let mut iter = graph.downwards(graph.root(), TraversalOrder::DepthFirst, false);
        let mut names = Vec::new();
        while let Some(node) = iter.next() {
            names.push(node.name().name().to_string());
            if node.name().name() == "a1" {
                iter.ignore_node_descendants();
            }
        }
        assert_eq!(names, ["a", "a1", "a2", "b", "b1"]);
    }

    #[test]
    fn test_pruning_breadth_first() {
        let graph = build_graph();
        let mut iter = graph.downwards(graph.root(), TraversalOrder::BreadthFirst, false);
        let mut names = Vec::new();
        while let Some(node) = iter.next() {
            names.push(node.name().name().to_string());
            if node.name().name() == "a" {
                iter.ignore_node_descendants();
            }
        }
        assert_eq!(names, ["a", "b", "b1"]);
    }

    #[test]
    fn test_leaf_and_invalid_start() {
        let graph = build_graph();
        let leaf = graph.find("a/a1/a1x").unwrap();
        assert_eq!(graph.downwards(leaf, TraversalOrder::DepthFirst, false).count(), 0);
        assert_eq!(graph.downwards(leaf, TraversalOrder::DepthFirst, true).count(), 1);
        assert_eq!(graph.downwards(NodeIndex::INVALID, TraversalOrder::BreadthFirst, true).count(), 0);
    }
}
