//! Ancestor traversal

use std::iter::FusedIterator;

use super::SceneNode;
use crate::scene::{NodeIndex, SceneGraph};

/// Walk from a node through each of its ancestors up to the root
#[derive(Debug, Clone)]
pub struct UpwardsIterator<'a> {
    graph: &'a SceneGraph,
    next: Option<u32>,
}

impl<'a> UpwardsIterator<'a> {
    /// Start at `node`; an invalid handle produces an empty walk
    pub fn new(graph: &'a SceneGraph, node: NodeIndex) -> Self {
        let next = graph.resolve(node).map(|offset| offset as u32);
        Self { graph, next }
    }
}

impl<'a> Iterator for UpwardsIterator<'a> {
    type Item = SceneNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.next?;
        self.next = self.graph.header_at(offset).parent_offset();
        Some(SceneNode::new(self.graph, offset))
    }
}

impl FusedIterator for UpwardsIterator<'_> {}
