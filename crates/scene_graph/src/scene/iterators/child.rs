//! Direct-children traversal

use std::iter::FusedIterator;

use super::{NodeFilter, SceneNode};
use crate::scene::{NodeIndex, SceneGraph};

/// Lazy walk over the direct children of one node, in insertion order
#[derive(Debug, Clone)]
pub struct ChildIterator<'a> {
    graph: &'a SceneGraph,
    next: Option<u32>,
    filter: NodeFilter,
}

impl<'a> ChildIterator<'a> {
    /// Walk the children of `parent` accepted by `filter`
    pub fn new(graph: &'a SceneGraph, parent: NodeIndex, filter: NodeFilter) -> Self {
        let next = graph
            .resolve(parent)
            .and_then(|offset| graph.header_at(offset as u32).first_child_offset());
        Self { graph, next, filter }
    }
}

impl<'a> Iterator for ChildIterator<'a> {
    type Item = SceneNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let offset = self.next?;
            let header = self.graph.header_at(offset);
            self.next = header.next_sibling_offset();
            if self.filter.accepts(header) {
                return Some(SceneNode::new(self.graph, offset));
            }
        }
    }
}

impl FusedIterator for ChildIterator<'_> {}
