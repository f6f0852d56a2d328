//! Scene graph storage and mutation
//!
//! The graph is an append-only tree kept in four parallel stores indexed by
//! the same offset: hierarchy headers, fully-qualified names, content, and a
//! hash multimap from path hash to candidate offsets. Offset 0 is always the
//! root, which has an empty name.

use std::fmt::Write as _;
use std::hash::Hasher;

use rustc_hash::{FxHashMap, FxHasher};

use super::iterators::{
    ChildIterator, DownwardsIterator, NodeFilter, TraversalOrder, UpwardsIterator,
};
use super::node_header::NO_NODE;
use super::{NodeContent, NodeHeader, NodeIndex, NodeName, SceneGraphError};
use crate::config::SceneGraphConfig;

/// Character separating node names in a fully-qualified path
pub const NODE_SEPARATOR: char = '/';

const ROOT_OFFSET: u32 = 0;

/// Upper bound on the up-front reservation; stores still grow past it
const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// Hierarchical container of named, typed nodes
///
/// Nodes are created with [`add_child`](Self::add_child) and
/// [`add_sibling`](Self::add_sibling) and stay where they were put until
/// [`clear`](Self::clear) resets the graph to a lone root. Every node is
/// reachable in O(1) through its [`NodeIndex`] and, on average, through its
/// full path with [`find`](Self::find).
///
/// The graph does no internal locking; mutation takes `&mut self` and all
/// traversal views borrow it immutably.
#[derive(Debug)]
pub struct SceneGraph {
    hierarchy: Vec<NodeHeader>,
    names: Vec<NodeName>,
    contents: Vec<Option<NodeContent>>,
    name_lookup: FxHashMap<u64, Vec<u32>>,
    generation: u32,
    log_rejections: bool,
}

impl SceneGraph {
    /// Create a graph holding only the root node
    pub fn new() -> Self {
        Self::with_config(&SceneGraphConfig::default())
    }

    /// Create a graph with the given settings
    pub fn with_config(config: &SceneGraphConfig) -> Self {
        let capacity = config.initial_capacity.clamp(1, MAX_INITIAL_CAPACITY);
        let mut graph = Self {
            hierarchy: Vec::with_capacity(capacity),
            names: Vec::with_capacity(capacity),
            contents: Vec::with_capacity(capacity),
            name_lookup: FxHashMap::default(),
            generation: 0,
            log_rejections: config.log_rejections,
        };
        graph.add_default_root();
        graph
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Resolve a fully-qualified path, ignoring ASCII case
    ///
    /// The empty path resolves to the root.
    pub fn find(&self, path: &str) -> Option<NodeIndex> {
        self.lookup_offset(hash_path(path), path)
            .map(|offset| self.handle(offset))
    }

    /// Resolve `name` relative to `root`
    ///
    /// Returns `None` if `root` is not a valid handle for this graph.
    pub fn find_relative(&self, root: NodeIndex, name: &str) -> Option<NodeIndex> {
        let root = self.resolve(root)?;
        let path = combine_path(self.names[root].path(), name);
        self.find(&path)
    }

    /// First node, in breadth-first order from the root, accepted by `predicate`
    pub fn find_where<P>(&self, predicate: P) -> Option<NodeIndex>
    where
        P: FnMut(&NodeName, Option<&NodeContent>) -> bool,
    {
        self.find_where_under(self.root(), predicate)
    }

    /// First node in the subtree of `root` (inclusive) accepted by `predicate`
    pub fn find_where_under<P>(&self, root: NodeIndex, mut predicate: P) -> Option<NodeIndex>
    where
        P: FnMut(&NodeName, Option<&NodeContent>) -> bool,
    {
        self.downwards(root, TraversalOrder::BreadthFirst, true)
            .find(|node| predicate(node.name(), node.content()))
            .map(|node| node.index())
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a child named `name` under `parent`
    ///
    /// Children are kept as a sibling chain: if `parent` already has a child
    /// the new node is appended at the end of that chain.
    pub fn add_child(
        &mut self,
        parent: NodeIndex,
        name: &str,
        content: Option<NodeContent>,
    ) -> Result<NodeIndex, SceneGraphError> {
        let Some(parent_offset) = self.resolve(parent) else {
            return Err(self.reject(SceneGraphError::InvalidIndex(parent)));
        };

        let header = self.hierarchy[parent_offset];
        if header.is_end_point() {
            return Err(self.reject(SceneGraphError::EndPoint { node: parent }));
        }

        if let Some(first_child) = header.first_child_offset() {
            return self.add_sibling(self.handle(first_child), name, content);
        }

        let offset = self.append_node(parent_offset, name, content)?;
        self.hierarchy[parent_offset].set_first_child(offset);
        Ok(self.handle(offset))
    }

    /// Append a node at the end of the sibling chain containing `sibling`
    ///
    /// The new node shares the parent of `sibling`.
    pub fn add_sibling(
        &mut self,
        sibling: NodeIndex,
        name: &str,
        content: Option<NodeContent>,
    ) -> Result<NodeIndex, SceneGraphError> {
        let Some(sibling_offset) = self.resolve(sibling) else {
            return Err(self.reject(SceneGraphError::InvalidIndex(sibling)));
        };

        let Some(parent_offset) = self.hierarchy[sibling_offset].parent_offset() else {
            return Err(self.reject(SceneGraphError::RootSibling { node: sibling }));
        };
        let parent_offset = parent_offset as usize;
        if self.hierarchy[parent_offset].is_end_point() {
            let node = self.handle(parent_offset as u32);
            return Err(self.reject(SceneGraphError::EndPoint { node }));
        }

        let mut last = sibling_offset;
        while let Some(next) = self.hierarchy[last].next_sibling_offset() {
            last = next as usize;
        }

        let offset = self.append_node(parent_offset, name, content)?;
        self.hierarchy[last].set_next_sibling(offset);
        Ok(self.handle(offset))
    }

    /// Replace the content of `node`, returning `false` for an invalid handle
    ///
    /// Only the graph's reference to the previous content is released.
    pub fn set_content(&mut self, node: NodeIndex, content: Option<NodeContent>) -> bool {
        match self.resolve(node) {
            Some(offset) => {
                self.contents[offset] = content;
                true
            }
            None => {
                self.reject(SceneGraphError::InvalidIndex(node));
                false
            }
        }
    }

    /// Mark `node` as an end point, forbidding any further children
    ///
    /// There is no way to undo this.
    pub fn make_end_point(&mut self, node: NodeIndex) -> bool {
        match self.resolve(node) {
            Some(offset) => {
                self.hierarchy[offset].mark_end_point();
                true
            }
            None => {
                self.reject(SceneGraphError::InvalidIndex(node));
                false
            }
        }
    }

    /// Drop every node and reset to a lone root
    ///
    /// Handles issued before the clear are rejected afterwards.
    pub fn clear(&mut self) {
        log::debug!("Clearing scene graph with {} nodes", self.hierarchy.len());

        self.hierarchy.clear();
        self.names.clear();
        self.contents.clear();
        self.name_lookup.clear();
        self.generation = self.generation.wrapping_add(1);
        self.add_default_root();
    }

    /// Whether `name` can be used as a local node name
    ///
    /// A valid name is present, non-empty, and free of [`NODE_SEPARATOR`].
    pub fn is_valid_name(name: Option<&str>) -> bool {
        matches!(name, Some(name) if !name.is_empty() && !name.contains(NODE_SEPARATOR))
    }

    // ========================================================================
    // Node queries
    // ========================================================================

    /// Handle of the root node
    pub fn root(&self) -> NodeIndex {
        self.handle(ROOT_OFFSET)
    }

    /// Number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.hierarchy.len()
    }

    /// Whether `node` was issued by this graph since the last clear
    pub fn is_valid_index(&self, node: NodeIndex) -> bool {
        self.resolve(node).is_some()
    }

    /// Convert a storage offset into a handle
    pub fn index_at(&self, offset: usize) -> Option<NodeIndex> {
        (offset < self.hierarchy.len()).then(|| self.handle(offset as u32))
    }

    /// Parent of `node`
    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.header(node)?.parent_offset().map(|offset| self.handle(offset))
    }

    /// First child of `node`
    pub fn first_child(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.header(node)?.first_child_offset().map(|offset| self.handle(offset))
    }

    /// Next sibling of `node`
    pub fn next_sibling(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.header(node)?.next_sibling_offset().map(|offset| self.handle(offset))
    }

    /// Whether `node` has at least one child
    pub fn has_child(&self, node: NodeIndex) -> bool {
        self.header(node).is_some_and(NodeHeader::has_child)
    }

    /// Whether `node` has a next sibling
    pub fn has_sibling(&self, node: NodeIndex) -> bool {
        self.header(node).is_some_and(NodeHeader::has_sibling)
    }

    /// Whether `node` is an end point
    pub fn is_end_point(&self, node: NodeIndex) -> bool {
        self.header(node).is_some_and(NodeHeader::is_end_point)
    }

    /// Hierarchy record of `node`
    pub fn header(&self, node: NodeIndex) -> Option<&NodeHeader> {
        self.resolve(node).map(|offset| &self.hierarchy[offset])
    }

    /// Name of `node`
    pub fn name(&self, node: NodeIndex) -> Option<&NodeName> {
        self.resolve(node).map(|offset| &self.names[offset])
    }

    /// Content of `node`, if it has any
    pub fn content(&self, node: NodeIndex) -> Option<&NodeContent> {
        self.resolve(node).and_then(|offset| self.contents[offset].as_ref())
    }

    /// Whether `node` has content attached
    pub fn has_content(&self, node: NodeIndex) -> bool {
        self.content(node).is_some()
    }

    /// Generation counter, bumped on every clear
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The path separator character
    pub const fn separator() -> char {
        NODE_SEPARATOR
    }

    /// Hierarchy store, indexed by storage offset
    pub fn hierarchy_storage(&self) -> &[NodeHeader] {
        &self.hierarchy
    }

    /// Name store, indexed by storage offset
    pub fn name_storage(&self) -> &[NodeName] {
        &self.names
    }

    /// Content store, indexed by storage offset
    pub fn content_storage(&self) -> &[Option<NodeContent>] {
        &self.contents
    }

    // ========================================================================
    // Traversal views
    // ========================================================================

    /// Walk `start` and its descendants
    pub fn downwards(
        &self,
        start: NodeIndex,
        order: TraversalOrder,
        include_start: bool,
    ) -> DownwardsIterator<'_> {
        DownwardsIterator::new(self, start, order, include_start)
    }

    /// Walk the direct children of `parent`
    pub fn children(&self, parent: NodeIndex, filter: NodeFilter) -> ChildIterator<'_> {
        ChildIterator::new(self, parent, filter)
    }

    /// Walk from `node` up to the root
    pub fn upwards(&self, node: NodeIndex) -> UpwardsIterator<'_> {
        UpwardsIterator::new(self, node)
    }

    /// Indented dump of the whole hierarchy for log output
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        for node in self.downwards(self.root(), TraversalOrder::DepthFirst, true) {
            let depth = self.upwards(node.index()).count() - 1;
            let name = if depth == 0 { "<root>" } else { node.name().name() };
            let label = node.content().map_or("-", |content| content.type_label());
            let marker = if node.is_end_point() { " [end point]" } else { "" };
            let _ = writeln!(out, "{:indent$}{name} ({label}){marker}", "", indent = depth * 2);
        }
        out
    }

    // ========================================================================
    // Internals
    // ========================================================================

    pub(crate) fn resolve(&self, node: NodeIndex) -> Option<usize> {
        let offset = node.offset() as usize;
        (node.generation() == self.generation && offset < self.hierarchy.len()).then_some(offset)
    }

    pub(crate) const fn handle(&self, offset: u32) -> NodeIndex {
        NodeIndex::new(offset, self.generation)
    }

    pub(crate) fn header_at(&self, offset: u32) -> &NodeHeader {
        &self.hierarchy[offset as usize]
    }

    pub(crate) fn name_at(&self, offset: u32) -> &NodeName {
        &self.names[offset as usize]
    }

    pub(crate) fn content_at(&self, offset: u32) -> Option<&NodeContent> {
        self.contents[offset as usize].as_ref()
    }

    fn add_default_root(&mut self) {
        self.hierarchy.push(NodeHeader::default());
        self.names.push(NodeName::root());
        self.contents.push(None);
        self.name_lookup.entry(hash_path("")).or_default().push(ROOT_OFFSET);
    }

    /// Validate, name and push a new node into every store
    fn append_node(
        &mut self,
        parent_offset: usize,
        name: &str,
        content: Option<NodeContent>,
    ) -> Result<u32, SceneGraphError> {
        if !Self::is_valid_name(Some(name)) {
            return Err(self.reject(SceneGraphError::InvalidName(name.to_string())));
        }

        let path = combine_path(self.names[parent_offset].path(), name);
        let hash = hash_path(&path);
        if self.lookup_offset(hash, &path).is_some() {
            return Err(self.reject(SceneGraphError::DuplicateName(path)));
        }

        let count = self.hierarchy.len();
        let offset = match u32::try_from(count) {
            Ok(offset) if offset != NO_NODE => offset,
            _ => return Err(self.reject(SceneGraphError::CapacityExceeded(count))),
        };

        let name_offset = path.len() - name.len();
        self.hierarchy.push(NodeHeader::with_parent(parent_offset as u32));
        self.names.push(NodeName::new(path, name_offset));
        self.contents.push(content);
        self.name_lookup.entry(hash).or_default().push(offset);

        debug_assert_eq!(self.hierarchy.len(), self.names.len());
        debug_assert_eq!(self.hierarchy.len(), self.contents.len());
        Ok(offset)
    }

    /// Walk every candidate sharing `hash` and compare the full path
    fn lookup_offset(&self, hash: u64, path: &str) -> Option<u32> {
        self.name_lookup.get(&hash)?.iter().copied().find(|&offset| {
            self.names[offset as usize].path().eq_ignore_ascii_case(path)
        })
    }

    fn reject(&self, error: SceneGraphError) -> SceneGraphError {
        if self.log_rejections {
            log::warn!("Scene graph rejected mutation: {error}");
        } else {
            log::debug!("Scene graph rejected mutation: {error}");
        }
        error
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Join a parent path and a local name; top-level names get no leading separator
fn combine_path(parent_path: &str, name: &str) -> String {
    if parent_path.is_empty() {
        return name.to_string();
    }
    let mut path = String::with_capacity(parent_path.len() + 1 + name.len());
    path.push_str(parent_path);
    path.push(NODE_SEPARATOR);
    path.push_str(name);
    path
}

/// Case-insensitive path hash; equal paths up to ASCII case share a bucket
fn hash_path(path: &str) -> u64 {
    let mut hasher = FxHasher::default();
    for byte in path.bytes() {
        hasher.write_u8(byte.to_ascii_lowercase());
    }
    hasher.finish()
}
