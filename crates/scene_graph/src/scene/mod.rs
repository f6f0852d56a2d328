//! Scene graph container
//!
//! Stores an arbitrary tree of named, typed nodes for the asset pipeline.
//! Importers build the graph with [`SceneGraph::add_child`] and
//! [`SceneGraph::add_sibling`]; exporters resolve nodes by path and walk
//! them with the traversal views.
//!
//! ## Architecture
//!
//! ```text
//! NodeIndex ──► hierarchy[i]  (parent / first child / next sibling, flags)
//!           ├─► names[i]      (full path + local name offset)
//!           └─► contents[i]   (shared GraphObject payload)
//! path hash ──► [i, j, ...]   (collision bucket, compared case-insensitively)
//! ```

mod error;
mod graph_object;
mod node_header;
mod node_index;
mod node_name;
mod scene_graph;
pub mod iterators;

#[cfg(test)]
mod tests;

pub use error::SceneGraphError;
pub use graph_object::{AsAny, GraphObject, NodeContent};
pub use iterators::{
    ChildIterator, DownwardsIterator, NodeFilter, SceneNode, TraversalOrder, UpwardsIterator,
};
pub use node_header::{NodeFlags, NodeHeader};
pub use node_index::NodeIndex;
pub use node_name::NodeName;
pub use scene_graph::{SceneGraph, NODE_SEPARATOR};
