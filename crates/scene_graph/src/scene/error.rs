//! Scene graph error types

use super::NodeIndex;
use thiserror::Error;

/// Reasons a scene graph mutation is rejected
///
/// A rejected mutation leaves the graph unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneGraphError {
    /// The handle is out of range or was issued before the last clear
    #[error("Node index {0} is out of range or stale")]
    InvalidIndex(NodeIndex),

    /// Children cannot be added below an end point
    #[error("Node {node} is an end point and cannot receive children")]
    EndPoint {
        /// The end point that was targeted
        node: NodeIndex,
    },

    /// The local name is empty or contains the path separator
    #[error("Invalid node name '{0}'")]
    InvalidName(String),

    /// Another node already uses this fully-qualified path
    #[error("A node with path '{0}' already exists")]
    DuplicateName(String),

    /// The root has no parent, so it cannot have siblings
    #[error("Cannot add a sibling to the root node {node}")]
    RootSibling {
        /// The root handle that was passed
        node: NodeIndex,
    },

    /// Storage offsets are 32 bit
    #[error("Scene graph is full ({0} nodes)")]
    CapacityExceeded(usize),
}
