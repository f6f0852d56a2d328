//! # Scene Graph
//!
//! An index-based hierarchical container for asset export pipelines.
//!
//! ## Features
//!
//! - **Parallel storage**: hierarchy, names and content live in separate
//!   arrays sharing one index
//! - **Path lookup**: fully-qualified, case-insensitive names resolved through
//!   a hash multimap
//! - **Checked mutation**: structural mistakes come back as errors instead of
//!   corrupting the graph
//! - **Lazy traversal**: breadth/depth-first descent with subtree pruning,
//!   child-only and ancestor views
//! - **Pipeline stages**: description-driven import and bone motion export
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use scene_graph::prelude::*;
//!
//! let mut graph = SceneGraph::new();
//! let hip = graph.add_child(graph.root(), "hip", Some(Arc::new(BoneData::default())))?;
//! let knee = graph.add_child(hip, "knee", Some(Arc::new(BoneData::default())))?;
//!
//! assert_eq!(graph.find("hip/knee"), Some(knee));
//! assert_eq!(graph.parent(knee), Some(hip));
//!
//! let bones: Vec<_> = graph
//!     .downwards(hip, TraversalOrder::BreadthFirst, true)
//!     .filter(|node| node.content_is::<BoneData>())
//!     .map(|node| node.name().path().to_string())
//!     .collect();
//! assert_eq!(bones, ["hip", "hip/knee"]);
//! # Ok::<(), SceneGraphError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod data_types;
pub mod export;
pub mod foundation;
pub mod import;
pub mod scene;

/// Common imports for graph users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneGraphConfig},
        data_types::{AnimationData, BoneData, MeshData, TransformData},
        export::{BoneMotion, ExportError, MotionCollector},
        import::{ImportError, SceneBuilder, SceneDescription},
        scene::{
            GraphObject, NodeContent, NodeFilter, NodeIndex, NodeName, SceneGraph,
            SceneGraphError, SceneNode, TraversalOrder,
        },
    };
}
