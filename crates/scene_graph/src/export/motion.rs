//! Skeleton motion extraction
//!
//! Walks a skeleton breadth-first from its root bone and pairs every bone
//! with the animation stored in its end-point child.

use thiserror::Error;

use crate::data_types::{AnimationData, BoneData};
use crate::foundation::math::Mat4;
use crate::scene::{NodeFilter, NodeIndex, SceneGraph, SceneNode, TraversalOrder};

/// Export errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// No node has the requested root bone path
    #[error("Root bone '{0}' not found")]
    RootNotFound(String),

    /// The root bone path resolves to a node without bone content
    #[error("Node '{0}' is not a bone")]
    NotABone(String),

    /// A bone has more than one animation end point
    #[error("Bone '{bone}' has {count} animation tracks, expected at most one")]
    AmbiguousAnimation {
        /// Full path of the bone
        bone: String,
        /// Number of animation children found
        count: usize,
    },
}

/// Animation samples for one bone
#[derive(Debug, Clone, PartialEq)]
pub struct BoneMotion {
    /// Handle of the bone node
    pub bone: NodeIndex,
    /// Full path of the bone node
    pub path: String,
    /// Local transform per frame
    pub key_frames: Vec<Mat4>,
    /// Seconds between frames
    pub time_step: f64,
}

/// Collects bone animation from a skeleton hierarchy
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionCollector;

impl MotionCollector {
    /// Collect the motion of every animated bone below (and including) `root_bone`
    ///
    /// Branches whose node is not a bone are skipped entirely. Bones are
    /// returned in breadth-first order; bones without animation are left out.
    pub fn collect(graph: &SceneGraph, root_bone: &str) -> Result<Vec<BoneMotion>, ExportError> {
        let root = graph
            .find(root_bone)
            .ok_or_else(|| ExportError::RootNotFound(root_bone.to_string()))?;
        if !graph.content(root).is_some_and(|content| content.is::<BoneData>()) {
            return Err(ExportError::NotABone(root_bone.to_string()));
        }

        let mut motions = Vec::new();
        let mut bones = graph.downwards(root, TraversalOrder::BreadthFirst, true);
        while let Some(node) = bones.next() {
            if !node.content_is::<BoneData>() {
                bones.ignore_node_descendants();
                continue;
            }

            match Self::single_animation(graph, &node)? {
                Some(animation) => motions.push(BoneMotion {
                    bone: node.index(),
                    path: node.name().path().to_string(),
                    key_frames: animation.key_frames().to_vec(),
                    time_step: animation.time_step(),
                }),
                None => log::debug!("Bone '{}' has no animation", node.name()),
            }
        }

        log::info!("Collected motion for {} bones under '{}'", motions.len(), root_bone);
        Ok(motions)
    }

    fn single_animation<'a>(
        graph: &'a SceneGraph,
        bone: &SceneNode<'a>,
    ) -> Result<Option<&'a AnimationData>, ExportError> {
        let mut tracks = graph
            .children(bone.index(), NodeFilter::EndPointsOnly)
            .filter_map(|child| child.content_as::<AnimationData>());

        let first = tracks.next();
        let extra = tracks.count();
        if extra > 0 {
            return Err(ExportError::AmbiguousAnimation {
                bone: bone.name().path().to_string(),
                count: extra + 1,
            });
        }
        Ok(first)
    }
}
