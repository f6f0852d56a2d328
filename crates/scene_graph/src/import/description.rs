//! Serializable scene descriptions

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data_types::{AnimationData, BoneData, MeshData, TransformData};
use crate::foundation::math::{mat4_from_rows, mat4_to_rows, Vec3};
use crate::scene::{GraphObject, NodeContent, NodeIndex, SceneGraph, SceneNode, TraversalOrder};

/// Row-major 4x4 matrix as written in description files
pub type MatrixRows = [[f32; 4]; 4];

/// A whole scene: the top-level nodes below the graph root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Nodes attached directly to the root
    pub nodes: Vec<NodeDescription>,
}

impl Config for SceneDescription {}

impl SceneDescription {
    /// Describe an existing graph
    ///
    /// Content types without a description form are written without content.
    pub fn from_graph(graph: &SceneGraph) -> Self {
        Self {
            nodes: describe_children(graph, graph.root()),
        }
    }

    /// Total number of described nodes, not counting the root
    pub fn node_count(&self) -> usize {
        let mut pending: Vec<&NodeDescription> = self.nodes.iter().collect();
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(&node.children);
        }
        count
    }
}

/// One node and its subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Local name
    pub name: String,
    /// Whether the node is an end point
    #[serde(default)]
    pub end_point: bool,
    /// Payload attached to the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentDescription>,
    /// Child nodes in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDescription>,
}

impl NodeDescription {
    /// Create a node without content or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            end_point: false,
            content: None,
            children: Vec::new(),
        }
    }

    /// Attach content
    pub fn with_content(mut self, content: ContentDescription) -> Self {
        self.content = Some(content);
        self
    }

    /// Mark as end point
    pub fn end_point(mut self) -> Self {
        self.end_point = true;
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

/// Serializable form of the built-in payload types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentDescription {
    /// [`TransformData`]
    Transform {
        /// Local matrix
        matrix: MatrixRows,
    },
    /// [`BoneData`]
    Bone {
        /// Bind pose in world space
        world_transform: MatrixRows,
    },
    /// [`AnimationData`]
    Animation {
        /// Seconds between frames
        time_step: f64,
        /// One matrix per frame
        key_frames: Vec<MatrixRows>,
    },
    /// [`MeshData`]
    Mesh {
        /// Vertex positions
        positions: Vec<[f32; 3]>,
        /// Triangle indices
        indices: Vec<u32>,
    },
}

impl ContentDescription {
    /// Instantiate the payload
    pub fn to_content(&self) -> NodeContent {
        match self {
            Self::Transform { matrix } => Arc::new(TransformData::new(mat4_from_rows(matrix))),
            Self::Bone { world_transform } => {
                Arc::new(BoneData::new(mat4_from_rows(world_transform)))
            }
            Self::Animation { time_step, key_frames } => Arc::new(AnimationData::new(
                key_frames.iter().map(mat4_from_rows).collect(),
                *time_step,
            )),
            Self::Mesh { positions, indices } => Arc::new(MeshData::new(
                positions.iter().map(|p| Vec3::new(p[0], p[1], p[2])).collect(),
                indices.clone(),
            )),
        }
    }

    /// Describe a payload, if it is one of the built-in types
    pub fn from_content(content: &dyn GraphObject) -> Option<Self> {
        if let Some(transform) = content.downcast_ref::<TransformData>() {
            return Some(Self::Transform { matrix: mat4_to_rows(&transform.matrix) });
        }
        if let Some(bone) = content.downcast_ref::<BoneData>() {
            return Some(Self::Bone { world_transform: mat4_to_rows(&bone.world_transform) });
        }
        if let Some(animation) = content.downcast_ref::<AnimationData>() {
            return Some(Self::Animation {
                time_step: animation.time_step(),
                key_frames: animation.key_frames().iter().map(mat4_to_rows).collect(),
            });
        }
        content.downcast_ref::<MeshData>().map(|mesh| Self::Mesh {
            positions: mesh.positions.iter().map(|p| [p.x, p.y, p.z]).collect(),
            indices: mesh.indices.clone(),
        })
    }
}

/// Describe the subtree below `parent` without recursing per level
fn describe_children(graph: &SceneGraph, parent: NodeIndex) -> Vec<NodeDescription> {
    // Pre-order: every node appears after its parent and before its next sibling
    let order: Vec<SceneNode<'_>> = graph
        .downwards(parent, TraversalOrder::DepthFirst, false)
        .collect();
    let position: FxHashMap<NodeIndex, usize> = order
        .iter()
        .enumerate()
        .map(|(position, node)| (node.index(), position))
        .collect();

    let mut pending: Vec<Vec<NodeDescription>> = order.iter().map(|_| Vec::new()).collect();
    let mut top_level = Vec::new();

    // Reverse pre-order finishes every subtree before its parent
    for (at, node) in order.iter().enumerate().rev() {
        let mut children = std::mem::take(&mut pending[at]);
        children.reverse();

        let description = NodeDescription {
            name: node.name().name().to_string(),
            end_point: node.is_end_point(),
            content: node
                .content()
                .and_then(|content| ContentDescription::from_content(&**content)),
            children,
        };

        match graph.parent(node.index()).and_then(|p| position.get(&p)) {
            Some(&parent_at) => pending[parent_at].push(description),
            None => top_level.push(description),
        }
    }

    top_level.reverse();
    top_level
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKELETON_TOML: &str = r#"
[[nodes]]
name = "hip"
content = { Bone = { world_transform = [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0]] } }

[[nodes.children]]
name = "knee"

[[nodes.children]]
name = "motion"
end_point = true
content = { Animation = { time_step = 0.5, key_frames = [] } }

[[nodes]]
name = "body"
"#;

    #[test]
    fn test_parse_toml_description() {
        let description = SceneDescription::from_toml_str(SKELETON_TOML).unwrap();

        assert_eq!(description.nodes.len(), 2);
        assert_eq!(description.node_count(), 4);

        let hip = &description.nodes[0];
        assert!(matches!(hip.content, Some(ContentDescription::Bone { .. })));
        assert_eq!(hip.children[1].name, "motion");
        assert!(hip.children[1].end_point);
        assert!(!description.nodes[1].end_point);
    }

    #[test]
    fn test_parse_ron_description() {
        let text = r#"(
            nodes: [
                (name: "mesh", end_point: true, content: Some(Mesh(positions: [(0.0, 1.0, 2.0)], indices: [0]))),
            ],
        )"#;
        let description = SceneDescription::from_ron_str(text).unwrap();
        let node = &description.nodes[0];
        assert_eq!(node.name, "mesh");
        assert!(node.end_point);
        assert_eq!(
            node.content,
            Some(ContentDescription::Mesh { positions: vec![[0.0, 1.0, 2.0]], indices: vec![0] })
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let description = SceneDescription {
            nodes: vec![
                NodeDescription::new("rig")
                    .with_content(ContentDescription::Bone {
                        world_transform: mat4_to_rows(&crate::foundation::math::Mat4::identity()),
                    })
                    .with_child(NodeDescription::new("take").end_point().with_content(
                        ContentDescription::Animation {
                            time_step: 0.1,
                            key_frames: vec![mat4_to_rows(&crate::foundation::math::Mat4::identity()); 2],
                        },
                    )),
                NodeDescription::new("hull").with_content(ContentDescription::Mesh {
                    positions: vec![[0.0, 0.5, -1.25], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
                    indices: vec![0, 1, 2],
                }),
            ],
        };

        for extension in ["toml", "ron"] {
            let path = std::env::temp_dir().join(format!(
                "scene_graph_description_{}.{extension}",
                std::process::id()
            ));
            let path = path.to_string_lossy().into_owned();

            description.save_to_file(&path).unwrap();
            let loaded = SceneDescription::load_from_file(&path);
            let _ = std::fs::remove_file(&path);

            assert_eq!(loaded.unwrap(), description, "{extension} round trip");
        }
    }

    #[test]
    fn test_content_round_trip() {
        let description = ContentDescription::Animation {
            time_step: 0.25,
            key_frames: vec![mat4_to_rows(&crate::foundation::math::Mat4::identity())],
        };
        let content = description.to_content();
        assert_eq!(content.type_label(), "AnimationData");
        assert_eq!(ContentDescription::from_content(&*content), Some(description));
    }
}
