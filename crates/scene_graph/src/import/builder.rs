//! Scene graph construction from descriptions

use thiserror::Error;

use super::{NodeDescription, SceneDescription};
use crate::config::{Config, ConfigError, SceneGraphConfig};
use crate::scene::{NodeIndex, SceneGraph, SceneGraphError, NODE_SEPARATOR};

/// Import errors
#[derive(Error, Debug)]
pub enum ImportError {
    /// The description file could not be read or parsed
    #[error("Failed to load scene description: {0}")]
    Config(#[from] ConfigError),

    /// The graph rejected a described node
    #[error("Failed to add node '{path}': {source}")]
    Node {
        /// Full path of the node that was rejected
        path: String,
        /// Why the graph rejected it
        #[source]
        source: SceneGraphError,
    },
}

/// Replays a [`SceneDescription`] into a fresh [`SceneGraph`]
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    config: SceneGraphConfig,
}

impl SceneBuilder {
    /// Create a builder producing graphs with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder producing graphs with the given settings
    pub fn with_config(config: SceneGraphConfig) -> Self {
        Self { config }
    }

    /// Load a TOML or RON description and build it
    pub fn load(&self, path: &str) -> Result<SceneGraph, ImportError> {
        let description = SceneDescription::load_from_file(path)?;
        log::info!("Loaded scene description '{}' ({} nodes)", path, description.node_count());
        self.build(&description)
    }

    /// Build a graph from a description
    ///
    /// Nodes are added depth-first in description order. The first rejected
    /// node aborts the build.
    pub fn build(&self, description: &SceneDescription) -> Result<SceneGraph, ImportError> {
        let mut graph = SceneGraph::with_config(&self.config);
        let root = graph.root();

        // Children are pushed in reverse so they pop in description order
        let mut pending: Vec<(NodeIndex, &NodeDescription)> =
            description.nodes.iter().rev().map(|node| (root, node)).collect();
        while let Some((parent, node)) = pending.pop() {
            let index = Self::add_node(&mut graph, parent, node)?;
            pending.extend(node.children.iter().rev().map(|child| (index, child)));
        }

        log::info!("Built scene graph with {} nodes", graph.node_count());
        log::debug!("Scene hierarchy:\n{}", graph.debug_tree());
        Ok(graph)
    }

    fn add_node(
        graph: &mut SceneGraph,
        parent: NodeIndex,
        description: &NodeDescription,
    ) -> Result<NodeIndex, ImportError> {
        let content = description.content.as_ref().map(|content| content.to_content());
        let index = graph
            .add_child(parent, &description.name, content)
            .map_err(|source| ImportError::Node {
                path: describe_path(graph, parent, &description.name),
                source,
            })?;

        // Marked before the children so a described end point with children is rejected.
        if description.end_point {
            graph.make_end_point(index);
        }
        Ok(index)
    }
}

fn describe_path(graph: &SceneGraph, parent: NodeIndex, name: &str) -> String {
    match graph.name(parent).map(|parent| parent.path()) {
        Some(parent_path) if !parent_path.is_empty() => {
            format!("{parent_path}{NODE_SEPARATOR}{name}")
        }
        _ => name.to_string(),
    }
}
