//! Triangle mesh payload

use crate::foundation::math::Vec3;
use crate::scene::GraphObject;

/// Indexed triangle list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Three indices per triangle
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a mesh payload
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Number of complete triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl GraphObject for MeshData {
    fn type_label(&self) -> &'static str {
        "MeshData"
    }
}
