//! Local transform payload

use crate::foundation::math::Mat4;
use crate::scene::GraphObject;

/// Transform of a node relative to its parent
#[derive(Debug, Clone, PartialEq)]
pub struct TransformData {
    /// Local matrix
    pub matrix: Mat4,
}

impl TransformData {
    /// Create a transform payload
    pub fn new(matrix: Mat4) -> Self {
        Self { matrix }
    }
}

impl Default for TransformData {
    fn default() -> Self {
        Self::new(Mat4::identity())
    }
}

impl GraphObject for TransformData {
    fn type_label(&self) -> &'static str {
        "TransformData"
    }
}
