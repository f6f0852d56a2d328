//! Skeleton bone payload

use crate::foundation::math::Mat4;
use crate::scene::GraphObject;

/// A bone in a skeleton hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct BoneData {
    /// Bind pose in world space
    pub world_transform: Mat4,
}

impl BoneData {
    /// Create a bone with the given bind pose
    pub fn new(world_transform: Mat4) -> Self {
        Self { world_transform }
    }
}

impl Default for BoneData {
    fn default() -> Self {
        Self::new(Mat4::identity())
    }
}

impl GraphObject for BoneData {
    fn type_label(&self) -> &'static str {
        "BoneData"
    }
}
