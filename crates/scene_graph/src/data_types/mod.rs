//! Payload types attached to scene graph nodes
//!
//! These are the concrete [`GraphObject`](crate::scene::GraphObject)s the
//! import and export stages agree on. The graph itself never looks inside
//! them.

mod animation;
mod bone;
mod mesh;
mod transform;

pub use animation::AnimationData;
pub use bone::BoneData;
pub use mesh::MeshData;
pub use transform::TransformData;
