//! Scene import
//!
//! Builds a [`SceneGraph`](crate::scene::SceneGraph) from a serialized scene
//! description, the way an importer replays a source asset's native
//! hierarchy.

mod builder;
mod description;

pub use builder::{ImportError, SceneBuilder};
pub use description::{ContentDescription, NodeDescription, SceneDescription};
