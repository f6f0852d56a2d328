//! Scene export
//!
//! Stages that read a finished [`SceneGraph`](crate::scene::SceneGraph) and
//! pull domain data out of it.

mod motion;

pub use motion::{BoneMotion, ExportError, MotionCollector};
