//! Sampled animation payload

use crate::foundation::math::Mat4;
use crate::scene::GraphObject;

/// Uniformly sampled local transforms for one node
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationData {
    key_frames: Vec<Mat4>,
    time_step: f64,
}

impl AnimationData {
    /// Create an animation sampled every `time_step` seconds
    pub fn new(key_frames: Vec<Mat4>, time_step: f64) -> Self {
        Self { key_frames, time_step }
    }

    /// Sampled transforms, one per frame
    pub fn key_frames(&self) -> &[Mat4] {
        &self.key_frames
    }

    /// Number of frames
    pub fn key_frame_count(&self) -> usize {
        self.key_frames.len()
    }

    /// Seconds between two frames
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Length of the animation in seconds
    pub fn duration(&self) -> f64 {
        self.key_frames.len().saturating_sub(1) as f64 * self.time_step
    }
}

impl GraphObject for AnimationData {
    fn type_label(&self) -> &'static str {
        "AnimationData"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duration() {
        let animation = AnimationData::new(vec![Mat4::identity(); 31], 1.0 / 30.0);
        assert_eq!(animation.key_frame_count(), 31);
        assert_relative_eq!(animation.duration(), 1.0, epsilon = 1e-9);

        let empty = AnimationData::new(Vec::new(), 0.5);
        assert_relative_eq!(empty.duration(), 0.0);
    }
}
