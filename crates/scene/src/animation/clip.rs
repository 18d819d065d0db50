use crate::property::PropertyPath;

use super::{sampler::AnimationSampler, value::AnimationKind};

/// Keyframes for a single property, timed in frames at `frame_rate`.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: Option<String>,
    pub property: PropertyPath,
    pub frame_rate: f64,
    pub sampler: AnimationSampler,
}

impl AnimationClip {
    pub fn new(
        name: Option<String>,
        property: PropertyPath,
        frame_rate: f64,
        sampler: AnimationSampler,
    ) -> Self {
        Self {
            name,
            property,
            frame_rate,
            sampler,
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.sampler.last_value().kind()
    }

    /// Duration in seconds, from frame 0 to the last keyframe.
    pub fn duration(&self) -> f64 {
        if self.frame_rate <= 0.0 {
            return 0.0;
        }
        self.sampler.last_frame().max(0.0) / self.frame_rate
    }
}
