//! Keyframe sampling.

use std::cmp::Ordering;

use super::{easing::EasingFunction, value::AnimationValue};

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationKeyframe {
    pub frame: f64,
    pub value: AnimationValue,
}

impl AnimationKeyframe {
    pub fn new(frame: f64, value: impl Into<AnimationValue>) -> Self {
        Self {
            frame,
            value: value.into(),
        }
    }
}

/// Keyframes sorted by frame, interpolated linearly with an optional easing
/// applied to the gradient between neighbouring keys.
#[derive(Debug, Clone)]
pub struct AnimationSampler {
    keyframes: Vec<AnimationKeyframe>,
    easing: Option<EasingFunction>,
}

impl AnimationSampler {
    /// Returns `None` if there are no keyframes.
    pub fn new(
        mut keyframes: Vec<AnimationKeyframe>,
        easing: Option<EasingFunction>,
    ) -> Option<Self> {
        if keyframes.is_empty() {
            return None;
        }

        keyframes.sort_by(|a, b| a.frame.partial_cmp(&b.frame).unwrap_or(Ordering::Equal));

        Some(Self { keyframes, easing })
    }

    pub fn between(
        from: AnimationKeyframe,
        to: AnimationKeyframe,
        easing: Option<EasingFunction>,
    ) -> Self {
        let keyframes = if to.frame < from.frame {
            vec![to, from]
        } else {
            vec![from, to]
        };

        Self { keyframes, easing }
    }

    pub fn keyframes(&self) -> &[AnimationKeyframe] {
        &self.keyframes
    }

    pub fn easing(&self) -> Option<&EasingFunction> {
        self.easing.as_ref()
    }

    pub fn first_frame(&self) -> f64 {
        self.keyframes[0].frame
    }

    pub fn last_frame(&self) -> f64 {
        self.keyframes[self.keyframes.len() - 1].frame
    }

    pub fn first_value(&self) -> &AnimationValue {
        &self.keyframes[0].value
    }

    pub fn last_value(&self) -> &AnimationValue {
        &self.keyframes[self.keyframes.len() - 1].value
    }

    /// Samples the keyframes at the given (fractional) frame.
    pub fn sample(&self, frame: f64) -> AnimationValue {
        if frame <= self.first_frame() {
            return *self.first_value();
        }
        if frame >= self.last_frame() {
            return *self.last_value();
        }

        match self.binary_search_bounds(frame) {
            BinaryBounds::ExactHit(index) => self.keyframes[index].value,
            BinaryBounds::Between(left_index, right_index) => {
                let left = &self.keyframes[left_index];
                let right = &self.keyframes[right_index];

                let mut gradient = (frame - left.frame) / (right.frame - left.frame);
                if let Some(easing) = &self.easing {
                    gradient = easing.ease(gradient);
                }

                AnimationValue::interpolate_linear(&left.value, &right.value, gradient)
            }
        }
    }

    // BinaryBounds::ExactHit(usize) if the frame is exactly on a keyframe
    // BinaryBounds::Between(usize, usize) if the frame is between two keyframes
    // callers have already handled frames outside of the keyframe range
    fn binary_search_bounds(&self, frame: f64) -> BinaryBounds {
        match self
            .keyframes
            .binary_search_by(|k| k.frame.partial_cmp(&frame).unwrap_or(Ordering::Equal))
        {
            Ok(i) => BinaryBounds::ExactHit(i),
            Err(i) => {
                if i == 0 {
                    BinaryBounds::ExactHit(0)
                } else if i >= self.keyframes.len() {
                    BinaryBounds::ExactHit(self.keyframes.len() - 1)
                } else {
                    BinaryBounds::Between(i - 1, i)
                }
            }
        }
    }
}

enum BinaryBounds {
    ExactHit(usize),
    Between(usize, usize),
}
