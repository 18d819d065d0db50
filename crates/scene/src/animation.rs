mod animations;
mod clip;
mod easing;
mod error;
mod handle;
mod interpolate;
mod player;
mod sampler;
mod value;

pub use animations::{AnimationCallback, AnimationGroupKey, AnimationKey, Animations};
pub use clip::AnimationClip;
pub use easing::{EasingFunction, EasingMode};
pub use error::AwsmAnimationError;
pub use handle::{AnimationGroupHandle, AnimationHandle};
pub use interpolate::*;
pub use player::{AnimationLoopStyle, AnimationPlayDirection, AnimationPlayer, AnimationState};
pub use sampler::{AnimationKeyframe, AnimationSampler};
pub use value::{AnimationKind, AnimationValue, Duplicable};

/// Reported by [`crate::AwsmEngine::update_animations`] in the order they fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// Played through to the end, not reported for stopped animations.
    Ended(AnimationKey),
    GroupEnded(AnimationGroupKey),
}
