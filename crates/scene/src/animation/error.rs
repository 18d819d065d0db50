//! Animation error types and results.

use thiserror::Error;

use crate::target::AwsmTargetError;

use super::{AnimationGroupKey, AnimationKey};

/// Animation result type.
pub type Result<T> = std::result::Result<T, AwsmAnimationError>;

/// Errors related to animation playback and data.
#[derive(Error, Debug)]
pub enum AwsmAnimationError {
    #[error("[animation] {0}")]
    Target(#[from] AwsmTargetError),

    #[error("[animation] missing animation key {0:?}")]
    MissingKey(AnimationKey),

    #[error("[animation] missing animation group {0:?}")]
    MissingGroup(AnimationGroupKey),

    #[error("[animation] animation {0:?} already belongs to a group")]
    AlreadyGrouped(AnimationKey),
}
