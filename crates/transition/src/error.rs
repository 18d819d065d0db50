use awsm_scene::{animation::AwsmAnimationError, target::AwsmTargetError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsmTransitionError {
    #[error("[transition] unsupported target: {0}")]
    UnsupportedTarget(#[from] AwsmTargetError),

    #[error("[transition] {0}")]
    Animation(#[from] AwsmAnimationError),
}

pub type Result<T> = std::result::Result<T, AwsmTransitionError>;
