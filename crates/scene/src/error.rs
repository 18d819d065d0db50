use thiserror::Error;

use crate::{animation::AwsmAnimationError, nodes::AwsmNodeError, target::AwsmTargetError};

#[derive(Error, Debug)]
pub enum AwsmError {
    #[error("{0}")]
    Node(#[from] AwsmNodeError),

    #[error("{0}")]
    Target(#[from] AwsmTargetError),

    #[error("{0}")]
    Animation(#[from] AwsmAnimationError),
}

pub type Result<T> = std::result::Result<T, AwsmError>;
