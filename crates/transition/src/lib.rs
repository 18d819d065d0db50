//! CSS-style transitions for scene objects.
//!
//! A [`StyleDeclaration`] pairs property paths with target values and carries a
//! `transition` string such as `"position 1s ease-in-out, all 500ms linear"`.
//! [`run_transition`] reads each property's current value, keys a two-frame
//! animation towards the target value and starts it on the engine.

pub mod easing;
pub mod error;
pub mod parser;
pub mod resolve;
pub mod runner;
pub mod style;

pub use easing::{resolve_easing, EasingDescriptor};
pub use error::AwsmTransitionError;
pub use parser::{parse_transition, TransitionEntry, TransitionSpec};
pub use resolve::{coerce_value, read_initial_value};
pub use runner::{run_transition, run_transition_each};
pub use style::{StyleDeclaration, StyleValue};
