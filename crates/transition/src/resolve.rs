use awsm_scene::{
    animation::{AnimationKind, AnimationValue, Duplicable},
    property::{Animatable, PropertyPath},
};

use crate::style::StyleValue;

/// Current value of a property or `outer.inner` component, as an independent
/// snapshot.
pub fn read_initial_value(target: &dyn Animatable, path: &PropertyPath) -> Option<AnimationValue> {
    path.read(target).map(|value| value.duplicate())
}

/// Converts a caller-supplied value into the shape of `initial`.
///
/// Numbers and numeric strings become floats, arrays build the vector or
/// color kind of `initial`, native values pass through. The result may still
/// be of a different kind than `initial`, callers must check. `None` when the
/// value cannot be turned into anything animatable.
pub fn coerce_value(initial: &AnimationValue, value: &StyleValue) -> Option<AnimationValue> {
    match value {
        StyleValue::Number(number) => Some(AnimationValue::Float(*number as f32)),
        StyleValue::Text(text) => text
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|number| number.is_finite())
            .map(AnimationValue::Float),
        StyleValue::Array(values) => match initial.kind() {
            AnimationKind::Float => None,
            kind => {
                let values: Vec<f32> = values.iter().map(|value| *value as f32).collect();
                kind.value_from_slice(&values)
            }
        },
        StyleValue::Native(native) => Some(native.duplicate()),
    }
}
