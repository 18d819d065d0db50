use awsm_scene::{
    animation::{
        AnimationClip, AnimationGroupHandle, AnimationHandle, AnimationKey, AnimationKeyframe,
        AnimationSampler,
    },
    property::PropertyPath,
    target::AnimationTarget,
    AwsmEngine,
};

use crate::{
    easing::resolve_easing,
    error::Result,
    parser::TransitionSpec,
    resolve::{coerce_value, read_initial_value},
    style::StyleDeclaration,
};

/// Style key holding the transition string, never animated.
pub const TRANSITION_KEY: &str = "transition";

/// Starts one animation per style property and groups them.
///
/// The group completes once every started animation has ended. If no property
/// qualifies the group is empty and completes on the next update.
pub fn run_transition(
    engine: &mut AwsmEngine,
    target: impl Into<AnimationTarget>,
    style: &StyleDeclaration,
) -> Result<AnimationGroupHandle> {
    let keys = start_transitions(engine, target.into(), style)?;
    let group = engine.animations.insert_group(keys)?;

    Ok(AnimationGroupHandle(group))
}

/// Like [`run_transition`], but hands back one handle per started property.
pub fn run_transition_each(
    engine: &mut AwsmEngine,
    target: impl Into<AnimationTarget>,
    style: &StyleDeclaration,
) -> Result<Vec<AnimationHandle>> {
    let keys = start_transitions(engine, target.into(), style)?;

    Ok(keys.into_iter().map(AnimationHandle).collect())
}

/// Number of frames a transition of `duration_ms` spans at `frame_rate`.
pub fn frame_count(duration_ms: f64, frame_rate: f64) -> f64 {
    (duration_ms / 1000.0 * frame_rate).round().max(0.0)
}

fn start_transitions(
    engine: &mut AwsmEngine,
    target: AnimationTarget,
    style: &StyleDeclaration,
) -> Result<Vec<AnimationKey>> {
    let owner = engine.resolve_owner(target)?;
    let spec = TransitionSpec::parse(&style.transition);

    let mut keys = Vec::new();

    for (property, value) in style.properties() {
        if property == TRANSITION_KEY {
            continue;
        }

        let Some(entry) = spec.lookup(property) else {
            tracing::warn!(
                "no transition for {property} in {:?}, skipping",
                style.transition
            );
            continue;
        };

        let Some(path) = PropertyPath::parse(property) else {
            tracing::warn!("unsupported property path {property:?}, skipping");
            continue;
        };

        let animatable = engine.animatable(target)?;
        let Some(initial) = read_initial_value(animatable, &path) else {
            tracing::warn!(
                "{target:?} has no animatable property {path} (expected one of {:?}), skipping",
                animatable.property_list()
            );
            continue;
        };

        let Some(last) = coerce_value(&initial, value) else {
            tracing::warn!("cannot animate {path} to {value:?}, skipping");
            continue;
        };

        if last.kind() != initial.kind() {
            tracing::warn!(
                "{path} is {} but the target value is {}, skipping",
                initial.kind(),
                last.kind()
            );
            continue;
        }

        let frames = frame_count(entry.duration_ms, owner.frame_rate);

        let sampler = AnimationSampler::between(
            AnimationKeyframe::new(0.0, initial),
            AnimationKeyframe::new(frames, last),
            resolve_easing(&entry.easing),
        );

        let clip = AnimationClip::new(
            Some(format!("{property} transition")),
            path.clone(),
            owner.frame_rate,
            sampler,
        );

        let replaced = engine.animations.remove_property(target, &path);
        if !replaced.is_empty() {
            tracing::debug!("replacing {} animation(s) on {path}", replaced.len());
        }

        keys.push(engine.start_animation(target, clip, entry.delay_ms / 1000.0)?);
    }

    tracing::debug!(
        "started {} transition(s) on {target:?} in scene {:?}",
        keys.len(),
        owner.scene
    );

    Ok(keys)
}

#[cfg(test)]
mod tests;
