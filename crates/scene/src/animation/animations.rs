use std::fmt;

use slotmap::{new_key_type, DenseSlotMap, SecondaryMap, SlotMap};

use crate::{property::PropertyPath, target::AnimationTarget, AwsmEngine};

use super::{
    clip::AnimationClip,
    error::{AwsmAnimationError, Result},
    player::{AnimationPlayer, AnimationState},
    AnimationEvent,
};

new_key_type! {
    pub struct AnimationKey;
    pub struct AnimationGroupKey;
}

/// Invoked once per completion, after the frame's values have been written.
pub type AnimationCallback = Box<dyn FnMut(&mut AwsmEngine)>;

#[derive(Debug, Clone, Default)]
pub(crate) struct AnimationGroup {
    pub members: Vec<AnimationKey>,
    // set once the group has reported completion (or was stopped as a whole)
    pub ended: bool,
}

/// Every animation attached to a target, with its player and completion hooks.
#[derive(Default)]
pub struct Animations {
    pub(crate) players: DenseSlotMap<AnimationKey, AnimationPlayer>,
    pub(crate) targets: SecondaryMap<AnimationKey, AnimationTarget>,
    pub(crate) groups: SlotMap<AnimationGroupKey, AnimationGroup>,
    pub(crate) membership: SecondaryMap<AnimationKey, AnimationGroupKey>,
    pub(crate) callbacks: SecondaryMap<AnimationKey, Vec<AnimationCallback>>,
    pub(crate) group_callbacks: SecondaryMap<AnimationGroupKey, Vec<AnimationCallback>>,
    // groups that lost a member, re-checked for completion on the next update
    pending_groups: Vec<AnimationGroupKey>,
}

impl fmt::Debug for Animations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animations")
            .field("players", &self.players.len())
            .field("groups", &self.groups.len())
            .finish()
    }
}

impl Animations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn insert(&mut self, target: AnimationTarget, player: AnimationPlayer) -> AnimationKey {
        let key = self.players.insert(player);
        self.targets.insert(key, target);
        key
    }

    pub fn insert_group(&mut self, members: Vec<AnimationKey>) -> Result<AnimationGroupKey> {
        for key in &members {
            if !self.players.contains_key(*key) {
                return Err(AwsmAnimationError::MissingKey(*key));
            }
            if self.membership.contains_key(*key) {
                return Err(AwsmAnimationError::AlreadyGrouped(*key));
            }
        }

        let group_key = self.groups.insert(AnimationGroup {
            members: members.clone(),
            ended: false,
        });

        // nothing will end to trigger the check, so queue it
        if members.is_empty() {
            self.pending_groups.push(group_key);
        }

        for key in members {
            self.membership.insert(key, group_key);
        }

        Ok(group_key)
    }

    pub fn remove(&mut self, key: AnimationKey) -> Option<AnimationPlayer> {
        let player = self.players.remove(key)?;
        self.targets.remove(key);
        self.callbacks.remove(key);

        if let Some(group_key) = self.membership.remove(key) {
            let now_empty = match self.groups.get_mut(group_key) {
                Some(group) => {
                    group.members.retain(|member| *member != key);
                    group.members.is_empty()
                }
                None => false,
            };
            if now_empty {
                self.groups.remove(group_key);
                self.group_callbacks.remove(group_key);
            } else {
                self.pending_groups.push(group_key);
            }
        }

        Some(player)
    }

    /// Removes every animation driving `path` on `target`, returns the removed keys.
    /// Removes the group and its completion callbacks. The members keep
    /// running as ungrouped animations.
    pub fn remove_group(&mut self, group: AnimationGroupKey) -> Option<Vec<AnimationKey>> {
        let removed = self.groups.remove(group)?;
        self.group_callbacks.remove(group);
        for key in &removed.members {
            self.membership.remove(*key);
        }
        Some(removed.members)
    }

    pub fn remove_property(
        &mut self,
        target: AnimationTarget,
        path: &PropertyPath,
    ) -> Vec<AnimationKey> {
        let keys: Vec<AnimationKey> = self
            .players
            .iter()
            .filter(|(key, player)| {
                self.targets.get(*key) == Some(&target) && player.clip().property == *path
            })
            .map(|(key, _)| key)
            .collect();

        for key in &keys {
            self.remove(*key);
        }

        keys
    }

    pub fn remove_target(&mut self, target: AnimationTarget) -> Vec<AnimationKey> {
        let keys = self.keys_for_target(target);
        for key in &keys {
            self.remove(*key);
        }
        keys
    }

    /// The target's animation list.
    pub fn keys_for_target(&self, target: AnimationTarget) -> Vec<AnimationKey> {
        self.targets
            .iter()
            .filter(|(_, t)| **t == target)
            .map(|(key, _)| key)
            .collect()
    }

    pub fn get(&self, key: AnimationKey) -> Option<&AnimationPlayer> {
        self.players.get(key)
    }

    pub fn get_mut(&mut self, key: AnimationKey) -> Option<&mut AnimationPlayer> {
        self.players.get_mut(key)
    }

    pub fn target(&self, key: AnimationKey) -> Option<AnimationTarget> {
        self.targets.get(key).copied()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn group_of(&self, key: AnimationKey) -> Option<AnimationGroupKey> {
        self.membership.get(key).copied()
    }

    pub fn group_members(&self, group: AnimationGroupKey) -> Option<&[AnimationKey]> {
        self.groups.get(group).map(|group| group.members.as_slice())
    }

    pub fn on_end(&mut self, key: AnimationKey, callback: AnimationCallback) -> Result<()> {
        if !self.players.contains_key(key) {
            return Err(AwsmAnimationError::MissingKey(key));
        }
        match self.callbacks.get_mut(key) {
            Some(callbacks) => callbacks.push(callback),
            None => {
                self.callbacks.insert(key, vec![callback]);
            }
        }
        Ok(())
    }

    pub fn on_group_end(
        &mut self,
        group: AnimationGroupKey,
        callback: AnimationCallback,
    ) -> Result<()> {
        if !self.groups.contains_key(group) {
            return Err(AwsmAnimationError::MissingGroup(group));
        }
        match self.group_callbacks.get_mut(group) {
            Some(callbacks) => callbacks.push(callback),
            None => {
                self.group_callbacks.insert(group, vec![callback]);
            }
        }
        Ok(())
    }

    /// Re-checks the group for completion on the next update.
    pub(crate) fn queue_group_check(&mut self, group: AnimationGroupKey) {
        self.pending_groups.push(group);
    }

    pub(crate) fn group_mut(&mut self, group: AnimationGroupKey) -> Result<&mut AnimationGroup> {
        self.groups
            .get_mut(group)
            .ok_or(AwsmAnimationError::MissingGroup(group))
    }
}

impl AwsmEngine {
    /// Attaches a clip to a target and starts playing it.
    ///
    /// Other animations on the same property are left alone, see
    /// [`Animations::remove_property`].
    pub fn start_animation(
        &mut self,
        target: AnimationTarget,
        clip: AnimationClip,
        delay: f64,
    ) -> Result<AnimationKey> {
        // must exist and be attached to a scene
        self.resolve_owner(target)?;

        let mut player = AnimationPlayer::new(clip).with_delay(delay);
        player.play();

        Ok(self.animations.insert(target, player))
    }

    /// Advances every playing animation, writes the sampled values to their
    /// targets, then runs completion callbacks.
    pub fn update_animations(&mut self, global_time_delta: f64) -> Vec<AnimationEvent> {
        let _maybe_span_guard = if self.config.logging.animation_timings {
            Some(tracing::span!(tracing::Level::INFO, "Animations update").entered())
        } else {
            None
        };

        let mut writes = Vec::new();
        let mut ended = Vec::new();

        {
            let Animations {
                players, targets, ..
            } = &mut self.animations;

            for (key, player) in players.iter_mut() {
                if player.state() != AnimationState::Playing {
                    continue;
                }

                player.update(global_time_delta);

                if let (Some(value), Some(target)) = (player.sample(), targets.get(key)) {
                    writes.push((key, *target, player.clip().property.clone(), value));
                }

                if player.state() == AnimationState::Ended {
                    ended.push(key);
                }
            }
        }

        for (key, target, path, value) in writes {
            let written = match self.animatable_mut(target) {
                Ok(animatable) => path.write(animatable, value),
                Err(err) => {
                    tracing::warn!("dropping animation {key:?}: {err}");
                    self.animations.remove(key);
                    continue;
                }
            };

            if !written {
                tracing::warn!("animation {key:?} could not write {path} on {target:?}");
            }
        }

        let mut events: Vec<AnimationEvent> = Vec::new();
        let mut candidate_groups = Vec::new();

        for key in ended {
            if !self.animations.players.contains_key(key) {
                continue;
            }
            events.push(AnimationEvent::Ended(key));
            if let Some(group) = self.animations.membership.get(key) {
                candidate_groups.push(*group);
            }
        }

        candidate_groups.append(&mut self.animations.pending_groups);

        // taken out now, an `Ended` callback may empty and drop the group
        let mut completed_groups = Vec::new();

        for group_key in candidate_groups {
            let Some(group) = self.animations.groups.get(group_key) else {
                continue;
            };
            if group.ended {
                continue;
            }
            let all_ended = group.members.iter().all(|member| {
                self.animations
                    .players
                    .get(*member)
                    .map_or(true, |player| player.state() == AnimationState::Ended)
            });
            if all_ended {
                if let Some(group) = self.animations.groups.get_mut(group_key) {
                    group.ended = true;
                }
                let callbacks = self
                    .animations
                    .group_callbacks
                    .remove(group_key)
                    .unwrap_or_default();
                completed_groups.push((group_key, callbacks));
                events.push(AnimationEvent::GroupEnded(group_key));
            }
        }

        for event in &events {
            if let AnimationEvent::Ended(key) = *event {
                self.run_callbacks(key);
            }
        }

        for (group_key, callbacks) in completed_groups {
            self.run_group_callbacks(group_key, callbacks);
        }

        events
    }

    fn run_callbacks(&mut self, key: AnimationKey) {
        let Some(mut callbacks) = self.animations.callbacks.remove(key) else {
            return;
        };

        for callback in callbacks.iter_mut() {
            callback(self);
        }

        // the callbacks may have replaced this animation
        if self.animations.players.contains_key(key) {
            if let Some(added) = self.animations.callbacks.remove(key) {
                callbacks.extend(added);
            }
            self.animations.callbacks.insert(key, callbacks);
        }
    }

    // A completed group is dropped afterwards unless a callback restarted it.
    fn run_group_callbacks(
        &mut self,
        group: AnimationGroupKey,
        mut callbacks: Vec<AnimationCallback>,
    ) {
        for callback in callbacks.iter_mut() {
            callback(self);
        }

        let restarted = self
            .animations
            .groups
            .get(group)
            .map_or(false, |group| !group.ended);

        if restarted {
            if let Some(added) = self.animations.group_callbacks.remove(group) {
                callbacks.extend(added);
            }
            self.animations.group_callbacks.insert(group, callbacks);
        } else {
            self.animations.remove_group(group);
        }
    }
}
