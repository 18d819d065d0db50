//! Lightweight handles for controlling running animations.
//!
//! Handles are plain keys, all control goes through the engine that owns the
//! animation. Operating on a handle whose animation is gone returns an error.
//! A group is released once it has reported completion, its members stay
//! behind as ungrouped animations.

use crate::AwsmEngine;

use super::{
    animations::{AnimationCallback, AnimationGroupKey, AnimationKey},
    error::{AwsmAnimationError, Result},
    player::{AnimationPlayer, AnimationState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(pub AnimationKey);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationGroupHandle(pub AnimationGroupKey);

impl AnimationHandle {
    pub fn key(&self) -> AnimationKey {
        self.0
    }

    /// Ends the animation where it is, completion callbacks do not run.
    ///
    /// Inside a group the stopped member counts as ended, so the group still
    /// completes once the other members finish, or on the next update if they
    /// already have. Use
    /// [`AnimationGroupHandle::stop`] to cancel the whole group.
    pub fn stop(&self, engine: &mut AwsmEngine) -> Result<()> {
        player_mut(engine, self.0)?.stop();
        if let Some(group) = engine.animations.group_of(self.0) {
            engine.animations.queue_group_check(group);
        }
        Ok(())
    }

    pub fn pause(&self, engine: &mut AwsmEngine) -> Result<()> {
        player_mut(engine, self.0)?.pause();
        Ok(())
    }

    pub fn resume(&self, engine: &mut AwsmEngine) -> Result<()> {
        player_mut(engine, self.0)?.play();
        Ok(())
    }

    pub fn restart(&self, engine: &mut AwsmEngine) -> Result<()> {
        player_mut(engine, self.0)?.restart();
        if let Some(group) = engine.animations.group_of(self.0) {
            engine.animations.group_mut(group)?.ended = false;
        }
        Ok(())
    }

    pub fn state(&self, engine: &AwsmEngine) -> Option<AnimationState> {
        engine.animations.get(self.0).map(|player| player.state())
    }

    pub fn is_playing(&self, engine: &AwsmEngine) -> bool {
        self.state(engine) == Some(AnimationState::Playing)
    }

    pub fn on_end(
        &self,
        engine: &mut AwsmEngine,
        callback: impl FnMut(&mut AwsmEngine) + 'static,
    ) -> Result<()> {
        engine.animations.on_end(self.0, Box::new(callback))
    }
}

impl AnimationGroupHandle {
    pub fn key(&self) -> AnimationGroupKey {
        self.0
    }

    pub fn members(&self, engine: &AwsmEngine) -> Vec<AnimationHandle> {
        engine
            .animations
            .group_members(self.0)
            .map(|members| members.iter().copied().map(AnimationHandle).collect())
            .unwrap_or_default()
    }

    /// Stops every member. Unlike stopping members one by one, the group is
    /// marked finished and never reports completion. It stays registered so
    /// [`restart`](Self::restart) can re-arm it.
    pub fn stop(&self, engine: &mut AwsmEngine) -> Result<()> {
        self.for_each_member(engine, |player| player.stop())?;
        engine.animations.group_mut(self.0)?.ended = true;
        Ok(())
    }

    pub fn pause(&self, engine: &mut AwsmEngine) -> Result<()> {
        self.for_each_member(engine, |player| player.pause())
    }

    pub fn resume(&self, engine: &mut AwsmEngine) -> Result<()> {
        self.for_each_member(engine, |player| player.play())
    }

    pub fn restart(&self, engine: &mut AwsmEngine) -> Result<()> {
        self.for_each_member(engine, |player| player.restart())?;
        engine.animations.group_mut(self.0)?.ended = false;
        Ok(())
    }

    /// Playing while any member plays, ended once every member has ended.
    pub fn state(&self, engine: &AwsmEngine) -> Option<AnimationState> {
        let members = engine.animations.group_members(self.0)?;
        let states: Vec<AnimationState> = members
            .iter()
            .filter_map(|key| engine.animations.get(*key).map(|player| player.state()))
            .collect();

        if states.contains(&AnimationState::Playing) {
            Some(AnimationState::Playing)
        } else if states.iter().all(|state| *state == AnimationState::Ended) {
            Some(AnimationState::Ended)
        } else {
            Some(AnimationState::Paused)
        }
    }

    pub fn is_playing(&self, engine: &AwsmEngine) -> bool {
        self.state(engine) == Some(AnimationState::Playing)
    }

    /// Runs once every member has ended, counting members stopped on their
    /// own. Not run after [`stop`](Self::stop) on the group.
    pub fn on_end(
        &self,
        engine: &mut AwsmEngine,
        callback: impl FnMut(&mut AwsmEngine) + 'static,
    ) -> Result<()> {
        let callback: AnimationCallback = Box::new(callback);
        engine.animations.on_group_end(self.0, callback)
    }

    fn for_each_member(
        &self,
        engine: &mut AwsmEngine,
        mut f: impl FnMut(&mut AnimationPlayer),
    ) -> Result<()> {
        let members = engine
            .animations
            .group_members(self.0)
            .ok_or(AwsmAnimationError::MissingGroup(self.0))?
            .to_vec();

        for key in members {
            if let Some(player) = engine.animations.get_mut(key) {
                f(player);
            }
        }

        Ok(())
    }
}

fn player_mut(engine: &mut AwsmEngine, key: AnimationKey) -> Result<&mut AnimationPlayer> {
    engine
        .animations
        .get_mut(key)
        .ok_or(AwsmAnimationError::MissingKey(key))
}
