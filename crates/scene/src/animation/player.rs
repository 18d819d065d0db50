use super::{clip::AnimationClip, value::AnimationValue};

#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    pub speed: f64,
    pub loop_style: Option<AnimationLoopStyle>,
    // will change with ping-pong as each end is hit
    pub play_direction: AnimationPlayDirection,
    clip: AnimationClip,
    state: AnimationState,
    // seconds left before local time starts advancing
    delay: f64,
    delay_remaining: f64,
    local_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Playing,
    Paused,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationLoopStyle {
    Loop,
    PingPong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPlayDirection {
    Forward,
    Backward,
}

impl AnimationPlayer {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            speed: 1.0,
            loop_style: None,
            play_direction: AnimationPlayDirection::Forward,
            clip,
            state: AnimationState::Paused,
            delay: 0.0,
            delay_remaining: 0.0,
            local_time: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self.delay_remaining = self.delay;
        self
    }

    pub fn with_loop_style(mut self, loop_style: Option<AnimationLoopStyle>) -> Self {
        self.loop_style = loop_style;
        self
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn local_time(&self) -> f64 {
        self.local_time
    }

    pub fn is_delayed(&self) -> bool {
        self.delay_remaining > 0.0
    }

    pub fn play(&mut self) {
        if self.state != AnimationState::Ended {
            self.state = AnimationState::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.state == AnimationState::Playing {
            self.state = AnimationState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.state = AnimationState::Ended;
    }

    /// Rewinds to the start (including the delay) and plays.
    pub fn restart(&mut self) {
        self.play_direction = AnimationPlayDirection::Forward;
        self.delay_remaining = self.delay;
        self.local_time = 0.0;
        self.state = AnimationState::Playing;
    }

    pub fn update(&mut self, global_time_delta: f64) {
        if self.state != AnimationState::Playing {
            return;
        }

        let mut local_time_delta = global_time_delta * self.speed;

        if self.delay_remaining > 0.0 {
            if local_time_delta < self.delay_remaining {
                self.delay_remaining -= local_time_delta;
                return;
            }
            local_time_delta -= self.delay_remaining;
            self.delay_remaining = 0.0;
        }

        let duration = self.clip.duration();

        match self.play_direction {
            AnimationPlayDirection::Forward => {
                self.local_time += local_time_delta;
                if self.local_time >= duration {
                    match self.loop_style {
                        Some(AnimationLoopStyle::Loop) if duration > 0.0 => {
                            self.local_time = self.local_time.rem_euclid(duration);
                        }
                        Some(AnimationLoopStyle::PingPong) if duration > 0.0 => {
                            self.play_direction = AnimationPlayDirection::Backward;
                            self.local_time = duration;
                        }
                        _ => {
                            self.local_time = duration;
                            self.state = AnimationState::Ended;
                        }
                    }
                }
            }

            AnimationPlayDirection::Backward => {
                self.local_time -= local_time_delta;
                if self.local_time <= 0.0 {
                    match self.loop_style {
                        Some(AnimationLoopStyle::Loop) if duration > 0.0 => {
                            self.local_time = duration - self.local_time.rem_euclid(duration);
                        }
                        Some(AnimationLoopStyle::PingPong) if duration > 0.0 => {
                            self.play_direction = AnimationPlayDirection::Forward;
                            self.local_time = 0.0;
                        }
                        _ => {
                            self.local_time = 0.0;
                            self.state = AnimationState::Ended;
                        }
                    }
                }
            }
        }
    }

    /// Current value, `None` while still waiting out the delay.
    pub fn sample(&self) -> Option<AnimationValue> {
        if self.is_delayed() {
            return None;
        }

        if self.state == AnimationState::Ended {
            return Some(match self.play_direction {
                AnimationPlayDirection::Forward => *self.clip.sampler.last_value(),
                AnimationPlayDirection::Backward => *self.clip.sampler.first_value(),
            });
        }

        Some(self.clip.sampler.sample(self.local_time * self.clip.frame_rate))
    }
}
