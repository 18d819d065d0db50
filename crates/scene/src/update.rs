use crate::{animation::AnimationEvent, AwsmEngine};

impl AwsmEngine {
    /// Convenience helper to run once per frame: advances animations, then
    /// refreshes world matrices so they reflect the values just written.
    pub fn update_all(&mut self, global_time_delta: f64) -> Vec<AnimationEvent> {
        let events = self.update_animations(global_time_delta);
        self.nodes.update_world();
        events
    }
}
