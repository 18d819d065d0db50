use slotmap::new_key_type;

use crate::{
    animation::AnimationValue,
    color::{Color3, Color4},
    property::Animatable,
};

new_key_type! {
    pub struct SceneKey;
}

/// Scene-wide environment settings.
#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    pub clear_color: Color4,
    pub ambient_color: Color3,
    pub fog_color: Color3,
    pub fog_density: f32,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clear_color: Color4::new(0.2, 0.2, 0.3, 1.0),
            ambient_color: Color3::BLACK,
            fog_color: Color3::new(0.2, 0.2, 0.3),
            fog_density: 0.1,
        }
    }
}

impl Animatable for Scene {
    fn get_property(&self, name: &str) -> Option<AnimationValue> {
        match name {
            "clear_color" => Some(self.clear_color.into()),
            "ambient_color" => Some(self.ambient_color.into()),
            "fog_color" => Some(self.fog_color.into()),
            "fog_density" => Some(self.fog_density.into()),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: AnimationValue) -> bool {
        match (name, value) {
            ("clear_color", AnimationValue::Color4(c)) => self.clear_color = c,
            ("ambient_color", AnimationValue::Color3(c)) => self.ambient_color = c,
            ("fog_color", AnimationValue::Color3(c)) => self.fog_color = c,
            ("fog_density", AnimationValue::Float(f)) => self.fog_density = f,
            _ => return false,
        }
        true
    }

    fn property_list(&self) -> &'static [&'static str] {
        &["clear_color", "ambient_color", "fog_color", "fog_density"]
    }
}
