use glam::{Mat4, Vec3};
use slotmap::new_key_type;

use crate::{animation::AnimationValue, property::Animatable, scene::SceneKey};

new_key_type! {
    pub struct CameraKey;
}

/// A perspective camera looking from `position` towards `target`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub name: String,
    pub scene: SceneKey,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view, radians
    pub fov: f32,
    pub min_z: f32,
    pub max_z: f32,
}

#[derive(Clone, Debug)]
pub struct CameraMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    pub position_world: Vec3,
}

impl CameraMatrices {
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn inv_view_projection(&self) -> Mat4 {
        self.view_projection().inverse()
    }
}

impl Camera {
    pub fn new(name: impl Into<String>, scene: SceneKey, position: Vec3, target: Vec3) -> Self {
        Self {
            name: name.into(),
            scene,
            position,
            target,
            up: Vec3::Y,
            fov: 0.8,
            min_z: 0.1,
            max_z: 1000.0,
        }
    }

    /// Returns a right-handed look-at view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect_ratio, self.min_z, self.max_z)
    }

    pub fn matrices(&self, aspect_ratio: f32) -> CameraMatrices {
        CameraMatrices {
            view: self.view_matrix(),
            projection: self.projection_matrix(aspect_ratio),
            position_world: self.position,
        }
    }
}

impl Animatable for Camera {
    fn get_property(&self, name: &str) -> Option<AnimationValue> {
        match name {
            "position" => Some(self.position.into()),
            "target" => Some(self.target.into()),
            "up" => Some(self.up.into()),
            "fov" => Some(self.fov.into()),
            "min_z" => Some(self.min_z.into()),
            "max_z" => Some(self.max_z.into()),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: AnimationValue) -> bool {
        match (name, value) {
            ("position", AnimationValue::Vector3(v)) => self.position = v,
            ("target", AnimationValue::Vector3(v)) => self.target = v,
            ("up", AnimationValue::Vector3(v)) => self.up = v,
            ("fov", AnimationValue::Float(f)) => self.fov = f,
            ("min_z", AnimationValue::Float(f)) => self.min_z = f,
            ("max_z", AnimationValue::Float(f)) => self.max_z = f,
            _ => return false,
        }
        true
    }

    fn property_list(&self) -> &'static [&'static str] {
        &["position", "target", "up", "fov", "min_z", "max_z"]
    }
}
