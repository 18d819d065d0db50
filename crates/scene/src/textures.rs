use glam::{Mat3, Vec2};
use slotmap::new_key_type;

use crate::{animation::AnimationValue, property::Animatable, scene::SceneKey};

new_key_type! {
    pub struct TextureKey;
}

/// Texture metadata; pixel data is owned elsewhere.
///
/// A texture may exist before it is attached to a scene, in which case it
/// cannot be animated.
#[derive(Clone, Debug)]
pub struct Texture {
    pub name: String,
    pub scene: Option<SceneKey>,
    pub level: f32,
    pub transform: TextureTransform,
}

impl Texture {
    pub fn new(name: impl Into<String>, scene: Option<SceneKey>) -> Self {
        Self {
            name: name.into(),
            scene,
            level: 1.0,
            transform: TextureTransform::identity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureTransform {
    pub offset: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl TextureTransform {
    pub fn identity() -> Self {
        Self {
            offset: Vec2::ZERO,
            origin: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }

    /// The affine uv transform as a 3x3 matrix (column-major).
    pub fn uv_matrix(&self) -> Mat3 {
        let c = self.rotation.cos();
        let s = self.rotation.sin();

        // M = R * S
        // rotation is counter-clockwise, with V pointing down:
        // [ cos   sin ] * [ sx  0  ]   =   [ cos*sx   sin*sy ]
        // [ -sin  cos ]   [ 0   sy ]       [ -sin*sx  cos*sy ]
        let m00 = c * self.scale.x;
        let m01 = s * self.scale.y;
        let m10 = -s * self.scale.x;
        let m11 = c * self.scale.y;

        // B = offset + origin - M * origin
        let px = self.origin.x;
        let py = self.origin.y;
        let bx = self.offset.x + px - (m00 * px + m01 * py);
        let by = self.offset.y + py - (m10 * px + m11 * py);

        Mat3::from_cols_array(&[m00, m10, 0.0, m01, m11, 0.0, bx, by, 1.0])
    }
}

impl Animatable for Texture {
    fn get_property(&self, name: &str) -> Option<AnimationValue> {
        match name {
            "level" => Some(self.level.into()),
            "offset" => Some(self.transform.offset.into()),
            "origin" => Some(self.transform.origin.into()),
            "rotation" => Some(self.transform.rotation.into()),
            "scale" => Some(self.transform.scale.into()),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: AnimationValue) -> bool {
        match (name, value) {
            ("level", AnimationValue::Float(f)) => self.level = f,
            ("offset", AnimationValue::Vector2(v)) => self.transform.offset = v,
            ("origin", AnimationValue::Vector2(v)) => self.transform.origin = v,
            ("rotation", AnimationValue::Float(f)) => self.transform.rotation = f,
            ("scale", AnimationValue::Vector2(v)) => self.transform.scale = v,
            _ => return false,
        }
        true
    }

    fn property_list(&self) -> &'static [&'static str] {
        &["level", "offset", "origin", "rotation", "scale"]
    }
}
