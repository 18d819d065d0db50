//! Values that can be keyed and interpolated.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::color::{Color3, Color4};

use super::interpolate::{
    interpolate_linear_color3, interpolate_linear_color4, interpolate_linear_f32,
    interpolate_linear_mat4, interpolate_linear_quat, interpolate_linear_vec2,
    interpolate_linear_vec3,
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationValue {
    Float(f32),
    Vector2(Vec2),
    Vector3(Vec3),
    Quaternion(Quat),
    Matrix(Mat4),
    Color3(Color3),
    Color4(Color4),
}

/// Interpolation kind of an [`AnimationValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum AnimationKind {
    Float,
    Vector2,
    Vector3,
    Quaternion,
    Matrix,
    Color3,
    Color4,
}

impl AnimationKind {
    /// Number of scalars needed to build a value of this kind from a flat array.
    pub fn arity(self) -> usize {
        match self {
            Self::Float => 1,
            Self::Vector2 => 2,
            Self::Vector3 | Self::Color3 => 3,
            Self::Quaternion | Self::Color4 => 4,
            Self::Matrix => 16,
        }
    }

    /// Builds a value of this kind from a flat array (column-major for matrices).
    ///
    /// Extra trailing elements are ignored, too few yields `None`.
    pub fn value_from_slice(self, values: &[f32]) -> Option<AnimationValue> {
        if values.len() < self.arity() {
            return None;
        }

        Some(match self {
            Self::Float => AnimationValue::Float(values[0]),
            Self::Vector2 => AnimationValue::Vector2(Vec2::from_slice(values)),
            Self::Vector3 => AnimationValue::Vector3(Vec3::from_slice(values)),
            Self::Quaternion => AnimationValue::Quaternion(Quat::from_slice(values)),
            Self::Matrix => AnimationValue::Matrix(Mat4::from_cols_slice(values)),
            Self::Color3 => AnimationValue::Color3(Color3::from_slice(values)?),
            Self::Color4 => AnimationValue::Color4(Color4::from_slice(values)?),
        })
    }
}

impl AnimationValue {
    pub fn kind(&self) -> AnimationKind {
        match self {
            Self::Float(_) => AnimationKind::Float,
            Self::Vector2(_) => AnimationKind::Vector2,
            Self::Vector3(_) => AnimationKind::Vector3,
            Self::Quaternion(_) => AnimationKind::Quaternion,
            Self::Matrix(_) => AnimationKind::Matrix,
            Self::Color3(_) => AnimationKind::Color3,
            Self::Color4(_) => AnimationKind::Color4,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Reads a named scalar component: `x y z w` on vectors and quaternions,
    /// `r g b a` on colors.
    pub fn component(&self, name: &str) -> Option<f32> {
        match (self, name) {
            (Self::Vector2(v), "x") => Some(v.x),
            (Self::Vector2(v), "y") => Some(v.y),
            (Self::Vector3(v), "x") => Some(v.x),
            (Self::Vector3(v), "y") => Some(v.y),
            (Self::Vector3(v), "z") => Some(v.z),
            (Self::Quaternion(q), "x") => Some(q.x),
            (Self::Quaternion(q), "y") => Some(q.y),
            (Self::Quaternion(q), "z") => Some(q.z),
            (Self::Quaternion(q), "w") => Some(q.w),
            (Self::Color3(c), "r") => Some(c.r),
            (Self::Color3(c), "g") => Some(c.g),
            (Self::Color3(c), "b") => Some(c.b),
            (Self::Color4(c), "r") => Some(c.r),
            (Self::Color4(c), "g") => Some(c.g),
            (Self::Color4(c), "b") => Some(c.b),
            (Self::Color4(c), "a") => Some(c.a),
            _ => None,
        }
    }

    /// Returns a copy with one named component replaced, `None` if the
    /// component does not exist on this kind.
    pub fn with_component(mut self, name: &str, value: f32) -> Option<Self> {
        let slot = match (&mut self, name) {
            (Self::Vector2(v), "x") => &mut v.x,
            (Self::Vector2(v), "y") => &mut v.y,
            (Self::Vector3(v), "x") => &mut v.x,
            (Self::Vector3(v), "y") => &mut v.y,
            (Self::Vector3(v), "z") => &mut v.z,
            (Self::Quaternion(q), "x") => &mut q.x,
            (Self::Quaternion(q), "y") => &mut q.y,
            (Self::Quaternion(q), "z") => &mut q.z,
            (Self::Quaternion(q), "w") => &mut q.w,
            (Self::Color3(c), "r") => &mut c.r,
            (Self::Color3(c), "g") => &mut c.g,
            (Self::Color3(c), "b") => &mut c.b,
            (Self::Color4(c), "r") => &mut c.r,
            (Self::Color4(c), "g") => &mut c.g,
            (Self::Color4(c), "b") => &mut c.b,
            (Self::Color4(c), "a") => &mut c.a,
            _ => return None,
        };
        *slot = value;
        Some(self)
    }

    /// Linear interpolation between two values of the same kind.
    ///
    /// Mismatched kinds hold the first value.
    pub fn interpolate_linear(first: &Self, second: &Self, t: f64) -> Self {
        match (first, second) {
            (Self::Float(a), Self::Float(b)) => Self::Float(interpolate_linear_f32(*a, *b, t)),
            (Self::Vector2(a), Self::Vector2(b)) => {
                Self::Vector2(interpolate_linear_vec2(*a, *b, t))
            }
            (Self::Vector3(a), Self::Vector3(b)) => {
                Self::Vector3(interpolate_linear_vec3(*a, *b, t))
            }
            (Self::Quaternion(a), Self::Quaternion(b)) => {
                Self::Quaternion(interpolate_linear_quat(*a, *b, t))
            }
            (Self::Matrix(a), Self::Matrix(b)) => Self::Matrix(interpolate_linear_mat4(*a, *b, t)),
            (Self::Color3(a), Self::Color3(b)) => {
                Self::Color3(interpolate_linear_color3(*a, *b, t))
            }
            (Self::Color4(a), Self::Color4(b)) => {
                Self::Color4(interpolate_linear_color4(*a, *b, t))
            }
            _ => *first,
        }
    }
}

/// Capability to hand out an independent snapshot of a value.
///
/// Initial keyframes are captured through this so later in-place mutation of
/// the live property cannot leak into the keyframe.
pub trait Duplicable {
    fn duplicate(&self) -> Self;
}

impl Duplicable for f32 {
    fn duplicate(&self) -> Self {
        *self
    }
}

impl Duplicable for Vec2 {
    fn duplicate(&self) -> Self {
        Vec2::new(self.x, self.y)
    }
}

impl Duplicable for Vec3 {
    fn duplicate(&self) -> Self {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl Duplicable for Quat {
    fn duplicate(&self) -> Self {
        Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }
}

impl Duplicable for Mat4 {
    fn duplicate(&self) -> Self {
        Mat4::from_cols_array(&self.to_cols_array())
    }
}

impl Duplicable for Color3 {
    fn duplicate(&self) -> Self {
        Color3::new(self.r, self.g, self.b)
    }
}

impl Duplicable for Color4 {
    fn duplicate(&self) -> Self {
        Color4::new(self.r, self.g, self.b, self.a)
    }
}

impl Duplicable for AnimationValue {
    fn duplicate(&self) -> Self {
        match self {
            Self::Float(v) => Self::Float(v.duplicate()),
            Self::Vector2(v) => Self::Vector2(v.duplicate()),
            Self::Vector3(v) => Self::Vector3(v.duplicate()),
            Self::Quaternion(v) => Self::Quaternion(v.duplicate()),
            Self::Matrix(v) => Self::Matrix(v.duplicate()),
            Self::Color3(v) => Self::Color3(v.duplicate()),
            Self::Color4(v) => Self::Color4(v.duplicate()),
        }
    }
}

impl From<f32> for AnimationValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<Vec2> for AnimationValue {
    fn from(value: Vec2) -> Self {
        Self::Vector2(value)
    }
}

impl From<Vec3> for AnimationValue {
    fn from(value: Vec3) -> Self {
        Self::Vector3(value)
    }
}

impl From<Quat> for AnimationValue {
    fn from(value: Quat) -> Self {
        Self::Quaternion(value)
    }
}

impl From<Mat4> for AnimationValue {
    fn from(value: Mat4) -> Self {
        Self::Matrix(value)
    }
}

impl From<Color3> for AnimationValue {
    fn from(value: Color3) -> Self {
        Self::Color3(value)
    }
}

impl From<Color4> for AnimationValue {
    fn from(value: Color4) -> Self {
        Self::Color4(value)
    }
}
