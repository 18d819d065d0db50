use glam::{Vec3, Vec4};

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color3 {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_slice(values: &[f32]) -> Option<Self> {
        match values {
            [r, g, b, ..] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::from(Vec3::from(self).lerp(Vec3::from(other), t))
    }

    pub fn with_alpha(self, a: f32) -> Color4 {
        Color4::new(self.r, self.g, self.b, a)
    }
}

impl Color4 {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_slice(values: &[f32]) -> Option<Self> {
        match values {
            [r, g, b, a, ..] => Some(Self::new(*r, *g, *b, *a)),
            _ => None,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::from(Vec4::from(self).lerp(Vec4::from(other), t))
    }
}

impl From<Color3> for Vec3 {
    fn from(c: Color3) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<Vec3> for Color3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Color4> for Vec4 {
    fn from(c: Color4) -> Self {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Vec4> for Color4 {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}
