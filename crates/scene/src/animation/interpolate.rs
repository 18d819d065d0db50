use glam::{Mat4, Quat, Vec2, Vec3};

use crate::color::{Color3, Color4};

pub fn interpolate_linear_f32(first: f32, second: f32, t: f64) -> f32 {
    first + t as f32 * (second - first)
}

pub fn interpolate_linear_vec2(first: Vec2, second: Vec2, t: f64) -> Vec2 {
    first.lerp(second, t as f32)
}

pub fn interpolate_linear_vec3(first: Vec3, second: Vec3, t: f64) -> Vec3 {
    first.lerp(second, t as f32)
}

pub fn interpolate_linear_quat(first: Quat, second: Quat, t: f64) -> Quat {
    first.slerp(second, t as f32)
}

// decomposes into scale/rotation/translation, blends each part, recomposes
pub fn interpolate_linear_mat4(first: Mat4, second: Mat4, t: f64) -> Mat4 {
    let (first_scale, first_rotation, first_translation) = first.to_scale_rotation_translation();
    let (second_scale, second_rotation, second_translation) =
        second.to_scale_rotation_translation();

    Mat4::from_scale_rotation_translation(
        interpolate_linear_vec3(first_scale, second_scale, t),
        interpolate_linear_quat(first_rotation, second_rotation, t),
        interpolate_linear_vec3(first_translation, second_translation, t),
    )
}

pub fn interpolate_linear_color3(first: Color3, second: Color3, t: f64) -> Color3 {
    first.lerp(second, t as f32)
}

pub fn interpolate_linear_color4(first: Color4, second: Color4, t: f64) -> Color4 {
    first.lerp(second, t as f32)
}
