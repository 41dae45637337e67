//! 2D vector helpers
//!
//! `Vector2` is glam's `Vec2`: add, subtract, scale and magnitude are the
//! operators `+`, `-`, `* k` and `length()`. Angles in this crate are degrees,
//! counter-clockwise, with 0° pointing along +x.

use glam::Vec2;

pub type Vector2 = Vec2;

/// Map any finite angle into [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Unit vector pointing along a heading
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Rotate a vector counter-clockwise around the origin
#[inline]
pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    heading(degrees).rotate(v)
}
