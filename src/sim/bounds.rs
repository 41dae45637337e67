//! Bounding geometry for collision tests
//!
//! Objects collide through a simplified shape rather than their sprite: a
//! circle, or an axis-aligned box centered on the object's location.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Bounds {
    Circle { radius: f32 },
    /// Axis-aligned box, half width and half height
    Box { half_extents: Vec2 },
}

impl Bounds {
    pub fn circle(radius: f32) -> Self {
        Bounds::Circle {
            radius: radius.abs(),
        }
    }

    /// Box matching a sprite's pixel size
    pub fn from_sprite_size(width: f32, height: f32) -> Self {
        Bounds::Box {
            half_extents: Vec2::new(width.abs(), height.abs()) / 2.0,
        }
    }

    /// Do the shapes placed at `a_pos` and `b_pos` overlap?
    ///
    /// Touching edges do not count.
    pub fn overlaps(&self, a_pos: Vec2, other: &Bounds, b_pos: Vec2) -> bool {
        match (*self, *other) {
            (Bounds::Circle { radius: ra }, Bounds::Circle { radius: rb }) => {
                let reach = ra + rb;
                a_pos.distance_squared(b_pos) < reach * reach
            }
            (Bounds::Box { half_extents: ha }, Bounds::Box { half_extents: hb }) => {
                let d = (a_pos - b_pos).abs();
                let reach = ha + hb;
                d.x < reach.x && d.y < reach.y
            }
            (Bounds::Circle { radius }, Bounds::Box { half_extents }) => {
                circle_box_overlap(a_pos, radius, b_pos, half_extents)
            }
            (Bounds::Box { half_extents }, Bounds::Circle { radius }) => {
                circle_box_overlap(b_pos, radius, a_pos, half_extents)
            }
        }
    }
}

fn circle_box_overlap(center: Vec2, radius: f32, box_pos: Vec2, half_extents: Vec2) -> bool {
    // Closest point on the box to the circle center
    let closest = center.clamp(box_pos - half_extents, box_pos + half_extents);
    center.distance_squared(closest) < radius * radius
}
