//! Shared motion state for every simulated object

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::vector::{heading, normalize_degrees};
use crate::consts::FPS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// World position
    pub loc: Vec2,
    /// Velocity (units/s)
    pub vel: Vec2,
    /// Heading in degrees, always in [0, 360)
    angle: f32,
    /// Turn rate (degrees/s)
    pub angular_vel: f32,
    /// Share of angular velocity lost per reference frame
    pub turn_friction: f32,
    /// Speed cap applied after thrust (0 = uncapped)
    pub max_speed: f32,
    pub bounds: Bounds,
}

impl Body {
    pub fn new(loc: Vec2, bounds: Bounds) -> Self {
        Self {
            loc,
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
            turn_friction: 0.0,
            max_speed: 0.0,
            bounds,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.set_angle(angle);
        self
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = normalize_degrees(angle);
    }

    /// Unit vector along the current heading
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading(self.angle)
    }

    /// Advance position and heading by `dt` seconds, then bleed off spin
    pub fn integrate(&mut self, dt: f32) {
        self.loc += self.vel * dt;
        self.set_angle(self.angle + self.angular_vel * dt);
        if self.turn_friction > 0.0 && dt > 0.0 {
            let keep = (1.0 - self.turn_friction).clamp(0.0, 1.0);
            self.angular_vel *= keep.powf(dt * FPS);
        }
    }

    /// Add `magnitude` of velocity along the current heading
    pub fn push_forward(&mut self, magnitude: f32) {
        self.vel += self.forward() * magnitude;
        if self.max_speed > 0.0 {
            self.vel = self.vel.clamp_length_max(self.max_speed);
        }
    }

    /// Clockwise
    pub fn turn_right(&mut self, rate: f32) {
        self.angular_vel -= rate;
    }

    /// Counter-clockwise
    pub fn turn_left(&mut self, rate: f32) {
        self.angular_vel += rate;
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        self.bounds.overlaps(self.loc, &other.bounds, other.loc)
    }

    /// Reset to rest at the world origin
    pub fn reset_motion(&mut self) {
        self.loc = Vec2::ZERO;
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body() -> Body {
        Body::new(Vec2::new(10.0, -5.0), Bounds::circle(1.0))
    }

    #[test]
    fn test_integrate_moves_by_velocity() {
        let mut b = body();
        b.vel = Vec2::new(100.0, 50.0);
        b.integrate(0.5);
        assert_eq!(b.loc, Vec2::new(60.0, 20.0));
    }

    #[test]
    fn test_push_forward_along_heading() {
        let mut b = body().with_angle(90.0);
        b.push_forward(10.0);
        assert!(b.vel.x.abs() < 1e-4);
        assert!((b.vel.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_push_forward_respects_max_speed() {
        let mut b = body();
        b.max_speed = 15.0;
        b.push_forward(10.0);
        b.push_forward(10.0);
        assert!((b.vel.length() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_turn_friction_decays_spin() {
        let mut b = body();
        b.turn_friction = 0.3;
        b.turn_left(90.0);
        b.integrate(1.0 / FPS);
        assert!((b.angular_vel - 63.0).abs() < 1e-3);
        for _ in 0..200 {
            b.integrate(1.0 / FPS);
        }
        assert!(b.angular_vel.abs() < 1e-3);
    }

    #[test]
    fn test_turn_right_wraps_below_zero() {
        let mut b = body();
        b.turn_right(90.0);
        b.integrate(0.5);
        assert!((b.angle() - 315.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn zero_delta_changes_nothing(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            angle in -1000.0f32..1000.0,
            spin in -720.0f32..720.0,
        ) {
            let mut b = body().with_angle(angle);
            b.vel = Vec2::new(vx, vy);
            b.angular_vel = spin;
            b.turn_friction = 0.3;
            let before = b.clone();
            b.integrate(0.0);
            prop_assert_eq!(b, before);
        }

        #[test]
        fn angle_stays_normalized(
            turns in proptest::collection::vec((-720.0f32..720.0, 0.0f32..1.0), 1..40),
        ) {
            let mut b = body();
            for (rate, dt) in turns {
                if rate >= 0.0 {
                    b.turn_left(rate)
                } else {
                    b.turn_right(-rate)
                }
                b.integrate(dt);
                prop_assert!((0.0..360.0).contains(&b.angle()));
            }
        }
    }
}
