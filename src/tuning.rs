//! Gameplay tuning
//!
//! Every balance constant in one serde struct. Missing keys fall back to the
//! defaults in [`crate::consts`], so a tuning file only lists what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Target frame rate for the driver
    pub fps: f32,

    // === Player ===
    /// Velocity added per thrusting frame
    pub thrust: f32,
    /// Angular velocity (degrees/s) added per turning frame
    pub turn_rate: f32,
    /// Share of spin lost per reference frame (0 - 1)
    pub turn_friction: f32,
    /// Speed cap (0 = uncapped)
    pub player_max_speed: f32,
    pub max_health: f32,
    /// Shots per second
    pub fire_rate: f32,
    pub player_radius: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_range: f32,
    pub bullet_damage: f32,
    pub bullet_radius: f32,

    // === Planets ===
    pub planet_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fps: FPS,

            thrust: THRUST,
            turn_rate: TURN_RATE,
            turn_friction: TURN_FRICTION,
            player_max_speed: 0.0,
            max_health: MAX_HEALTH,
            fire_rate: FIRE_RATE,
            player_radius: PLAYER_RADIUS,

            bullet_speed: BULLET_SPEED,
            bullet_range: BULLET_RANGE,
            bullet_damage: BULLET_DAMAGE,
            bullet_radius: BULLET_RADIUS,

            planet_radius: PLANET_RADIUS,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> SimResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Seconds per frame at the target rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps
    }

    pub fn validate(&self) -> SimResult<()> {
        let positive = [
            ("fps", self.fps),
            ("max_health", self.max_health),
            ("fire_rate", self.fire_rate),
            ("bullet_speed", self.bullet_speed),
            ("bullet_range", self.bullet_range),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("thrust", self.thrust),
            ("turn_rate", self.turn_rate),
            ("player_max_speed", self.player_max_speed),
            ("bullet_damage", self.bullet_damage),
            ("player_radius", self.player_radius),
            ("bullet_radius", self.bullet_radius),
            ("planet_radius", self.planet_radius),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::Config(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.turn_friction) {
            return Err(SimError::Config(format!(
                "turn_friction must be within [0, 1], got {}",
                self.turn_friction
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.fire_rate, 2.0);
        assert_eq!(tuning.bullet_range, 500.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{"fire_rate": 5, "bullet_damage": 35}"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.fire_rate, 5.0);
        assert_eq!(tuning.bullet_damage, 35.0);
        assert_eq!(tuning.max_health, MAX_HEALTH);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Tuning::from_json(r#"{"fire_rate": 0}"#),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{"turn_friction": 1.5}"#),
            Err(SimError::Config(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{"warp_speed": 9}"#),
            Err(SimError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = "/nonexistent/space-game-tuning.json";
        let err = Tuning::load(path).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
