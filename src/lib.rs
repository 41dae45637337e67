//! Space Game - entity, physics and collision core of a minimal arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, object lifecycle)
//! - `tuning`: Data-driven game balance
//! - `error`: Caller-contract errors
//!
//! Windowing, input devices and rendering live in the driver, which calls
//! [`sim::World::tick`] once per frame and reads back [`sim::ObjectData`].

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{SimError, SimResult};
pub use sim::{Vector2, heading, normalize_degrees, rotate};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference frame rate the driver targets
    pub const FPS: f32 = 90.0;
    /// Frame delta at the reference rate
    pub const SIM_DT: f32 = 1.0 / FPS;

    /// Player defaults
    pub const MAX_HEALTH: f32 = 100.0;
    pub const FIRE_RATE: f32 = 2.0; // shots per second
    pub const THRUST: f32 = 10.0;
    pub const TURN_RATE: f32 = 30.0; // degrees/s added per active frame
    pub const TURN_FRICTION: f32 = 0.3; // share of spin lost per frame at FPS
    pub const PLAYER_RADIUS: f32 = 24.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 500.0;
    pub const BULLET_RANGE: f32 = 500.0;
    pub const BULLET_DAMAGE: f32 = 20.0;
    pub const BULLET_RADIUS: f32 = 4.0;

    /// Planet defaults
    pub const PLANET_RADIUS: f32 = 64.0;
}
