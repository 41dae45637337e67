//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `World::tick`
//! - Stable iteration order (by object id)
//! - Objects request spawns/despawns, only the world mutates its collection
//! - No rendering or platform dependencies

pub mod body;
pub mod bounds;
pub mod bullet;
pub mod commands;
pub mod controls;
pub mod data;
pub mod object;
pub mod player;
pub mod tick;
pub mod vector;
pub mod world;

pub use body::Body;
pub use bounds::Bounds;
pub use bullet::{Bullet, Weapon};
pub use commands::{Commands, TickEvent};
pub use controls::{ControlPatch, Controls, Intent};
pub use data::ObjectData;
pub use object::{Contact, Focus, GameObject, Kind, ObjectId, ObjectKind};
pub use player::Player;
pub use vector::{Vector2, heading, normalize_degrees, rotate};
pub use world::World;
