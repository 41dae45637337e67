//! Simulated objects
//!
//! Every object is a [`Body`] (shared motion) plus a [`Kind`] carrying the
//! variant-specific state. Behavior dispatches over the closed set of kinds.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::bounds::Bounds;
use super::bullet::Bullet;
use super::commands::Commands;
use super::data::ObjectData;
use super::player::Player;
use crate::error::{SimError, SimResult};
use crate::tuning::Tuning;

/// Identifier assigned by the world, never reused while the world lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Player,
    Bullet,
    Planet,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Player(Player),
    Bullet(Bullet),
    /// Static collidable body with no behavior of its own
    Planet,
}

/// What one side of a collision sees of the other
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    Player,
    Planet,
    Bullet {
        id: ObjectId,
        shooter: ObjectId,
        damage: f32,
    },
}

/// Frame of reference handed to every update (the focus object's position)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Focus {
    pub loc: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    id: ObjectId,
    pub body: Body,
    pub kind: Kind,
}

impl GameObject {
    pub fn new(id: ObjectId, body: Body, kind: Kind) -> Self {
        Self { id, body, kind }
    }

    pub fn player(id: ObjectId, loc: Vec2, tuning: &Tuning) -> Self {
        let mut body = Body::new(loc, Bounds::circle(tuning.player_radius));
        body.turn_friction = tuning.turn_friction;
        body.max_speed = tuning.player_max_speed;
        Self::new(id, body, Kind::Player(Player::new(tuning)))
    }

    pub fn planet(id: ObjectId, loc: Vec2, bounds: Bounds) -> Self {
        Self::new(id, Body::new(loc, bounds), Kind::Planet)
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn object_kind(&self) -> ObjectKind {
        match self.kind {
            Kind::Player(_) => ObjectKind::Player,
            Kind::Bullet(_) => ObjectKind::Bullet,
            Kind::Planet => ObjectKind::Planet,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match &self.kind {
            Kind::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match &mut self.kind {
            Kind::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_bullet(&self) -> Option<&Bullet> {
        match &self.kind {
            Kind::Bullet(b) => Some(b),
            _ => None,
        }
    }

    /// Advance one step. Motion is integrated before any kind-specific logic.
    ///
    /// `_focus` is the shared frame of reference; none of the current kinds
    /// read it, the driver uses the same value for background scroll.
    pub fn update(&mut self, dt: f32, _focus: &Focus, commands: &mut Commands) {
        self.body.integrate(dt);
        match &mut self.kind {
            Kind::Player(player) => player.update(self.id, &mut self.body, commands),
            Kind::Bullet(bullet) => bullet.update(self.id, &self.body, commands),
            Kind::Planet => {}
        }
    }

    pub fn contact(&self) -> Contact {
        match &self.kind {
            Kind::Player(_) => Contact::Player,
            Kind::Planet => Contact::Planet,
            Kind::Bullet(b) => Contact::Bullet {
                id: self.id,
                shooter: b.shooter,
                damage: b.damage,
            },
        }
    }

    /// Test bounds against `other`; on overlap both sides get `on_hit`
    pub fn test_collision(&mut self, other: &mut GameObject, commands: &mut Commands) -> bool {
        if self.id == other.id || !self.body.overlaps(&other.body) {
            return false;
        }
        let mine = self.contact();
        let theirs = other.contact();
        self.on_hit(&theirs, commands);
        other.on_hit(&mine, commands);
        true
    }

    pub fn on_hit(&mut self, other: &Contact, commands: &mut Commands) {
        match &mut self.kind {
            Kind::Player(player) => player.on_hit(self.id, &mut self.body, other, commands),
            // Only a player removes a bullet. Bullets pass through planets and
            // other bullets, and planets never react.
            Kind::Bullet(_) | Kind::Planet => {}
        }
    }

    /// Snapshot of the reproducible state
    pub fn get_data(&self) -> ObjectData {
        let mut data = ObjectData {
            id: Some(self.id),
            kind: Some(self.object_kind()),
            loc: Some(self.body.loc),
            vel: Some(self.body.vel),
            angle: Some(self.body.angle()),
            angular_vel: Some(self.body.angular_vel),
            ..Default::default()
        };
        match &self.kind {
            Kind::Player(p) => data.health = Some(p.health()),
            Kind::Bullet(b) => data.shooter_id = Some(b.shooter),
            Kind::Planet => {}
        }
        data
    }

    /// Apply a patch; fields absent from `data` are left untouched
    ///
    /// The whole patch is validated first, so a rejected patch changes nothing.
    pub fn set_data(&mut self, data: &ObjectData) -> SimResult<()> {
        self.validate_patch(data)?;

        if let Some(loc) = data.loc {
            self.body.loc = loc;
        }
        if let Some(vel) = data.vel {
            self.body.vel = vel;
        }
        if let Some(angle) = data.angle {
            self.body.set_angle(angle);
        }
        if let Some(angular_vel) = data.angular_vel {
            self.body.angular_vel = angular_vel;
        }
        match &mut self.kind {
            Kind::Player(p) => {
                if let Some(health) = data.health {
                    p.set_health(health)?;
                }
            }
            Kind::Bullet(b) => {
                if let Some(shooter) = data.shooter_id {
                    b.shooter = shooter;
                }
            }
            Kind::Planet => {}
        }
        Ok(())
    }

    fn validate_patch(&self, data: &ObjectData) -> SimResult<()> {
        if let Some(id) = data.id.filter(|id| *id != self.id) {
            return Err(SimError::FieldMismatch {
                field: "id",
                expected: self.id.to_string(),
                found: id.to_string(),
            });
        }
        let kind = self.object_kind();
        if let Some(found) = data.kind.filter(|k| *k != kind) {
            return Err(SimError::FieldMismatch {
                field: "kind",
                expected: format!("{kind:?}"),
                found: format!("{found:?}"),
            });
        }
        if data.health.is_some() && kind != ObjectKind::Player {
            return Err(SimError::UnsupportedField {
                field: "health",
                kind,
            });
        }
        if data.shooter_id.is_some() && kind != ObjectKind::Bullet {
            return Err(SimError::UnsupportedField {
                field: "shooter_id",
                kind,
            });
        }
        data.check_finite()?;
        if let (Some(health), Kind::Player(p)) = (data.health, &self.kind) {
            p.check_health(health)?;
        }
        Ok(())
    }
}
