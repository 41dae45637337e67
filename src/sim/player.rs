//! Player ship: control response, shooting and damage

use super::body::Body;
use super::bullet::{Bullet, Weapon};
use super::commands::{Commands, TickEvent};
use super::controls::{ControlPatch, Controls};
use super::object::{Contact, GameObject, Kind, ObjectId};
use crate::error::{SimError, SimResult};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub controls: Controls,
    health: f32,
    pub max_health: f32,
    /// Shots per second
    pub fire_rate: f32,
    /// Simulated time of the last shot
    pub last_shot_time: Option<f64>,
    /// Velocity added per thrusting frame
    pub thrust: f32,
    /// Angular velocity added per turning frame
    pub turn_rate: f32,
    pub weapon: Weapon,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            controls: Controls::default(),
            health: tuning.max_health,
            max_health: tuning.max_health,
            fire_rate: tuning.fire_rate,
            last_shot_time: None,
            thrust: tuning.thrust,
            turn_rate: tuning.turn_rate,
            weapon: Weapon::from_tuning(tuning),
        }
    }

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn check_health(&self, health: f32) -> SimResult<()> {
        if health > 0.0 && health <= self.max_health {
            Ok(())
        } else {
            Err(SimError::InvalidValue {
                field: "health",
                reason: format!("must be in (0, {}], got {health}", self.max_health),
            })
        }
    }

    pub fn set_health(&mut self, health: f32) -> SimResult<()> {
        self.check_health(health)?;
        self.health = health;
        Ok(())
    }

    pub fn update_controls(&mut self, patch: &ControlPatch) {
        self.controls.apply(patch);
    }

    /// Held intents each act once per tick, after motion was integrated
    pub fn update(&mut self, id: ObjectId, body: &mut Body, commands: &mut Commands) {
        if self.controls.thrust {
            body.push_forward(self.thrust);
        }
        if self.controls.turn_right {
            body.turn_right(self.turn_rate);
        }
        if self.controls.turn_left {
            body.turn_left(self.turn_rate);
        }
        if self.controls.attack {
            self.shoot(id, body, commands);
        }
    }

    /// Fire if the rate limit allows; returns the new bullet's id
    ///
    /// A shot inside the cooldown window is silently dropped.
    pub fn shoot(
        &mut self,
        id: ObjectId,
        body: &Body,
        commands: &mut Commands,
    ) -> Option<ObjectId> {
        let now = commands.now();
        let cooldown = 1.0 / f64::from(self.fire_rate);
        if self.last_shot_time.is_some_and(|last| now - last <= cooldown) {
            return None;
        }

        let bullet_id = match commands.allocate_id() {
            Ok(bullet_id) => bullet_id,
            Err(err) => {
                log::warn!("{id} cannot fire: {err}");
                return None;
            }
        };
        let (bullet_body, bullet) = Bullet::fire(id, body, &self.weapon, now);
        commands.spawn(GameObject::new(bullet_id, bullet_body, Kind::Bullet(bullet)));
        self.last_shot_time = Some(now);
        log::trace!("{id} fired {bullet_id}");
        Some(bullet_id)
    }

    pub fn on_hit(
        &mut self,
        id: ObjectId,
        body: &mut Body,
        other: &Contact,
        commands: &mut Commands,
    ) {
        let Contact::Bullet {
            id: bullet,
            shooter,
            damage,
        } = *other
        else {
            return;
        };
        if shooter == id {
            return;
        }

        commands.despawn(bullet);
        self.health -= damage;
        commands.emit(TickEvent::Hit {
            target: id,
            bullet,
            damage,
        });

        if self.health <= 0.0 {
            self.health = self.max_health;
            body.reset_motion();
            commands.emit(TickEvent::Respawned { id });
        }
    }
}
