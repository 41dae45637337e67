//! Projectiles with a finite travel range

use glam::Vec2;

use super::body::Body;
use super::bounds::Bounds;
use super::commands::Commands;
use super::object::ObjectId;
use crate::tuning::Tuning;

/// What a player's shots look like
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weapon {
    /// Muzzle speed (units/s)
    pub speed: f32,
    /// Distance travelled before the bullet expires
    pub range: f32,
    pub damage: f32,
    pub radius: f32,
}

impl Weapon {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            speed: tuning.bullet_speed,
            range: tuning.bullet_range,
            damage: tuning.bullet_damage,
            radius: tuning.bullet_radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    /// Firing player; a relation only, the shooter may already be gone
    pub shooter: ObjectId,
    pub range: f32,
    pub damage: f32,
    pub start_loc: Vec2,
    /// Simulated time of firing
    pub created_at: f64,
}

impl Bullet {
    /// Build a bullet leaving `shooter_body` along its heading
    ///
    /// Only the heading is inherited: muzzle velocity is fixed, the shooter's
    /// own velocity is not added.
    pub fn fire(
        shooter: ObjectId,
        shooter_body: &Body,
        weapon: &Weapon,
        now: f64,
    ) -> (Body, Bullet) {
        let mut body = Body::new(shooter_body.loc, Bounds::circle(weapon.radius))
            .with_angle(shooter_body.angle());
        body.push_forward(weapon.speed);
        let bullet = Bullet {
            shooter,
            range: weapon.range,
            damage: weapon.damage,
            start_loc: body.loc,
            created_at: now,
        };
        (body, bullet)
    }

    pub fn distance_travelled(&self, body: &Body) -> f32 {
        (body.loc - self.start_loc).length()
    }

    /// Range is the only expiry rule
    pub fn update(&self, id: ObjectId, body: &Body, commands: &mut Commands) {
        if self.distance_travelled(body) > self.range {
            commands.despawn(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon() -> Weapon {
        Weapon {
            speed: 500.0,
            range: 500.0,
            damage: 20.0,
            radius: 4.0,
        }
    }

    #[test]
    fn test_fire_ignores_shooter_velocity() {
        let mut shooter = Body::new(Vec2::new(10.0, 10.0), Bounds::circle(20.0))
            .with_angle(90.0);
        shooter.vel = Vec2::new(300.0, 0.0);

        let (body, bullet) = Bullet::fire(ObjectId(1), &shooter, &weapon(), 2.5);
        assert!(body.vel.x.abs() < 1e-3);
        assert!((body.vel.y - 500.0).abs() < 1e-3);
        assert_eq!(body.loc, shooter.loc);
        assert_eq!(bullet.start_loc, shooter.loc);
        assert!((body.angle() - 90.0).abs() < 1e-4);
        assert_eq!(bullet.created_at, 2.5);
    }

    #[test]
    fn test_expires_only_past_range() {
        let shooter = Body::new(Vec2::ZERO, Bounds::circle(20.0));
        let (mut body, bullet) = Bullet::fire(ObjectId(1), &shooter, &weapon(), 0.0);

        body.loc = Vec2::new(499.0, 0.0);
        let mut commands = Commands::new(10, 0.0);
        bullet.update(ObjectId(5), &body, &mut commands);
        assert!(!commands.is_despawning(ObjectId(5)));

        body.loc = Vec2::new(501.0, 0.0);
        bullet.update(ObjectId(5), &body, &mut commands);
        assert!(commands.is_despawning(ObjectId(5)));
    }
}
