//! Per-frame simulation step
//!
//! 1. Merge control intents into the focus player
//! 2. Update every object (motion first, then behavior)
//! 3. Pairwise collision pass
//! 4. Apply spawns and despawns queued during 2 and 3

use super::commands::{Commands, TickEvent};
use super::controls::ControlPatch;
use super::object::GameObject;
use super::world::World;
use crate::error::{SimError, SimResult};

impl World {
    /// Advance the world by `dt` seconds
    ///
    /// Returns what happened during the tick. Fails without touching state if
    /// `dt` is negative or not finite.
    pub fn tick(&mut self, dt: f32, controls: &ControlPatch) -> SimResult<Vec<TickEvent>> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimError::InvalidDelta(dt));
        }

        self.update_controls(controls);
        self.clock += f64::from(dt);
        self.ticks += 1;

        let focus = self.focus_frame();
        let mut commands = Commands::new(self.next_id(), self.clock);

        for obj in self.objects.values_mut() {
            obj.update(dt, &focus, &mut commands);
        }

        let mut objects: Vec<_> = self.objects.values_mut().collect();
        collide_all(&mut objects, &mut commands);

        Ok(self.apply(commands))
    }

    fn apply(&mut self, commands: Commands) -> Vec<TickEvent> {
        let pending = commands.into_parts();
        self.set_next_id(pending.next_id);
        let mut events = pending.events;

        for id in pending.despawns {
            if self.remove_object(id).is_some() {
                events.push(TickEvent::Despawned { id });
            }
        }
        for obj in pending.spawns {
            let id = obj.id();
            match self.add_object(obj) {
                Ok(_) => events.push(TickEvent::Spawned { id }),
                Err(err) => log::warn!("Dropped spawn: {err}"),
            }
        }

        for event in &events {
            log::debug!("tick {}: {:?}", self.ticks, event);
        }
        events
    }
}

/// Test every unordered pair once, in id order
///
/// Objects already queued for removal this tick (an expired bullet, or one
/// consumed by an earlier hit) take no further part.
fn collide_all(objects: &mut [&mut GameObject], commands: &mut Commands) {
    for j in 1..objects.len() {
        let (head, tail) = objects.split_at_mut(j);
        let b = &mut *tail[0];
        for a in head.iter_mut() {
            if commands.is_despawning(b.id()) {
                break;
            }
            if commands.is_despawning(a.id()) {
                continue;
            }
            a.test_collision(b, commands);
        }
    }
}
