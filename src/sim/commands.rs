//! Deferred lifecycle requests raised during a tick
//!
//! Objects never touch the world's collection while it is being iterated.
//! Spawns and despawns queue here and the world applies them once the update
//! and collision passes are done.

use serde::{Deserialize, Serialize};

use super::object::{GameObject, ObjectId};
use crate::error::{SimError, SimResult};

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TickEvent {
    Spawned { id: ObjectId },
    Despawned { id: ObjectId },
    Hit {
        target: ObjectId,
        bullet: ObjectId,
        damage: f32,
    },
    Respawned { id: ObjectId },
}

#[derive(Debug)]
pub struct Commands {
    next_id: u32,
    /// Simulated time of the tick being processed (seconds)
    now: f64,
    spawns: Vec<GameObject>,
    despawns: Vec<ObjectId>,
    events: Vec<TickEvent>,
}

impl Commands {
    pub fn new(next_id: u32, now: f64) -> Self {
        Self {
            next_id,
            now,
            spawns: Vec::new(),
            despawns: Vec::new(),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Reserve an id for an object spawned this tick
    pub fn allocate_id(&mut self) -> SimResult<ObjectId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(SimError::IdsExhausted)?;
        Ok(ObjectId(id))
    }

    pub fn spawn(&mut self, obj: GameObject) {
        self.spawns.push(obj);
    }

    /// Request removal; repeated requests for the same id collapse into one
    pub fn despawn(&mut self, id: ObjectId) {
        if !self.despawns.contains(&id) {
            self.despawns.push(id);
        }
    }

    pub fn is_despawning(&self, id: ObjectId) -> bool {
        self.despawns.contains(&id)
    }

    pub fn emit(&mut self, event: TickEvent) {
        self.events.push(event);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty() && self.despawns.is_empty() && self.events.is_empty()
    }

    pub(crate) fn into_parts(self) -> Pending {
        Pending {
            next_id: self.next_id,
            spawns: self.spawns,
            despawns: self.despawns,
            events: self.events,
        }
    }
}

pub(crate) struct Pending {
    pub next_id: u32,
    pub spawns: Vec<GameObject>,
    pub despawns: Vec<ObjectId>,
    pub events: Vec<TickEvent>,
}
