//! The live object collection and its ownership rules
//!
//! The world exclusively owns every object. Ids come from a counter that only
//! moves forward, so an id is never reused while the world lives.

use std::collections::BTreeMap;

use glam::Vec2;

use super::bounds::Bounds;
use super::controls::ControlPatch;
use super::data::ObjectData;
use super::object::{Focus, GameObject, ObjectId};
use crate::error::{SimError, SimResult};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    /// Live objects, iterated in id order
    pub(crate) objects: BTreeMap<ObjectId, GameObject>,
    /// The player the driver follows and steers
    pub(crate) focus: Option<ObjectId>,
    /// Simulated seconds since creation
    pub(crate) clock: f64,
    /// Completed ticks
    pub(crate) ticks: u64,
    next_id: u32,
}

impl World {
    pub fn new(tuning: Tuning) -> Self {
        log::info!(
            "World created (fps={}, fire_rate={}, bullet_range={})",
            tuning.fps,
            tuning.fire_rate,
            tuning.bullet_range
        );
        Self {
            tuning,
            objects: BTreeMap::new(),
            focus: None,
            clock: 0.0,
            ticks: 0,
            next_id: 1,
        }
    }

    /// Reserve an id for an object built outside the world
    ///
    /// `u32::MAX` is never handed out, so the counter cannot wrap.
    pub fn allocate_id(&mut self) -> SimResult<ObjectId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(SimError::IdsExhausted)?;
        Ok(ObjectId(id))
    }

    pub(crate) fn next_id(&self) -> u32 {
        self.next_id
    }

    pub(crate) fn set_next_id(&mut self, next_id: u32) {
        self.next_id = self.next_id.max(next_id);
    }

    /// Insert an object; its id must not be live already
    pub fn add_object(&mut self, obj: GameObject) -> SimResult<ObjectId> {
        let id = obj.id();
        if self.objects.contains_key(&id) {
            return Err(SimError::DuplicateId(id));
        }
        self.set_next_id(id.0.saturating_add(1));
        self.objects.insert(id, obj);
        Ok(id)
    }

    /// Remove an object if it is live; an absent id is a no-op
    pub fn remove_object(&mut self, id: ObjectId) -> Option<GameObject> {
        let removed = self.objects.remove(&id);
        if removed.is_some() && self.focus == Some(id) {
            self.focus = None;
        }
        removed
    }

    /// Spawn a player; the first one becomes the focus
    pub fn spawn_player(&mut self, loc: Vec2) -> SimResult<ObjectId> {
        let id = self.allocate_id()?;
        self.add_object(GameObject::player(id, loc, &self.tuning))?;
        if self.focus.is_none() {
            self.focus = Some(id);
        }
        Ok(id)
    }

    /// Spawn a planet; `bounds` defaults to a circle of the tuned radius
    pub fn spawn_planet(&mut self, loc: Vec2, bounds: Option<Bounds>) -> SimResult<ObjectId> {
        let id = self.allocate_id()?;
        let bounds = bounds.unwrap_or(Bounds::circle(self.tuning.planet_radius));
        self.add_object(GameObject::planet(id, loc, bounds))
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.values()
    }

    pub fn focus(&self) -> Option<ObjectId> {
        self.focus
    }

    /// Change the focus; the target must be a live player
    pub fn set_focus(&mut self, id: ObjectId) -> SimResult<()> {
        match self.objects.get(&id) {
            Some(obj) if obj.as_player().is_some() => {
                self.focus = Some(id);
                Ok(())
            }
            Some(obj) => Err(SimError::FieldMismatch {
                field: "kind",
                expected: "Player".to_string(),
                found: format!("{:?}", obj.object_kind()),
            }),
            None => Err(SimError::UnknownObject(id)),
        }
    }

    pub fn focus_object(&self) -> Option<&GameObject> {
        self.focus.and_then(|id| self.objects.get(&id))
    }

    /// Frame of reference for this tick
    pub fn focus_frame(&self) -> Focus {
        self.focus_object()
            .map(|obj| Focus { loc: obj.body.loc })
            .unwrap_or_default()
    }

    /// Where the driver centers the view (background scroll)
    pub fn view_offset(&self) -> Vec2 {
        self.focus_frame().loc
    }

    /// Patch-merge intents into the focus player
    pub fn update_controls(&mut self, patch: &ControlPatch) {
        if patch.is_empty() {
            return;
        }
        let Some(id) = self.focus else {
            log::warn!("Control update with no focus player");
            return;
        };
        if let Some(player) = self.get_mut(id).and_then(GameObject::as_player_mut) {
            player.update_controls(patch);
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn get_data(&self, id: ObjectId) -> Option<ObjectData> {
        self.objects.get(&id).map(GameObject::get_data)
    }

    pub fn set_data(&mut self, id: ObjectId, data: &ObjectData) -> SimResult<()> {
        self.objects
            .get_mut(&id)
            .ok_or(SimError::UnknownObject(id))?
            .set_data(data)
    }

    /// Read-only state of every live object, in id order
    pub fn snapshot(&self) -> Vec<ObjectData> {
        self.objects.values().map(GameObject::get_data).collect()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::object::ObjectKind;

    #[test]
    fn test_first_player_becomes_focus() {
        let mut world = World::default();
        let planet = world.spawn_planet(Vec2::new(200.0, 0.0), None).unwrap();
        let p1 = world.spawn_player(Vec2::ZERO).unwrap();
        let p2 = world.spawn_player(Vec2::new(50.0, 0.0)).unwrap();
        assert_eq!(world.focus(), Some(p1));
        assert_eq!(world.len(), 3);

        world.set_focus(p2).unwrap();
        assert_eq!(world.focus(), Some(p2));
        assert!(world.set_focus(planet).is_err());
        assert!(matches!(
            world.set_focus(ObjectId(999)),
            Err(SimError::UnknownObject(_))
        ));
    }

    #[test]
    fn test_add_object_rejects_duplicate_id() {
        let mut world = World::default();
        let id = world.spawn_planet(Vec2::ZERO, None).unwrap();
        let dup = GameObject::planet(id, Vec2::ONE, Bounds::circle(1.0));
        assert!(matches!(world.add_object(dup), Err(SimError::DuplicateId(d)) if d == id));
        assert_eq!(world.get(id).unwrap().body.loc, Vec2::ZERO);
    }

    #[test]
    fn test_add_object_bumps_id_counter() {
        let mut world = World::default();
        let tuning = world.tuning.clone();
        world
            .add_object(GameObject::player(ObjectId(40), Vec2::ZERO, &tuning))
            .unwrap();
        assert_eq!(world.allocate_id().unwrap(), ObjectId(41));
    }

    #[test]
    fn test_max_id_exhausts_allocator() {
        let mut world = World::default();
        let tuning = world.tuning.clone();
        let last = ObjectId(u32::MAX);
        world
            .add_object(GameObject::player(last, Vec2::ZERO, &tuning))
            .unwrap();

        assert!(matches!(
            world.spawn_planet(Vec2::ONE, None),
            Err(SimError::IdsExhausted)
        ));
        assert!(matches!(
            world.spawn_player(Vec2::ONE),
            Err(SimError::IdsExhausted)
        ));
        assert_eq!(world.len(), 1);
        assert_eq!(world.get(last).unwrap().body.loc, Vec2::ZERO);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut world = World::default();
        let id = world.spawn_player(Vec2::ZERO).unwrap();
        assert!(world.remove_object(ObjectId(77)).is_none());
        assert_eq!(world.len(), 1);
        assert!(world.remove_object(id).is_some());
        assert!(world.remove_object(id).is_none());
        assert_eq!(world.focus(), None);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut world = World::default();
        let a = world.spawn_planet(Vec2::ZERO, None).unwrap();
        world.remove_object(a);
        let b = world.spawn_planet(Vec2::ZERO, None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_snapshot_in_id_order() {
        let mut world = World::default();
        world.spawn_player(Vec2::ZERO).unwrap();
        world.spawn_planet(Vec2::new(300.0, 0.0), None).unwrap();
        let snapshot = world.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].kind, Some(ObjectKind::Player));
        assert_eq!(snapshot[1].kind, Some(ObjectKind::Planet));
        assert_eq!(world.view_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_set_data_unknown_object() {
        let mut world = World::default();
        let patch = ObjectData::default();
        let err = world.set_data(ObjectId(5), &patch).unwrap_err();
        assert!(matches!(err, SimError::UnknownObject(ObjectId(5))));
    }
}
