//! Registry of presentable objects keyed by reference-image name.
//!
//! The registry is an arena: every presentable entity is allocated once at
//! startup into a fixed slot, and a name → slot index is built alongside it.
//! After [`spawn_presentables`](crate::systems::registry::spawn_presentables)
//! inserts the resource, no slot is ever added or removed; steady-state work
//! only writes components on the entities the slots point to.
//!
//! # Usage
//!
//! ```ignore
//! let registry = world.resource::<PresentableRegistry>();
//! if let Some(entity) = registry.entity("poster") {
//!     // read or mutate the poster's components
//! }
//! ```

use bevy_ecs::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::PresenterError;
use crate::resources::templates::PresentableTemplate;

/// One arena slot: the entity and the name it was registered under.
#[derive(Debug, Clone)]
pub struct RegistrySlot {
    pub id: String,
    pub entity: Entity,
}

/// Resource mapping reference-image names to presentable entities.
#[derive(Resource, Debug, Clone, Default)]
pub struct PresentableRegistry {
    slots: Vec<RegistrySlot>,
    index: FxHashMap<String, usize>,
    /// Slot of the most recently updated presentable, if it is still tracked.
    active: Option<usize>,
}

impl PresentableRegistry {
    /// Build the registry from already spawned slots.
    ///
    /// Fails on the first repeated name; callers validate with
    /// [`PresentableRegistry::validate`] before spawning anything.
    pub fn from_slots(slots: Vec<RegistrySlot>) -> Result<Self, PresenterError> {
        let mut index = FxHashMap::default();
        for (i, slot) in slots.iter().enumerate() {
            if index.insert(slot.id.clone(), i).is_some() {
                return Err(PresenterError::DuplicateKey(slot.id.clone()));
            }
        }
        Ok(Self {
            slots,
            index,
            active: None,
        })
    }

    /// Skip empty template slots and reject repeated names.
    pub fn validate(
        templates: &[Option<PresentableTemplate>],
    ) -> Result<Vec<&PresentableTemplate>, PresenterError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut accepted = Vec::with_capacity(templates.len());
        for template in templates.iter().flatten() {
            if !seen.insert(template.id.as_str()) {
                return Err(PresenterError::DuplicateKey(template.id.clone()));
            }
            accepted.push(template);
        }
        Ok(accepted)
    }

    pub fn slot_of(&self, id: impl AsRef<str>) -> Option<usize> {
        self.index.get(id.as_ref()).copied()
    }

    pub fn entity(&self, id: impl AsRef<str>) -> Option<Entity> {
        self.slot_of(id).map(|slot| self.slots[slot].entity)
    }

    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.index.contains_key(id.as_ref())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in template order.
    pub fn slots(&self) -> &[RegistrySlot] {
        &self.slots
    }

    /// Name of the most recently updated presentable.
    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|slot| self.slots[slot].id.as_str())
    }

    pub fn set_active(&mut self, slot: usize) {
        self.active = Some(slot);
    }

    /// Forget the active slot if it is `slot`.
    pub fn clear_active(&mut self, slot: usize) {
        if self.active == Some(slot) {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(world: &mut World, id: &str) -> RegistrySlot {
        RegistrySlot {
            id: id.to_string(),
            entity: world.spawn_empty().id(),
        }
    }

    #[test]
    fn test_validate_skips_empty_slots() {
        let templates = vec![
            Some(PresentableTemplate::new("A")),
            None,
            Some(PresentableTemplate::new("B")),
            None,
        ];
        let accepted = PresentableRegistry::validate(&templates).unwrap();
        let names: Vec<&str> = accepted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let templates = vec![
            Some(PresentableTemplate::new("X")),
            None,
            Some(PresentableTemplate::new("X")),
        ];
        let err = PresentableRegistry::validate(&templates).unwrap_err();
        assert_eq!(err, PresenterError::DuplicateKey("X".into()));
    }

    #[test]
    fn test_from_slots_indexes_in_order() {
        let mut world = World::new();
        let slots = vec![slot(&mut world, "A"), slot(&mut world, "B")];
        let b = slots[1].entity;
        let registry = PresentableRegistry::from_slots(slots).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.slot_of("B"), Some(1));
        assert_eq!(registry.entity("B"), Some(b));
        assert!(!registry.contains("C"));
        assert!(registry.entity("C").is_none());
    }

    #[test]
    fn test_from_slots_rejects_duplicates() {
        let mut world = World::new();
        let slots = vec![slot(&mut world, "A"), slot(&mut world, "A")];
        assert!(PresentableRegistry::from_slots(slots).is_err());
    }

    #[test]
    fn test_active_tracking() {
        let mut world = World::new();
        let slots = vec![slot(&mut world, "A"), slot(&mut world, "B")];
        let mut registry = PresentableRegistry::from_slots(slots).unwrap();
        assert!(registry.active_id().is_none());
        registry.set_active(1);
        assert_eq!(registry.active_id(), Some("B"));
        registry.clear_active(0);
        assert_eq!(registry.active_id(), Some("B"));
        registry.clear_active(1);
        assert!(registry.active_id().is_none());
    }
}
