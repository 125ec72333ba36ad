//! Presentable spawning.
//!
//! [`spawn_presentables`] instantiates one entity per template and inserts
//! the [`PresentableRegistry`] resource. The template list is validated
//! before anything is spawned, so a duplicate name leaves the world
//! untouched.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::presentable::PresentableBundle;
use crate::components::scale::Scale;
use crate::error::PresenterError;
use crate::resources::registry::{PresentableRegistry, RegistrySlot};
use crate::resources::templates::PresentableTemplate;

/// Spawn every non-empty template at the default pose and register it.
///
/// Fails with [`PresenterError::DuplicateKey`] if two templates share a
/// name, and with [`PresenterError::Config`] if the registry already exists.
pub fn spawn_presentables(
    world: &mut World,
    templates: &[Option<PresentableTemplate>],
) -> Result<(), PresenterError> {
    if world.contains_resource::<PresentableRegistry>() {
        return Err(PresenterError::Config(
            "presentable registry is already built".to_string(),
        ));
    }

    let accepted = PresentableRegistry::validate(templates)?;
    let slots: Vec<RegistrySlot> = accepted
        .into_iter()
        .enumerate()
        .map(|(slot, template)| {
            let entity = world
                .spawn(PresentableBundle::new(
                    template.id.clone(),
                    slot,
                    Scale {
                        scale: template.scale,
                    },
                ))
                .id();
            RegistrySlot {
                id: template.id.clone(),
                entity,
            }
        })
        .collect();

    let registry = PresentableRegistry::from_slots(slots)?;
    info!(
        "Registered {} presentables ({} template slots)",
        registry.len(),
        templates.len()
    );
    world.insert_resource(registry);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mapposition::MapPosition;
    use crate::components::presentable::Presentable;
    use crate::components::rotation::Rotation;
    use crate::components::visibility::Visibility;
    use glam::{Quat, Vec3};

    #[test]
    fn test_spawn_presentables_default_pose_hidden() {
        let mut world = World::new();
        let templates = vec![
            Some(PresentableTemplate::new("A")),
            None,
            Some(PresentableTemplate::new("B").with_scale(Vec3::splat(3.0))),
        ];
        spawn_presentables(&mut world, &templates).unwrap();

        let registry = world.resource::<PresentableRegistry>().clone();
        assert_eq!(registry.len(), 2);

        let b = registry.entity("B").unwrap();
        assert_eq!(world.get::<Presentable>(b).unwrap().slot, 1);
        assert_eq!(world.get::<MapPosition>(b).unwrap().pos, Vec3::ZERO);
        assert_eq!(world.get::<Rotation>(b).unwrap().quat, Quat::IDENTITY);
        assert_eq!(world.get::<Scale>(b).unwrap().scale, Vec3::splat(3.0));
        assert!(!world.get::<Visibility>(b).unwrap().visible);
    }

    #[test]
    fn test_duplicate_template_spawns_nothing() {
        let mut world = World::new();
        let templates = vec![
            Some(PresentableTemplate::new("X")),
            Some(PresentableTemplate::new("Y")),
            Some(PresentableTemplate::new("X")),
        ];
        let err = spawn_presentables(&mut world, &templates).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(!world.contains_resource::<PresentableRegistry>());
        let mut query = world.query::<&Presentable>();
        assert_eq!(query.iter(&world).count(), 0);
    }

    #[test]
    fn test_registry_cannot_be_rebuilt() {
        let mut world = World::new();
        let templates = vec![Some(PresentableTemplate::new("A"))];
        spawn_presentables(&mut world, &templates).unwrap();
        let err = spawn_presentables(&mut world, &templates).unwrap_err();
        assert!(matches!(err, PresenterError::Config(_)));
        assert_eq!(world.resource::<PresentableRegistry>().len(), 1);
    }
}
