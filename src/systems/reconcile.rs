//! Visibility reconciliation for tracked-image batches.
//!
//! [`observe_tracked_images_changed`] is the global observer for
//! [`TrackedImagesChanged`]. It hands the batch to
//! [`reconcile_tracked_images`], which works through the lists in a fixed
//! order: every `added` image, then every `updated` image, then every
//! `removed` image.
//!
//! For an added/updated image whose name is registered:
//! 1. the presentable's position is set to the image position (the image
//!    orientation is not copied; orientation belongs to touch gestures),
//! 2. it is made visible,
//! 3. this frame's touch gesture is applied to it,
//! 4. every other registered presentable is hidden.
//!
//! An added/updated image with no template is ignored or reported depending
//! on [`UnknownImagePolicy`]. A removed image hides its presentable; if the
//! name is not registered a lookup error is reported. Errors never stop the
//! rest of the batch.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error};

use crate::components::mapposition::MapPosition;
use crate::components::presentable::Presentable;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::visibility::Visibility;
use crate::error::{ImageChange, PresenterError};
use crate::events::fault::PresenterFault;
use crate::events::trackedimages::{TrackedImage, TrackedImagesChanged};
use crate::resources::presenterconfig::{PresenterConfig, UnknownImagePolicy};
use crate::resources::registry::PresentableRegistry;
use crate::resources::touch::TouchState;
use crate::systems::gesture::{Gesture, apply_gesture, resolve_gesture};

/// Mutable view over every presentable's transform and visibility.
pub type PresentableQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut MapPosition,
        &'static mut Rotation,
        &'static mut Scale,
        &'static mut Visibility,
    ),
    With<Presentable>,
>;

/// Global observer applying a [`TrackedImagesChanged`] batch.
///
/// Lookup errors are logged and written as [`PresenterFault`] messages.
pub fn observe_tracked_images_changed(
    trigger: On<TrackedImagesChanged>,
    mut registry: ResMut<PresentableRegistry>,
    touch: Res<TouchState>,
    config: Res<PresenterConfig>,
    mut faults: MessageWriter<PresenterFault>,
    mut objects: PresentableQuery,
) {
    let errors = reconcile_tracked_images(
        trigger.event(),
        &mut registry,
        &touch,
        &config,
        &mut objects,
    );
    for err in errors {
        error!("{}", err);
        faults.write(PresenterFault::from(err));
    }
}

/// Apply one batch and return the lookup errors met on the way.
pub fn reconcile_tracked_images(
    changes: &TrackedImagesChanged,
    registry: &mut PresentableRegistry,
    touch: &TouchState,
    config: &PresenterConfig,
    objects: &mut PresentableQuery,
) -> Vec<PresenterError> {
    let mut errors = Vec::new();

    for image in &changes.added {
        if let Err(e) = update_image(image, ImageChange::Added, registry, touch, config, objects) {
            errors.push(e);
        }
    }
    for image in &changes.updated {
        if let Err(e) = update_image(image, ImageChange::Updated, registry, touch, config, objects)
        {
            errors.push(e);
        }
    }
    for image in &changes.removed {
        if let Err(e) = hide_image(image, registry, objects) {
            errors.push(e);
        }
    }

    errors
}

/// Show, move and gesture the presentable for an added/updated image, hiding all others.
fn update_image(
    image: &TrackedImage,
    change: ImageChange,
    registry: &mut PresentableRegistry,
    touch: &TouchState,
    config: &PresenterConfig,
    objects: &mut PresentableQuery,
) -> Result<(), PresenterError> {
    let Some(slot) = registry.slot_of(&image.name) else {
        return match config.unknown_image {
            UnknownImagePolicy::Ignore => {
                debug!("Ignoring {} image `{}` with no template", change, image.name);
                Ok(())
            }
            UnknownImagePolicy::Report => Err(PresenterError::UnknownImage {
                id: image.name.clone(),
                change,
            }),
        };
    };

    let target = registry.slots()[slot].entity;
    if let Ok((mut position, mut rotation, mut scale, mut visibility)) = objects.get_mut(target) {
        position.pos = image.pose.position;
        visibility.show();

        let gesture = resolve_gesture(touch, config);
        if gesture != Gesture::None {
            debug!("Applying {:?} to `{}`", gesture, image.name);
            apply_gesture(gesture, &mut rotation, &mut scale);
        }
    }
    registry.set_active(slot);

    for other in registry.slots().iter().filter(|s| s.entity != target) {
        if let Ok((_, _, _, mut visibility)) = objects.get_mut(other.entity) {
            visibility.hide();
        }
    }

    Ok(())
}

/// Hide the presentable for a removed image.
fn hide_image(
    image: &TrackedImage,
    registry: &mut PresentableRegistry,
    objects: &mut PresentableQuery,
) -> Result<(), PresenterError> {
    let slot = registry
        .slot_of(&image.name)
        .ok_or_else(|| PresenterError::UnknownImage {
            id: image.name.clone(),
            change: ImageChange::Removed,
        })?;

    if let Ok((_, _, _, mut visibility)) = objects.get_mut(registry.slots()[slot].entity) {
        visibility.hide();
    }
    registry.clear_active(slot);
    debug!("Hid `{}`", image.name);

    Ok(())
}
