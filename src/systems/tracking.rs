//! Tracking pump system.
//!
//! [`pump_tracked_images`] drains the presenter's
//! [`TrackingSubscription`] and triggers one
//! [`TrackedImagesChanged`](crate::events::trackedimages::TrackedImagesChanged)
//! event per queued batch, in arrival order. Without a subscription (the
//! presenter is disabled) it does nothing.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::tracking::TrackingSubscription;

pub fn pump_tracked_images(
    subscription: Option<Res<TrackingSubscription>>,
    mut commands: Commands,
) {
    let Some(subscription) = subscription else {
        return;
    };
    for changes in subscription.try_iter() {
        debug!(
            "Tracked images changed: +{} ~{} -{}",
            changes.added.len(),
            changes.updated.len(),
            changes.removed.len()
        );
        commands.trigger(changes);
    }
}
