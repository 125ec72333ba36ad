//! Tracked-image change batches.
//!
//! The tracking subsystem reports what it sees as a [`TrackedImagesChanged`]
//! batch with three lists: images seen for the first time (`added`), images
//! still tracked with a fresh pose (`updated`), and images that are no longer
//! tracked (`removed`). The batch is delivered through a
//! [`TrackingSubscription`](crate::resources::tracking::TrackingSubscription)
//! and triggered as an observer event, which
//! [`observe_tracked_images_changed`](crate::systems::reconcile::observe_tracked_images_changed)
//! turns into visibility and pose changes.
use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    #[serde(default = "identity")]
    pub rotation: Quat,
}

fn identity() -> Quat {
    Quat::IDENTITY
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// One observation of a tracked image, named after its reference image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedImage {
    pub name: String,
    #[serde(default)]
    pub pose: Pose,
}

impl TrackedImage {
    pub fn new(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            name: name.into(),
            pose,
        }
    }

    /// Observation at `position` with an identity orientation.
    pub fn at(name: impl Into<String>, position: Vec3) -> Self {
        Self::new(
            name,
            Pose {
                position,
                rotation: Quat::IDENTITY,
            },
        )
    }
}

/// Event carrying one batch from the tracking subsystem.
///
/// Lists are processed in order: all `added`, then all `updated`, then all
/// `removed`.
#[derive(Event, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackedImagesChanged {
    #[serde(default)]
    pub added: Vec<TrackedImage>,
    #[serde(default)]
    pub updated: Vec<TrackedImage>,
    #[serde(default)]
    pub removed: Vec<TrackedImage>,
}

impl TrackedImagesChanged {
    pub fn with_added(mut self, image: TrackedImage) -> Self {
        self.added.push(image);
        self
    }

    pub fn with_updated(mut self, image: TrackedImage) -> Self {
        self.updated.push(image);
        self
    }

    pub fn with_removed(mut self, image: TrackedImage) -> Self {
        self.removed.push(image);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}
