//! Marker for entities spawned from a presentable template.
//!
//! Each presentable entity also carries [`MapPosition`], [`Rotation`],
//! [`Scale`] and [`Visibility`]; [`PresentableBundle`] groups them so the
//! registry spawns them together.
//!
//! [`MapPosition`]: crate::components::mapposition::MapPosition
//! [`Rotation`]: crate::components::rotation::Rotation
//! [`Scale`]: crate::components::scale::Scale
//! [`Visibility`]: crate::components::visibility::Visibility

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::visibility::Visibility;

/// Identity of a presentable: the reference-image name it stands in for and
/// its slot in the [`PresentableRegistry`](crate::resources::registry::PresentableRegistry) arena.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Presentable {
    pub id: String,
    pub slot: usize,
}

/// Everything a freshly instantiated presentable starts with.
#[derive(Bundle, Clone, Debug)]
pub struct PresentableBundle {
    pub presentable: Presentable,
    pub position: MapPosition,
    pub rotation: Rotation,
    pub scale: Scale,
    pub visibility: Visibility,
}

impl PresentableBundle {
    /// Default pose: origin, identity rotation, hidden.
    pub fn new(id: impl Into<String>, slot: usize, scale: Scale) -> Self {
        Self {
            presentable: Presentable {
                id: id.into(),
                slot,
            },
            position: MapPosition::default(),
            rotation: Rotation::default(),
            scale,
            visibility: Visibility::default(),
        }
    }
}
