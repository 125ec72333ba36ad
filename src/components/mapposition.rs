use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space position of a presentable, synced from the tracked image pose.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec3,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self { pos: Vec3::ZERO }
    }
}
