use bevy_ecs::prelude::Component;
use glam::Quat;

/// World-space orientation. Only touch gestures write it; tracking poses never do.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Rotation {
    pub quat: Quat,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            quat: Quat::IDENTITY,
        }
    }
}
