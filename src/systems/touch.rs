//! Touch polling system.
//!
//! [`poll_touch_state`] samples a [`TouchSource`] once per update and writes
//! the result into [`crate::resources::touch::TouchState`]. Everything that
//! reacts to touch during the update sees this one sample.
use bevy_ecs::prelude::*;

use crate::resources::touch::{TouchSource, TouchState};

/// Poll `S` and overwrite the `TouchState` resource.
pub fn poll_touch_state<S: TouchSource + Resource>(
    mut source: ResMut<S>,
    mut touch: ResMut<TouchState>,
) {
    *touch = source.poll();
}
