use bevy_ecs::prelude::*;

use crate::events::fault::PresenterFault;

/// Advance the [`PresenterFault`] message queue. Faults survive two updates.
pub fn update_fault_messages(mut msgs: ResMut<Messages<PresenterFault>>) {
    msgs.update();
}
