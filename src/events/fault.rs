//! Reported presenter faults.
//!
//! Lookup misses found while reconciling a batch do not stop the batch. They
//! are logged and written as [`PresenterFault`] messages so the host can
//! surface configuration mismatches (a reference image without a template).
//! [`update_fault_messages`](crate::systems::faults::update_fault_messages)
//! advances the queue once per update.
use bevy_ecs::message::Message;

use crate::error::PresenterError;

#[derive(Message, Debug, Clone, PartialEq)]
pub struct PresenterFault {
    pub error: PresenterError,
}

impl From<PresenterError> for PresenterFault {
    fn from(error: PresenterError) -> Self {
        Self { error }
    }
}
