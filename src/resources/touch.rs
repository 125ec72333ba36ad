//! Per-frame touch input resource.
//!
//! Captures the subset of touch state the gesture applier cares about and
//! exposes it to systems via the [`TouchState`] resource. The host writes it
//! once per update (see [`crate::systems::touch::poll_touch_state`]); the
//! value is only meaningful for the frame it was sampled in.
use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Phase of the first active touch, as reported by the input subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchPhase {
    Began,
    Moved,
    Stationary,
    #[default]
    Ended,
    Canceled,
}

/// Resource capturing this frame's touch input.
///
/// Only the first touch is described; `touch_count` says how many are down.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchState {
    /// Number of touches currently down.
    #[serde(default)]
    pub touch_count: u32,
    /// Phase of the first touch.
    #[serde(default)]
    pub phase: TouchPhase,
    /// Screen-space movement of the first touch since last frame.
    #[serde(default)]
    pub delta: Vec2,
    /// Number of taps registered for the first touch.
    #[serde(default)]
    pub tap_count: u32,
}

impl TouchState {
    /// One finger dragging by `delta` this frame.
    pub fn single_drag(dx: f32, dy: f32) -> Self {
        Self {
            touch_count: 1,
            phase: TouchPhase::Moved,
            delta: Vec2::new(dx, dy),
            tap_count: 1,
        }
    }

    pub fn with_tap_count(mut self, tap_count: u32) -> Self {
        self.tap_count = tap_count;
        self
    }

    pub fn is_single_touch(&self) -> bool {
        self.touch_count == 1
    }
}

/// Source of touch samples polled once per update.
pub trait TouchSource: Send + Sync {
    fn poll(&mut self) -> TouchState;
}

/// Touch source fed by the host (or a recorded session) before each update.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScriptedTouch {
    next: TouchState,
}

impl ScriptedTouch {
    pub fn set(&mut self, touch: TouchState) {
        self.next = touch;
    }
}

impl TouchSource for ScriptedTouch {
    /// Hand out the pending sample and reset to "no touch".
    fn poll(&mut self) -> TouchState {
        std::mem::take(&mut self.next)
    }
}
