//! Touch gesture applier.
//!
//! Turns one frame of [`TouchState`] into a transform change on the
//! presentable being updated. The gesture is resolved in two steps so the
//! decision can be inspected on its own:
//!
//! 1. [`resolve_gesture`] reads the touch and the configured
//!    [`ScaleGesture`] ordering and returns a [`Gesture`];
//! 2. [`apply_gesture`] writes that gesture into [`Rotation`] / [`Scale`].
//!
//! Only a single active touch ever produces a gesture. A drag rotates the
//! object in world space by `pitch = dy * sensitivity` about X and
//! `yaw = -dx * sensitivity` about Y, as one combined Euler rotation
//! pre-multiplied onto the current orientation. A double-tap drag may scale
//! instead (x follows dx, y and z follow dy), depending on the ordering.

use glam::{EulerRot, Quat, Vec3};

use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::resources::presenterconfig::{PresenterConfig, ScaleGesture};
use crate::resources::touch::{TouchPhase, TouchState};

/// Transform change requested by this frame's touch input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    None,
    /// Euler angles in degrees handed to the world-space rotation.
    Rotate { pitch: f32, yaw: f32 },
    /// Amount added to the local scale.
    Scale { delta: Vec3 },
}

/// Decide which gesture, if any, the touch state asks for.
pub fn resolve_gesture(touch: &TouchState, config: &PresenterConfig) -> Gesture {
    if !touch.is_single_touch() || touch.phase != TouchPhase::Moved {
        return Gesture::None;
    }

    let rotate = Gesture::Rotate {
        pitch: touch.delta.y * config.rotation_sensitivity,
        yaw: -touch.delta.x * config.rotation_sensitivity,
    };
    let scale = Gesture::Scale {
        delta: Vec3::new(touch.delta.x, touch.delta.y, touch.delta.y) * config.scale_sensitivity,
    };

    match config.scale_gesture {
        // The rotation test already covers every drag, so the scale test
        // behind it can never be reached.
        ScaleGesture::RotationFirst => rotate,
        ScaleGesture::DoubleTapFirst => {
            if touch.tap_count == 2 {
                scale
            } else {
                rotate
            }
        }
    }
}

/// World-space rotation for Euler angles in degrees (pitch about X, yaw about Y).
///
/// Rotation order is Z, then X, then Y, so the result is `Ry * Rx`.
pub fn euler_rotation(pitch: f32, yaw: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw.to_radians(), pitch.to_radians(), 0.0)
}

/// Write `gesture` into the target transform.
pub fn apply_gesture(gesture: Gesture, rotation: &mut Rotation, scale: &mut Scale) {
    match gesture {
        Gesture::None => {}
        Gesture::Rotate { pitch, yaw } => {
            rotation.quat = (euler_rotation(pitch, yaw) * rotation.quat).normalize();
        }
        Gesture::Scale { delta } => {
            scale.scale += delta;
        }
    }
}
