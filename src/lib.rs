//! imageanchor library.
//!
//! Presents one 3D object per tracked reference image. Objects are spawned
//! once from templates, shown and moved when their image is tracked, hidden
//! when it is lost, and rotated (or scaled) by single-touch drags.
//!
//! This module exposes the ECS components, resources, systems, and events
//! for use in integration tests and by hosts that run their own schedule,
//! plus the [`presenter::ImagePresenter`] façade for hosts that don't.

pub mod components;
pub mod error;
pub mod events;
pub mod presenter;
pub mod resources;
pub mod session;
pub mod systems;
