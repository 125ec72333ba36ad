//! Presenter systems.
//!
//! This module groups the ECS systems and observers that move the presenter
//! forward each update.
//!
//! Submodules overview
//! - [`faults`] – advance the reported-fault message queue
//! - [`gesture`] – turn touch input into rotation/scale changes
//! - [`reconcile`] – apply tracked-image batches to visibility and pose
//! - [`registry`] – spawn presentables from templates at startup
//! - [`touch`] – poll touch input into [`crate::resources::touch::TouchState`]
//! - [`tracking`] – drain the tracking subscription and trigger batches

pub mod faults;
pub mod gesture;
pub mod reconcile;
pub mod registry;
pub mod touch;
pub mod tracking;
