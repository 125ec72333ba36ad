//! Event types exchanged with the presenter.
//!
//! Submodules:
//! - [`trackedimages`] – batches of added/updated/removed tracked images
//!   delivered by the tracking subsystem
//! - [`fault`] – lookup errors reported while reconciling a batch
pub mod fault;
pub mod trackedimages;
