//! ECS components for presentable entities.
//!
//! One entity per presentable object carries all of these. Together they are
//! the transform and visibility the host's scene graph reads back.
//!
//! Submodules overview:
//! - [`mapposition`] – world-space position
//! - [`presentable`] – reference-image name and arena slot, plus the spawn bundle
//! - [`rotation`] – world-space orientation
//! - [`scale`] – 3D local scale
//! - [`visibility`] – shown/hidden flag

pub mod mapposition;
pub mod presentable;
pub mod rotation;
pub mod scale;
pub mod visibility;
