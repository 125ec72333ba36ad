//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `presenterconfig` – gesture tuning and tracking policy flags (INI)
//! - `registry` – arena of presentable entities keyed by reference-image name
//! - `templates` – the startup list of presentable templates (JSON)
//! - `touch` – per-frame touch state and the sources it is polled from
//! - `tracking` – tracked-image feed and the scoped subscription handle
pub mod presenterconfig;
pub mod registry;
pub mod templates;
pub mod touch;
pub mod tracking;
