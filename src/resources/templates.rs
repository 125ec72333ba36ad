//! Presentable templates supplied at startup.
//!
//! The template list is the presenter's only configuration surface for what
//! can be shown. It is fixed once the registry is built. Entries may be
//! `null` in the JSON file (an unassigned slot), and those are skipped.
//!
//! # JSON Format
//!
//! ```json
//! [
//!   { "id": "poster" },
//!   null,
//!   { "id": "logo", "scale": [0.5, 0.5, 0.5] }
//! ]
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::PresenterError;

fn default_scale() -> Vec3 {
    Vec3::ONE
}

/// Description of one presentable object to instantiate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PresentableTemplate {
    /// Reference image name the object answers to.
    pub id: String,
    /// Initial local scale.
    #[serde(default = "default_scale")]
    pub scale: Vec3,
}

impl PresentableTemplate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scale: Vec3::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// Ordered template list, possibly with empty slots.
pub type TemplateList = Vec<Option<PresentableTemplate>>;

/// Parse a template list from a JSON string.
pub fn templates_from_str(json: &str) -> Result<TemplateList, PresenterError> {
    serde_json::from_str(json).map_err(|e| PresenterError::Templates(e.to_string()))
}

/// Load a template list from a JSON file.
pub fn load_templates(path: impl AsRef<Path>) -> Result<TemplateList, PresenterError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|e| {
        PresenterError::Templates(format!("failed to read {}: {}", path.display(), e))
    })?;
    templates_from_str(&data)
}
