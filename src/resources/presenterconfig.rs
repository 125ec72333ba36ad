//! Presenter configuration resource.
//!
//! Manages gesture tuning and tracking policies loaded from an INI
//! configuration file. Provides defaults that reproduce the reference
//! behaviour and methods to load/save the configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [gesture]
//! rotation_sensitivity = 0.5
//! scale_sensitivity = 0.01
//! scale_gesture = rotation_first
//!
//! [tracking]
//! unknown_image = ignore
//! templates = ./templates.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PresenterError;

/// Default safe values for startup
const DEFAULT_ROTATION_SENSITIVITY: f32 = 0.5;
const DEFAULT_SCALE_SENSITIVITY: f32 = 0.01;
const DEFAULT_CONFIG_PATH: &str = "./imageanchor.ini";
const DEFAULT_TEMPLATES_PATH: &str = "./templates.json";

/// How a single-finger drag picks between rotating and scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleGesture {
    /// Any drag rotates. The double-tap scale branch is checked second and
    /// therefore never fires.
    #[default]
    RotationFirst,
    /// A drag with a tap count of 2 scales; any other drag rotates.
    DoubleTapFirst,
}

/// What to do with added/updated observations that match no template.
/// Removals of unknown images are always reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownImagePolicy {
    #[default]
    Ignore,
    Report,
}

impl FromStr for ScaleGesture {
    type Err = PresenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rotation_first" => Ok(ScaleGesture::RotationFirst),
            "double_tap_first" => Ok(ScaleGesture::DoubleTapFirst),
            other => Err(PresenterError::Config(format!(
                "unknown scale_gesture `{}`",
                other
            ))),
        }
    }
}

impl fmt::Display for ScaleGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleGesture::RotationFirst => f.write_str("rotation_first"),
            ScaleGesture::DoubleTapFirst => f.write_str("double_tap_first"),
        }
    }
}

impl FromStr for UnknownImagePolicy {
    type Err = PresenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(UnknownImagePolicy::Ignore),
            "report" => Ok(UnknownImagePolicy::Report),
            other => Err(PresenterError::Config(format!(
                "unknown unknown_image policy `{}`",
                other
            ))),
        }
    }
}

impl fmt::Display for UnknownImagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownImagePolicy::Ignore => f.write_str("ignore"),
            UnknownImagePolicy::Report => f.write_str("report"),
        }
    }
}

/// Presenter configuration resource.
///
/// Read by the reconcile observer every batch; changing it at runtime takes
/// effect on the next batch.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PresenterConfig {
    /// Degrees of rotation per pixel of drag.
    pub rotation_sensitivity: f32,
    /// Scale units per pixel of drag.
    pub scale_sensitivity: f32,
    pub scale_gesture: ScaleGesture,
    pub unknown_image: UnknownImagePolicy,
    /// Path to the JSON template list.
    pub templates_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenterConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            rotation_sensitivity: DEFAULT_ROTATION_SENSITIVITY,
            scale_sensitivity: DEFAULT_SCALE_SENSITIVITY,
            scale_gesture: ScaleGesture::default(),
            unknown_image: UnknownImagePolicy::default(),
            templates_path: PathBuf::from(DEFAULT_TEMPLATES_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed, or if any value
    /// is malformed; nothing is applied in that case.
    pub fn load_from_file(&mut self) -> Result<(), PresenterError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| PresenterError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply(&config)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), PresenterError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| PresenterError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply(&config)
    }

    /// Applies every key present in `config`. Malformed values are errors,
    /// and on error `self` is left untouched.
    fn apply(&mut self, config: &Ini) -> Result<(), PresenterError> {
        let mut next = self.clone();

        // [gesture] section
        if let Some(s) = read_float(config, "gesture", "rotation_sensitivity")? {
            next.rotation_sensitivity = s;
        }
        if let Some(s) = read_float(config, "gesture", "scale_sensitivity")? {
            next.scale_sensitivity = s;
        }
        if let Some(mode) = config.get("gesture", "scale_gesture") {
            next.scale_gesture = mode.parse()?;
        }

        // [tracking] section
        if let Some(policy) = config.get("tracking", "unknown_image") {
            next.unknown_image = policy.parse()?;
        }
        if let Some(path) = config.get("tracking", "templates") {
            next.templates_path = PathBuf::from(path);
        }

        *self = next;

        info!(
            "Loaded config: rotation={}, scale={}, scale_gesture={}, unknown_image={}, templates={:?}",
            self.rotation_sensitivity,
            self.scale_sensitivity,
            self.scale_gesture,
            self.unknown_image,
            self.templates_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), PresenterError> {
        let mut config = Ini::new();

        // [gesture] section
        config.set(
            "gesture",
            "rotation_sensitivity",
            Some(self.rotation_sensitivity.to_string()),
        );
        config.set(
            "gesture",
            "scale_sensitivity",
            Some(self.scale_sensitivity.to_string()),
        );
        config.set("gesture", "scale_gesture", Some(self.scale_gesture.to_string()));

        // [tracking] section
        config.set("tracking", "unknown_image", Some(self.unknown_image.to_string()));
        config.set(
            "tracking",
            "templates",
            Some(self.templates_path.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| PresenterError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn read_float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>, PresenterError> {
    config
        .getfloat(section, key)
        .map(|value| value.map(|v| v as f32))
        .map_err(|e| PresenterError::Config(format!("invalid [{}] {}: {}", section, key, e)))
}
