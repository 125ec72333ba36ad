//! Error types reported by the presenter.
//!
//! Two families matter to callers:
//! - configuration errors ([`PresenterError::DuplicateKey`]) abort startup
//!   before any tracking batch is processed;
//! - lookup errors ([`PresenterError::UnknownImage`]) are reported per
//!   observation and never stop the rest of a batch.
//!
//! The remaining variants cover the file inputs (INI config, JSON templates
//! and recorded sessions).

use std::fmt;

use thiserror::Error;

/// Which list of a tracked-images batch an observation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageChange {
    Added,
    Updated,
    Removed,
}

impl fmt::Display for ImageChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImageChange::Added => "added",
            ImageChange::Updated => "updated",
            ImageChange::Removed => "removed",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PresenterError {
    /// Two templates share the same identifier.
    #[error("configuration error: duplicate template identifier `{0}`")]
    DuplicateKey(String),

    /// A tracked image has no registered presentable.
    #[error("lookup error: no presentable registered for {change} image `{id}`")]
    UnknownImage { id: String, change: ImageChange },

    #[error("config error: {0}")]
    Config(String),

    #[error("templates error: {0}")]
    Templates(String),

    #[error("session error: {0}")]
    Session(String),
}

impl PresenterError {
    /// True for errors that must abort initialization.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, PresenterError::DuplicateKey(_))
    }

    /// True for per-observation lookup misses.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, PresenterError::UnknownImage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_is_configuration_error() {
        let err = PresenterError::DuplicateKey("X".into());
        assert!(err.is_configuration_error());
        assert!(!err.is_lookup_error());
        assert_eq!(
            err.to_string(),
            "configuration error: duplicate template identifier `X`"
        );
    }

    #[test]
    fn test_unknown_image_message_names_change() {
        let err = PresenterError::UnknownImage {
            id: "poster".into(),
            change: ImageChange::Removed,
        };
        assert!(err.is_lookup_error());
        assert!(err.to_string().contains("removed image `poster`"));
    }
}
