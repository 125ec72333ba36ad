//! Recorded tracking sessions.
//!
//! A session is a list of frames, each with an optional touch sample and an
//! optional tracked-images batch. [`replay`] feeds them through a
//! [`TrackedImageFeed`] into an enabled [`ImagePresenter`], one update per
//! frame, and records what was visible after each one.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "frames": [
//!     { "changes": { "added": [{ "name": "poster", "pose": { "position": [0.0, 0.0, 1.0] } }] } },
//!     { "touch": { "touch_count": 1, "phase": "Moved", "delta": [10.0, -20.0], "tap_count": 1 },
//!       "changes": { "updated": [{ "name": "poster", "pose": { "position": [0.0, 0.1, 1.0] } }] } },
//!     { "changes": { "removed": [{ "name": "poster" }] } }
//!   ]
//! }
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PresenterError;
use crate::events::trackedimages::TrackedImagesChanged;
use crate::presenter::ImagePresenter;
use crate::resources::touch::TouchState;
use crate::resources::tracking::TrackedImageFeed;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SessionFrame {
    #[serde(default)]
    pub touch: Option<TouchState>,
    #[serde(default)]
    pub changes: Option<TrackedImagesChanged>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub frames: Vec<SessionFrame>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self, PresenterError> {
        serde_json::from_str(json).map_err(|e| PresenterError::Session(e.to_string()))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, PresenterError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            PresenterError::Session(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&data)
    }
}

/// What the presenter looked like after one replayed frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: usize,
    pub visible: Vec<String>,
    pub active: Option<String>,
    pub faults: Vec<String>,
}

/// Replay `session` frame by frame. The presenter must already be enabled on `feed`.
pub fn replay(
    presenter: &mut ImagePresenter,
    feed: &mut TrackedImageFeed,
    session: &Session,
) -> Vec<FrameReport> {
    session
        .frames
        .iter()
        .enumerate()
        .map(|(frame, step)| {
            if let Some(touch) = step.touch {
                presenter.set_touch(touch);
            }
            if let Some(changes) = &step.changes {
                let delivered = feed.publish(changes.clone());
                debug!("Frame {}: batch delivered to {} subscribers", frame, delivered);
            }
            presenter.update();

            FrameReport {
                frame,
                visible: presenter.visible_ids(),
                active: presenter.active_id().map(str::to_string),
                faults: presenter
                    .drain_faults()
                    .iter()
                    .map(|e| e.to_string())
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_parses_optional_parts() {
        let session = Session::from_json(
            r#"{"frames": [
                {},
                {"touch": {"touch_count": 1, "phase": "Moved", "delta": [1.0, 2.0]}},
                {"changes": {"removed": [{"name": "A"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(session.frames.len(), 3);
        assert_eq!(session.frames[0], SessionFrame::default());
        assert!(session.frames[1].touch.unwrap().is_single_touch());
        let changes = session.frames[2].changes.as_ref().unwrap();
        assert_eq!(changes.removed[0].name, "A");
        assert!(changes.added.is_empty());
    }

    #[test]
    fn test_session_bad_json_is_session_error() {
        let err = Session::from_json("{\"frames\": 3}").unwrap_err();
        assert!(matches!(err, PresenterError::Session(_)));
    }
}
