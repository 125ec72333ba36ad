//! Bridge between the tracking subsystem and the ECS world.
//!
//! The tracking subsystem publishes [`TrackedImagesChanged`] batches on a
//! [`TrackedImageFeed`]. A presenter that wants them calls
//! [`TrackedImageFeed::subscribe`] when it becomes active and keeps the
//! returned [`TrackingSubscription`] as a resource; releasing the handle (or
//! dropping it) disconnects the channel, so no batch published afterwards
//! can reach the presenter.
//!
//! Disconnected subscribers are pruned by the feed on its next publish.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, TryIter, unbounded};
use log::debug;

use crate::events::trackedimages::TrackedImagesChanged;

/// Publisher side of the "tracked images changed" stream.
#[derive(Debug, Default)]
pub struct TrackedImageFeed {
    subscribers: Vec<Sender<TrackedImagesChanged>>,
}

impl TrackedImageFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new subscription. Batches published from now on are queued on it.
    pub fn subscribe(&mut self) -> TrackingSubscription {
        let (tx, rx) = unbounded::<TrackedImagesChanged>();
        self.subscribers.push(tx);
        debug!("Tracking subscription opened ({} live)", self.subscribers.len());
        TrackingSubscription { rx }
    }

    /// Deliver `changes` to every live subscriber. Returns how many got it.
    pub fn publish(&mut self, changes: TrackedImagesChanged) -> usize {
        // send fails only once the receiving handle is gone
        self.subscribers.retain(|tx| tx.send(changes.clone()).is_ok());
        self.subscribers.len()
    }

    /// Number of subscriptions that were still live at the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Scoped handle on the tracked-images stream.
///
/// Stored as a resource while the presenter is enabled; the pump system
/// drains it every update.
#[derive(Resource, Debug)]
pub struct TrackingSubscription {
    rx: Receiver<TrackedImagesChanged>,
}

impl TrackingSubscription {
    /// Non-blocking iterator over the batches queued since the last drain.
    pub fn try_iter(&self) -> TryIter<'_, TrackedImagesChanged> {
        self.rx.try_iter()
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Give the subscription back. Queued batches are discarded.
    pub fn release(self) {
        debug!("Tracking subscription released ({} batches dropped)", self.rx.len());
    }
}
