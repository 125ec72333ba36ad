//! Host-facing presenter.
//!
//! [`ImagePresenter`] owns the ECS world and the update schedule. A host
//! drives it like this:
//!
//! 1. Build it once from the template list and configuration
//!    ([`ImagePresenter::new`]). Duplicate template names fail here, before
//!    any batch can be processed.
//! 2. [`enable`](ImagePresenter::enable) it against the tracking feed when it
//!    becomes active and [`disable`](ImagePresenter::disable) it when it
//!    stops; nothing published while disabled reaches it.
//! 3. Every frame: hand it the sampled touch
//!    ([`set_touch`](ImagePresenter::set_touch)), run
//!    [`update`](ImagePresenter::update), then read back transforms and
//!    drain faults.
//!
//! # Update order
//!
//! - advance the fault queue
//! - poll touch into [`TouchState`]
//! - drain the tracking subscription and trigger each batch; the reconcile
//!   observer applies them with this frame's touch

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use log::{info, warn};
use serde::Serialize;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::visibility::Visibility;
use crate::error::PresenterError;
use crate::events::fault::PresenterFault;
use crate::events::trackedimages::TrackedImagesChanged;
use crate::resources::presenterconfig::PresenterConfig;
use crate::resources::registry::PresentableRegistry;
use crate::resources::templates::PresentableTemplate;
use crate::resources::touch::{ScriptedTouch, TouchState};
use crate::resources::tracking::{TrackedImageFeed, TrackingSubscription};
use crate::systems::faults::update_fault_messages;
use crate::systems::reconcile::observe_tracked_images_changed;
use crate::systems::registry::spawn_presentables;
use crate::systems::touch::poll_touch_state;
use crate::systems::tracking::pump_tracked_images;

/// Snapshot of one presentable's scene state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentableView {
    pub id: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub visible: bool,
}

pub struct ImagePresenter {
    world: World,
    update: Schedule,
}

impl ImagePresenter {
    /// Build the world, spawn every template and prepare the update schedule.
    pub fn new(
        templates: &[Option<PresentableTemplate>],
        config: PresenterConfig,
    ) -> Result<Self, PresenterError> {
        let mut world = World::new();
        world.insert_resource(config);
        world.insert_resource(TouchState::default());
        world.insert_resource(ScriptedTouch::default());
        world.insert_resource(Messages::<PresenterFault>::default());

        spawn_presentables(&mut world, templates)?;

        world.spawn(Observer::new(observe_tracked_images_changed));
        world.flush();

        let mut update = Schedule::default();
        update.add_systems(update_fault_messages);
        update.add_systems(poll_touch_state::<ScriptedTouch>.after(update_fault_messages));
        update.add_systems(pump_tracked_images.after(poll_touch_state::<ScriptedTouch>));
        update
            .initialize(&mut world)
            .map_err(|e| PresenterError::Config(format!("Failed to initialize schedule: {}", e)))?;

        Ok(Self { world, update })
    }

    /// Subscribe to `feed`. An existing subscription is released first.
    pub fn enable(&mut self, feed: &mut TrackedImageFeed) {
        if let Some(old) = self.world.remove_resource::<TrackingSubscription>() {
            old.release();
        }
        self.world.insert_resource(feed.subscribe());
        info!("Presenter enabled");
    }

    /// Release the subscription. Batches still queued on it are dropped.
    pub fn disable(&mut self) {
        if let Some(subscription) = self.world.remove_resource::<TrackingSubscription>() {
            subscription.release();
            info!("Presenter disabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.world.contains_resource::<TrackingSubscription>()
    }

    /// Touch sample returned by the next poll. Reset to "no touch" after it.
    pub fn set_touch(&mut self, touch: TouchState) {
        self.world.resource_mut::<ScriptedTouch>().set(touch);
    }

    /// Run one frame.
    pub fn update(&mut self) {
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Apply a batch right away, outside the subscription, with the last
    /// polled touch. Returns the faults pending after it.
    ///
    /// Ignored while the presenter is disabled.
    pub fn handle_tracked_images(&mut self, changes: TrackedImagesChanged) -> Vec<PresenterError> {
        if !self.is_enabled() {
            warn!("Presenter disabled, dropping tracked images batch");
            return Vec::new();
        }
        self.world.trigger(changes);
        self.drain_faults()
    }

    /// Take every fault reported since the last drain.
    pub fn drain_faults(&mut self) -> Vec<PresenterError> {
        self.world
            .resource_mut::<Messages<PresenterFault>>()
            .drain()
            .map(|fault| fault.error)
            .collect()
    }

    pub fn registry(&self) -> &PresentableRegistry {
        self.world.resource::<PresentableRegistry>()
    }

    /// Current scene state of the presentable registered as `id`.
    pub fn object(&self, id: &str) -> Option<PresentableView> {
        let entity = self.registry().entity(id)?;
        let entity = self.world.get_entity(entity).ok()?;
        Some(PresentableView {
            id: id.to_string(),
            position: entity.get::<MapPosition>()?.pos,
            rotation: entity.get::<Rotation>()?.quat,
            scale: entity.get::<Scale>()?.scale,
            visible: entity.get::<Visibility>()?.visible,
        })
    }

    /// Every presentable in template order.
    pub fn objects(&self) -> Vec<PresentableView> {
        self.registry()
            .slots()
            .iter()
            .filter_map(|slot| self.object(&slot.id))
            .collect()
    }

    /// Names of the visible presentables, in template order.
    pub fn visible_ids(&self) -> Vec<String> {
        self.objects()
            .into_iter()
            .filter(|view| view.visible)
            .map(|view| view.id)
            .collect()
    }

    /// Name of the most recently updated presentable, if still tracked.
    pub fn active_id(&self) -> Option<&str> {
        self.registry().active_id()
    }

    pub fn config(&self) -> &PresenterConfig {
        self.world.resource::<PresenterConfig>()
    }

    pub fn config_mut(&mut self) -> Mut<'_, PresenterConfig> {
        self.world.resource_mut::<PresenterConfig>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
