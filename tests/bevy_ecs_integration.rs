//! Bevy ECS Integration Tests
//!
//! These tests pin down the bevy_ecs behaviour the presenter relies on, so
//! that a bevy_ecs upgrade that changes it fails here first.
//!
//! # Test Categories
//!
//! 1. **Resources** - optional resources, removal, replacement
//! 2. **Observers** - world triggers, triggers queued from systems
//! 3. **Messages** - double-buffered lifetime, draining
//! 4. **Schedules** - ordering, generic systems
//! 5. **SystemState** - mutable queries passed to helper functions
//!
//! # Usage
//!
//! ```sh
//! cargo test --test bevy_ecs_integration
//! ```

use bevy_ecs::message::Message;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use std::sync::{Arc, Mutex};

// =============================================================================
// Test Components, Resources, and Events
// =============================================================================

#[derive(Component, Debug, Clone, PartialEq)]
struct Shown(bool);

#[derive(Component, Debug, Clone)]
struct Tag(&'static str);

#[derive(Resource, Debug, Default)]
struct Counter(i32);

#[derive(Resource, Debug)]
struct Handle(u32);

#[derive(Event, Debug, Clone)]
struct Batch(Vec<i32>);

#[derive(Message, Debug, Clone, PartialEq)]
struct Fault(i32);

trait Source: Send + Sync {
    fn next(&mut self) -> i32;
}

#[derive(Resource, Default)]
struct Ticker(i32);

impl Source for Ticker {
    fn next(&mut self) -> i32 {
        self.0 += 1;
        self.0
    }
}

// =============================================================================
// CATEGORY 1: Resources
// =============================================================================

#[test]
fn optional_resource_absent_in_system() {
    let mut world = World::new();
    world.insert_resource(Counter(0));

    let mut schedule = Schedule::default();
    schedule.add_systems(|handle: Option<Res<Handle>>, mut counter: ResMut<Counter>| {
        if handle.is_some() {
            counter.0 += 1;
        }
    });

    schedule.run(&mut world);
    assert_eq!(world.resource::<Counter>().0, 0);

    world.insert_resource(Handle(7));
    schedule.run(&mut world);
    assert_eq!(world.resource::<Counter>().0, 1);
}

#[test]
fn remove_resource_returns_value() {
    let mut world = World::new();
    world.insert_resource(Handle(1));
    world.insert_resource(Handle(2));

    let removed = world.remove_resource::<Handle>();
    assert_eq!(removed.map(|h| h.0), Some(2));
    assert!(!world.contains_resource::<Handle>());
    assert!(world.remove_resource::<Handle>().is_none());
}

// =============================================================================
// CATEGORY 2: Observers
// =============================================================================

#[test]
fn world_trigger_runs_observer_immediately() {
    let mut world = World::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();

    world.add_observer(move |trigger: On<Batch>| {
        seen_clone.lock().unwrap().extend(trigger.event().0.iter().copied());
    });
    world.flush();

    world.trigger(Batch(vec![1, 2]));
    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
}

#[test]
fn observer_with_query_and_resources() {
    let mut world = World::new();
    world.insert_resource(Counter(0));
    let a = world.spawn((Tag("a"), Shown(false))).id();
    let b = world.spawn((Tag("b"), Shown(true))).id();

    world.add_observer(
        |trigger: On<Batch>, mut counter: ResMut<Counter>, mut q: Query<(&Tag, &mut Shown)>| {
            counter.0 += trigger.event().0.len() as i32;
            for (tag, mut shown) in q.iter_mut() {
                shown.0 = tag.0 == "a";
            }
        },
    );
    world.flush();

    world.trigger(Batch(vec![0, 0, 0]));

    assert_eq!(world.resource::<Counter>().0, 3);
    assert_eq!(world.get::<Shown>(a), Some(&Shown(true)));
    assert_eq!(world.get::<Shown>(b), Some(&Shown(false)));
}

#[test]
fn commands_trigger_from_system_runs_in_order() {
    let mut world = World::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();

    world.add_observer(move |trigger: On<Batch>| {
        seen_clone.lock().unwrap().push(trigger.event().0[0]);
    });
    world.flush();

    let mut schedule = Schedule::default();
    schedule.add_systems(|mut commands: Commands| {
        for i in 0..3 {
            commands.trigger(Batch(vec![i]));
        }
    });
    schedule.run(&mut world);

    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
}

// =============================================================================
// CATEGORY 3: Messages
// =============================================================================

#[test]
fn messages_survive_one_update_then_drop() {
    let mut world = World::new();
    world.init_resource::<Messages<Fault>>();

    world.resource_mut::<Messages<Fault>>().write(Fault(1));
    world.resource_mut::<Messages<Fault>>().update();
    assert_eq!(world.resource::<Messages<Fault>>().len(), 1);

    world.resource_mut::<Messages<Fault>>().update();
    assert!(world.resource::<Messages<Fault>>().is_empty());
}

#[test]
fn messages_drain_empties_queue() {
    let mut world = World::new();
    world.init_resource::<Messages<Fault>>();

    let mut state = SystemState::<MessageWriter<Fault>>::new(&mut world);
    let mut writer = state.get_mut(&mut world);
    writer.write(Fault(1));
    writer.write(Fault(2));
    state.apply(&mut world);

    let drained: Vec<Fault> = world.resource_mut::<Messages<Fault>>().drain().collect();
    assert_eq!(drained, vec![Fault(1), Fault(2)]);
    assert!(world.resource::<Messages<Fault>>().is_empty());
}

// =============================================================================
// CATEGORY 4: Schedules
// =============================================================================

fn pull<S: Source + Resource>(mut source: ResMut<S>, mut counter: ResMut<Counter>) {
    counter.0 = source.next();
}

fn double(mut counter: ResMut<Counter>) {
    counter.0 *= 2;
}

#[test]
fn generic_system_ordering() {
    let mut world = World::new();
    world.insert_resource(Counter(0));
    world.insert_resource(Ticker::default());

    let mut schedule = Schedule::default();
    schedule.add_systems(double.after(pull::<Ticker>));
    schedule.add_systems(pull::<Ticker>);
    schedule.initialize(&mut world).unwrap();

    schedule.run(&mut world);
    assert_eq!(world.resource::<Counter>().0, 2);
    schedule.run(&mut world);
    assert_eq!(world.resource::<Counter>().0, 4);
}

// =============================================================================
// CATEGORY 5: SystemState
// =============================================================================

fn hide_all(q: &mut Query<&mut Shown>) {
    for mut shown in q.iter_mut() {
        shown.0 = false;
    }
}

#[test]
fn query_passed_to_helper_by_reference() {
    let mut world = World::new();
    let a = world.spawn(Shown(true)).id();
    let b = world.spawn(Shown(true)).id();

    let mut state = SystemState::<Query<&mut Shown>>::new(&mut world);
    let mut query = state.get_mut(&mut world);
    hide_all(&mut query);
    if let Ok(mut shown) = query.get_mut(b) {
        shown.0 = true;
    }

    assert_eq!(world.get::<Shown>(a), Some(&Shown(false)));
    assert_eq!(world.get::<Shown>(b), Some(&Shown(true)));
}
