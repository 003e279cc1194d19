//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use planisphere::ephemeris::{Ephemeris, EphemerisTables};
use planisphere::types::SimulationTime;
use planisphere::ui::{ClockSettings, WallClock};
use planisphere::zoom::{InitialView, ViewState};

/// Frame time used by headless apps. Below the virtual clock's 250 ms cap.
pub const FRAME: Duration = Duration::from_millis(200);

/// Ephemeris using only the analytic model, independent of files on disk.
pub fn kepler_ephemeris() -> Ephemeris {
    Ephemeris::with_tables(EphemerisTables::default())
}

/// Square view of half-width `half` centered on the origin.
pub fn square_view(half: f64) -> ViewState {
    ViewState::new((-half, half), (-half, half)).unwrap()
}

/// Headless app with the resources the input, camera and clock systems read.
///
/// Time advances by [`FRAME`] per update (the first update has zero delta).
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(kepler_ephemeris())
        .insert_resource(SimulationTime::at_j2000_seconds(0.0))
        .insert_resource(square_view(10.0))
        .insert_resource(InitialView(square_view(10.0)))
        .init_resource::<ClockSettings>()
        .init_resource::<WallClock>()
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<AccumulatedMouseScroll>();
    app
}

/// Press `key` for one update, then release it.
pub fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

/// Scroll the wheel by `delta_y` for one update.
pub fn scroll(app: &mut App, delta_y: f32) {
    app.world_mut().resource_mut::<AccumulatedMouseScroll>().delta = Vec2::new(0.0, delta_y);
    app.update();
    app.world_mut().resource_mut::<AccumulatedMouseScroll>().delta = Vec2::ZERO;
}
