//! Keyboard shortcuts.
//!
//! - `Space`: pause or resume the simulation epoch
//! - `+` / `-`: zoom in or out by one scroll step
//! - `Home`: restore the initial view and epoch
//! - `C`: start or stop the wall clock
//! - `Esc`: quit (the window starts fullscreen)

use bevy::prelude::*;

use crate::types::SimulationTime;
use crate::ui::clock::WallClock;
use crate::zoom::{InitialView, ScrollDirection, ViewState, on_scroll};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (keyboard_shortcuts, keyboard_zoom, exit_on_escape));
    }
}

/// Handle keyboard shortcuts for simulation and clock control.
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim_time: ResMut<SimulationTime>,
    mut clock: ResMut<WallClock>,
    initial: Res<InitialView>,
    mut view: ResMut<ViewState>,
) {
    if keys.just_pressed(KeyCode::Space) {
        sim_time.paused = !sim_time.paused;
        info!("Simulation {}", if sim_time.paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::Home) {
        *view = initial.0;
        sim_time.reset();
        info!("View and epoch reset");
    }

    if keys.just_pressed(KeyCode::KeyC) {
        if clock.is_running() {
            clock.stop();
        } else {
            clock.start();
        }
        info!("Wall clock {}", if clock.is_running() { "started" } else { "stopped" });
    }
}

/// Zoom with `+`/`-`, one step per key press.
pub fn keyboard_zoom(keys: Res<ButtonInput<KeyCode>>, mut view: ResMut<ViewState>) {
    let zoom_in = keys.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]);
    let zoom_out = keys.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]);

    let direction = match (zoom_in, zoom_out) {
        (true, false) => ScrollDirection::Up,
        (false, true) => ScrollDirection::Down,
        _ => return,
    };

    let next = on_scroll(&view, direction);
    if next != *view {
        *view = next;
    }
}

/// Quit on `Esc`.
pub fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Exit requested");
        exit.write(AppExit::Success);
    }
}
