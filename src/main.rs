//! Planisphere - live 2D view of the solar system

use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowMode};
use bevy_egui::EguiPlugin;

use planisphere::camera::CameraPlugin;
use planisphere::ephemeris::Ephemeris;
use planisphere::input::InputPlugin;
use planisphere::render::RenderPlugin;
use planisphere::time::TimePlugin;
use planisphere::types::SimulationTime;
use planisphere::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planisphere".into(),
                mode: WindowMode::BorderlessFullscreen(MonitorSelection::Primary),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(Ephemeris::default())
        .insert_resource(SimulationTime::default())
        .add_plugins((CameraPlugin, TimePlugin, RenderPlugin, UiPlugin, InputPlugin))
        .run();
}
