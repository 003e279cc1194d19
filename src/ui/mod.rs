//! UI module providing the egui overlays: dashboard and legend.

pub mod clock;
pub mod icons;
pub mod legend;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use clock::{ClockSettings, WallClock};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClockSettings>()
            .init_resource::<WallClock>()
            .init_resource::<icons::FontsInitialized>()
            // The clock ticks without an egui context
            .add_systems(Update, clock::tick_wall_clock)
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (clock::dashboard_system, legend::legend_system)
                    .after(icons::setup_fonts)
                    .run_if(icons::fonts_ready),
            );
    }
}
