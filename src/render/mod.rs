//! Rendering of the projected solar system.
//!
//! Every frame the epoch changes, the ephemeris is projected once into a
//! [`ProjectedScene`]; markers and orbit paths both read from it.

pub mod bodies;
pub mod orbits;

use bevy::prelude::*;

use crate::body::SOLAR_SYSTEM;
use crate::ephemeris::{CelestialBodyId, Ephemeris};
use crate::projection::{ProjectedBody, project_bodies};
use crate::types::SimulationTime;

use self::bodies::{BodyMarkerPlugin, scale_markers, sync_marker_positions};
use self::orbits::{OrbitPathPlugin, draw_orbit_paths};

pub use self::bodies::{MarkerSettings, PlottedBody};
pub use self::orbits::OrbitPathSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .init_resource::<ProjectedScene>()
            .add_plugins((BodyMarkerPlugin, OrbitPathPlugin))
            // Projection first, then everything that draws from it
            .add_systems(
                Update,
                (
                    project_scene,
                    (sync_marker_positions, scale_markers, draw_orbit_paths),
                )
                    .chain(),
            );
    }
}

/// Projected bodies at the current epoch.
#[derive(Resource, Default)]
pub struct ProjectedScene {
    pub bodies: Vec<ProjectedBody>,
    /// Epoch the scene was projected at.
    pub time: Option<f64>,
}

impl ProjectedScene {
    pub fn get(&self, id: CelestialBodyId) -> Option<&ProjectedBody> {
        self.bodies.iter().find(|p| p.id == id)
    }
}

/// Re-project the bodies when the epoch has moved.
pub fn project_scene(
    ephemeris: Res<Ephemeris>,
    sim_time: Res<SimulationTime>,
    mut scene: ResMut<ProjectedScene>,
) {
    if scene.time == Some(sim_time.current) {
        return;
    }

    scene.bodies = project_bodies(&*ephemeris, &SOLAR_SYSTEM, sim_time.current);
    scene.time = Some(sim_time.current);
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Orbit paths.
    pub const ORBITS: f32 = 0.0;
    /// Body markers; later bodies in the list stack on top.
    pub const MARKERS: f32 = 1.0;
    /// Depth step between consecutive markers.
    pub const MARKER_STEP: f32 = 0.01;
}
