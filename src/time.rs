//! Advancement of the simulation epoch.

use bevy::prelude::*;

use crate::types::{SECONDS_PER_DAY, SimulationTime};

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationTime>()
            .add_systems(Update, advance_time);
    }
}

/// Advance simulation time while running.
///
/// `scale` is simulated days per real second, so the step is
/// `delta · scale · SECONDS_PER_DAY` seconds.
pub fn advance_time(mut sim_time: ResMut<SimulationTime>, time: Res<Time>) {
    if sim_time.paused {
        return;
    }

    let dt = time.delta_secs_f64() * sim_time.scale * SECONDS_PER_DAY;
    sim_time.current += dt;
}
