//! Camera for the planisphere view.
//!
//! The camera shows the current [`ViewState`] with equal axis scaling: the
//! visible region always contains both axis ranges, so one AU is the same
//! number of pixels horizontally and vertically.

use bevy::{camera::ScalingMode, input::mouse::AccumulatedMouseScroll, prelude::*};

use crate::body::SOLAR_SYSTEM;
use crate::ephemeris::Ephemeris;
use crate::projection::{max_orbit_radius, project_bodies};
use crate::types::SimulationTime;
use crate::zoom::{InitialView, ScrollDirection, ViewState, ZoomSettings, on_scroll};

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewState>()
            .init_resource::<InitialView>()
            .init_resource::<ZoomSettings>()
            .add_systems(Startup, (setup_camera, fit_initial_view))
            .add_systems(Update, (camera_zoom, apply_view_to_camera).chain());
    }
}

/// Spawn the main camera with an orthographic projection.
fn setup_camera(mut commands: Commands, view: Res<ViewState>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: view_scaling(&view),
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(view.center().extend(0.0)),
        MainCamera,
    ));
}

/// Fit the view around every orbit at the starting epoch.
pub fn fit_initial_view(
    ephemeris: Res<Ephemeris>,
    sim_time: Res<SimulationTime>,
    settings: Res<ZoomSettings>,
    mut view: ResMut<ViewState>,
    mut initial: ResMut<InitialView>,
) {
    let projected = project_bodies(&*ephemeris, &SOLAR_SYSTEM, sim_time.current);
    let radius = max_orbit_radius(&projected);

    match ViewState::enclosing(radius, settings.margin) {
        Ok(fitted) => {
            *view = fitted;
            initial.0 = fitted;
            info!(
                "Initial view ±{:.2} AU around {} bodies",
                fitted.x.half_width(),
                projected.len()
            );
        }
        Err(e) => {
            warn!("Keeping default view: {}", e);
            initial.0 = *view;
        }
    }
}

/// Handle the mouse wheel: one zoom step per frame with scroll input.
pub fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut view: ResMut<ViewState>) {
    let direction = ScrollDirection::from_wheel(mouse_scroll.delta.y);
    if direction == ScrollDirection::Neutral {
        return;
    }

    let next = on_scroll(&view, direction);
    // Avoid triggering change detection when the step was rejected
    if next != *view {
        *view = next;
    }
}

/// Push view changes into the camera projection and position.
pub fn apply_view_to_camera(
    view: Res<ViewState>,
    mut camera_query: Query<(&mut Projection, &mut Transform), With<MainCamera>>,
) {
    if !view.is_changed() {
        return;
    }

    let Ok((mut projection, mut transform)) = camera_query.single_mut() else {
        return;
    };

    if let Projection::Orthographic(ref mut ortho) = *projection {
        ortho.scaling_mode = view_scaling(&view);
        ortho.scale = 1.0;
    }
    transform.translation = view.center().extend(transform.translation.z);
}

/// Scaling that fits both axis ranges while keeping equal aspect.
pub fn view_scaling(view: &ViewState) -> ScalingMode {
    ScalingMode::AutoMin {
        min_width: view.width() as f32,
        min_height: view.height() as f32,
    }
}

/// World units (AU) per screen pixel for `view` in a window of the given size.
///
/// Mirrors [`ScalingMode::AutoMin`]: the tighter axis decides the scale.
pub fn world_units_per_pixel(view: &ViewState, window_size: Vec2) -> f32 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return 0.0;
    }
    (view.width() as f32 / window_size.x).max(view.height() as f32 / window_size.y)
}
