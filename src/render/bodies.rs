//! Scatter markers for the Sun and planets.
//!
//! Markers are unit circles scaled every frame so their on-screen radius
//! stays fixed in pixels whatever the zoom level.

use bevy::{prelude::*, window::PrimaryWindow};

use crate::body::{Body, SOLAR_SYSTEM};
use crate::camera::world_units_per_pixel;
use crate::ephemeris::CelestialBodyId;
use crate::render::{ProjectedScene, z_layers};
use crate::zoom::ViewState;

/// Screen pixels per typographic point at 100 DPI.
pub const PIXELS_PER_POINT: f32 = 100.0 / 72.0;

/// Component marking an entity as the marker of a plotted body.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlottedBody {
    pub id: CelestialBodyId,
    /// Marker radius in screen pixels.
    pub radius_px: f32,
}

/// Marker sizing.
#[derive(Resource, Clone, Copy, Debug)]
pub struct MarkerSettings {
    /// Multiplier on every body's marker size.
    pub size_multiplier: f32,
    /// Screen pixels per point of marker size.
    pub pixels_per_point: f32,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            size_multiplier: 1.0,
            pixels_per_point: PIXELS_PER_POINT,
        }
    }
}

impl MarkerSettings {
    /// On-screen radius of `body`'s marker.
    pub fn radius_px(&self, body: &Body) -> f32 {
        body.marker_radius_points() * self.pixels_per_point * self.size_multiplier
    }
}

/// Plugin spawning the body markers.
pub struct BodyMarkerPlugin;

impl Plugin for BodyMarkerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MarkerSettings>()
            .add_systems(Startup, spawn_markers);
    }
}

/// Spawn one marker per body. Markers stay hidden until first projected.
fn spawn_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    settings: Res<MarkerSettings>,
) {
    let circle = meshes.add(Circle::new(1.0));

    for (i, body) in SOLAR_SYSTEM.iter().enumerate() {
        let z = z_layers::MARKERS + i as f32 * z_layers::MARKER_STEP;
        commands.spawn((
            Mesh2d(circle.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(body.color))),
            Transform::from_xyz(0.0, 0.0, z),
            Visibility::Hidden,
            PlottedBody {
                id: body.id,
                radius_px: settings.radius_px(body),
            },
            Name::new(body.name),
        ));
    }

    info!("Spawned {} body markers", SOLAR_SYSTEM.len());
}

/// Move markers to their projected positions.
///
/// A body that cannot be projected is hidden rather than drawn at NaN.
pub fn sync_marker_positions(
    scene: Res<ProjectedScene>,
    mut query: Query<(&PlottedBody, &mut Transform, &mut Visibility)>,
) {
    if !scene.is_changed() {
        return;
    }

    for (marker, mut transform, mut visibility) in query.iter_mut() {
        let Some(projected) = scene.get(marker.id) else {
            warn_once!("No ephemeris position for {}; marker hidden", marker.id.name());
            *visibility = Visibility::Hidden;
            continue;
        };

        match projected.point {
            Ok(point) => {
                transform.translation.x = point.x as f32;
                transform.translation.y = point.y as f32;
                *visibility = Visibility::Inherited;
            }
            Err(e) => {
                warn_once!("{} marker hidden: {}", marker.id.name(), e);
                *visibility = Visibility::Hidden;
            }
        }
    }
}

/// Keep markers a constant pixel size as the view or window changes.
pub fn scale_markers(
    view: Res<ViewState>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&PlottedBody, &mut Transform)>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let units_per_px = world_units_per_pixel(&view, window.size());
    if units_per_px <= 0.0 {
        return;
    }

    for (marker, mut transform) in query.iter_mut() {
        let scale = Vec3::new(marker.radius_px * units_per_px, marker.radius_px * units_per_px, 1.0);
        if transform.scale != scale {
            transform.scale = scale;
        }
    }
}
