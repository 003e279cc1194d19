//! Headless Bevy integration tests.
//!
//! These tests verify Bevy resources and systems work correctly without GPU.

mod common;

use approx::assert_relative_eq;
use bevy::math::DVec3;
use bevy::prelude::*;
use planisphere::body::SOLAR_SYSTEM;
use planisphere::camera::{camera_zoom, fit_initial_view};
use planisphere::ephemeris::table::{EphemerisTable, State3};
use planisphere::ephemeris::{CelestialBodyId, Ephemeris, EphemerisTables, ReferenceFrame};
use planisphere::input::{keyboard_shortcuts, keyboard_zoom};
use planisphere::projection::project_bodies;
use planisphere::render::bodies::sync_marker_positions;
use planisphere::render::{PlottedBody, ProjectedScene, project_scene};
use planisphere::time::advance_time;
use planisphere::types::{SECONDS_PER_DAY, SimulationTime};
use planisphere::ui::WallClock;
use planisphere::ui::clock::tick_wall_clock;
use planisphere::zoom::{InitialView, ViewState, ZoomSettings};

use common::{headless_app, kepler_ephemeris, scroll, square_view, tap};

#[test]
fn test_scroll_up_zooms_in() {
    let mut app = headless_app();
    app.add_systems(Update, camera_zoom);

    scroll(&mut app, 1.0);

    let view = app.world().resource::<ViewState>();
    assert_relative_eq!(view.x.min, -9.0);
    assert_relative_eq!(view.x.max, 9.0);
    assert_relative_eq!(view.y.min, -9.0);
    assert_relative_eq!(view.y.max, 9.0);
}

#[test]
fn test_scroll_up_then_down() {
    let mut app = headless_app();
    app.add_systems(Update, camera_zoom);

    scroll(&mut app, 1.0);
    scroll(&mut app, -1.0);

    let view = app.world().resource::<ViewState>();
    assert_relative_eq!(view.x.half_width(), 9.9, epsilon = 1e-12);
    assert_relative_eq!(view.x.center(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_no_scroll_leaves_view_alone() {
    let mut app = headless_app();
    app.add_systems(Update, camera_zoom);

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(*app.world().resource::<ViewState>(), square_view(10.0));
}

#[test]
fn test_keyboard_zoom_and_home() {
    let mut app = headless_app();
    app.add_systems(Update, (keyboard_zoom, keyboard_shortcuts));

    tap(&mut app, KeyCode::Equal);
    assert_relative_eq!(app.world().resource::<ViewState>().x.max, 9.0);

    tap(&mut app, KeyCode::Minus);
    assert_relative_eq!(app.world().resource::<ViewState>().x.max, 9.9, epsilon = 1e-12);

    tap(&mut app, KeyCode::Home);
    assert_eq!(*app.world().resource::<ViewState>(), square_view(10.0));
}

#[test]
fn test_simulation_time_pause() {
    let mut app = headless_app();
    app.add_systems(Update, (keyboard_shortcuts, advance_time).chain());

    // Starts paused
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().resource::<SimulationTime>().current, 0.0);

    // Space resumes; one frame of 0.2 s at 1 day per second
    tap(&mut app, KeyCode::Space);
    let resumed = app.world().resource::<SimulationTime>();
    assert!(!resumed.paused);
    assert_relative_eq!(resumed.current, 0.2 * SECONDS_PER_DAY, epsilon = 1e-6);

    app.update();
    assert_relative_eq!(
        app.world().resource::<SimulationTime>().current,
        0.4 * SECONDS_PER_DAY,
        epsilon = 1e-6
    );

    // Home returns to the launch epoch, paused
    tap(&mut app, KeyCode::Home);
    let reset = app.world().resource::<SimulationTime>();
    assert!(reset.paused);
    assert_eq!(reset.current, 0.0);
}

#[test]
fn test_wall_clock_refreshes_only_while_started() {
    let mut app = headless_app();
    app.add_systems(Update, (keyboard_shortcuts, tick_wall_clock));

    // Started by default with one immediate refresh
    assert!(app.world().resource::<WallClock>().is_running());
    assert_eq!(app.world().resource::<WallClock>().refreshes(), 1);

    // 0 + 7 × 0.2 s = 1.4 s of frame time: one timer period
    for _ in 0..8 {
        app.update();
    }
    assert_eq!(app.world().resource::<WallClock>().refreshes(), 2);

    tap(&mut app, KeyCode::KeyC);
    assert!(!app.world().resource::<WallClock>().is_running());
    for _ in 0..20 {
        app.update();
    }
    assert_eq!(app.world().resource::<WallClock>().refreshes(), 2);

    // Restarting refreshes immediately
    tap(&mut app, KeyCode::KeyC);
    assert!(app.world().resource::<WallClock>().is_running());
    assert_eq!(app.world().resource::<WallClock>().refreshes(), 3);
}

#[test]
fn test_initial_view_encloses_neptune() {
    let mut app = headless_app();
    app.init_resource::<ZoomSettings>();
    app.add_systems(Startup, fit_initial_view);
    app.update();

    let view = *app.world().resource::<ViewState>();
    assert_eq!(app.world().resource::<InitialView>().0, view);
    // Neptune sits near 30 AU; 5 % margin
    assert!(view.x.half_width() > 29.0 * 1.05);
    assert!(view.x.half_width() < 31.5 * 1.05);
    assert_eq!(view.x, view.y);
}

fn spawn_test_markers(app: &mut App) {
    for body in &SOLAR_SYSTEM {
        app.world_mut().spawn((
            PlottedBody {
                id: body.id,
                radius_px: 5.0,
            },
            Transform::default(),
            Visibility::Hidden,
        ));
    }
}

fn marker_visibility(app: &mut App) -> Vec<(CelestialBodyId, Visibility)> {
    let world = app.world_mut();
    let mut query = world.query::<(&PlottedBody, &Visibility)>();
    query.iter(world).map(|(m, v)| (m.id, *v)).collect()
}

#[test]
fn test_markers_follow_projection() {
    let mut app = headless_app();
    app.init_resource::<ProjectedScene>();
    app.add_systems(Update, (project_scene, sync_marker_positions).chain());
    spawn_test_markers(&mut app);

    app.update();

    let world = app.world_mut();
    let mut query = world.query::<(&PlottedBody, &Transform, &Visibility)>();
    let mut seen = 0;
    for (marker, transform, visibility) in query.iter(world) {
        assert_eq!(*visibility, Visibility::Inherited, "{:?} hidden", marker.id);
        let r = transform.translation.truncate().length();
        match marker.id {
            CelestialBodyId::Sun => assert!(r < 0.02),
            CelestialBodyId::Earth => assert!((0.97..1.03).contains(&r)),
            CelestialBodyId::Neptune => assert!((29.0..31.5).contains(&r)),
            _ => {}
        }
        seen += 1;
    }
    assert_eq!(seen, SOLAR_SYSTEM.len());
}

#[test]
fn test_body_on_view_axis_is_hidden() {
    // Mars parked on the ecliptic pole, where the projection has no direction
    let pole = State3 {
        pos: DVec3::new(0.0, 0.0, 2.0),
        vel: DVec3::ZERO,
    };
    let mut tables = EphemerisTables::default();
    tables
        .insert(
            CelestialBodyId::Mars,
            EphemerisTable {
                body_id: CelestialBodyId::Mars.table_id(),
                step_seconds: SECONDS_PER_DAY,
                start_t0: -SECONDS_PER_DAY,
                samples: vec![pole; 3],
            },
        )
        .unwrap();

    let mut app = headless_app();
    app.insert_resource(Ephemeris::with_tables(tables).with_frame(ReferenceFrame::Ecliptic))
        .init_resource::<ProjectedScene>()
        .add_systems(Update, (project_scene, sync_marker_positions).chain());
    spawn_test_markers(&mut app);

    app.update();

    let scene = app.world().resource::<ProjectedScene>();
    assert!(scene.get(CelestialBodyId::Mars).unwrap().point.is_err());

    let markers = marker_visibility(&mut app);
    assert_eq!(markers.len(), SOLAR_SYSTEM.len());
    for (id, visibility) in markers {
        let expected = if id == CelestialBodyId::Mars {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        assert_eq!(visibility, expected, "{:?}", id);
    }
}

#[test]
fn test_body_missing_from_scene_is_hidden() {
    let mut bodies = project_bodies(&kepler_ephemeris(), &SOLAR_SYSTEM, 0.0);
    bodies.retain(|p| p.id != CelestialBodyId::Earth);

    let mut app = headless_app();
    app.insert_resource(ProjectedScene {
        bodies,
        time: Some(0.0),
    })
    .add_systems(Update, sync_marker_positions);
    spawn_test_markers(&mut app);

    app.update();

    for (id, visibility) in marker_visibility(&mut app) {
        let expected = if id == CelestialBodyId::Earth {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        assert_eq!(visibility, expected, "{:?}", id);
    }
}
