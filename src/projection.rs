//! Flattening of 3D ephemeris positions onto the 2D plot.
//!
//! [`project`] keeps the direction of a body's (x, y) components but gives the
//! point the body's full 3D distance, so out-of-plane distance shows up as
//! extra radius. This is not an orthographic or ecliptic projection; it
//! deliberately overstates distance for bodies far from the xy-plane.
//!
//! [`project_orbit`] draws every orbit as a circle of that same radius in the
//! xy-plane, ignoring eccentricity and inclination.

use bevy::math::{DVec2, DVec3};
use std::f64::consts::TAU;
use thiserror::Error;

use crate::body::Body;
use crate::ephemeris::{CelestialBodyId, EphemerisSource};

/// Number of points in an orbit polyline.
pub const ORBIT_SAMPLES: usize = 500;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The position lies on the z-axis, so it has no xy-direction.
    #[error("cannot project ({x}, {y}, {z}): x and y are both zero")]
    Degenerate { x: f64, y: f64, z: f64 },

    #[error("cannot project non-finite position ({x}, {y}, {z})")]
    NonFinite { x: f64, y: f64, z: f64 },
}

/// Project a position onto the plot plane, preserving its 3D distance.
///
/// Returns `(x, y) · r / √(x² + y²)` where `r = |position|`.
pub fn project(position: DVec3) -> Result<DVec2, ProjectionError> {
    let DVec3 { x, y, z } = position;
    if !position.is_finite() {
        return Err(ProjectionError::NonFinite { x, y, z });
    }

    let planar = DVec2::new(x, y);
    let planar_len = planar.length();
    if planar_len == 0.0 {
        return Err(ProjectionError::Degenerate { x, y, z });
    }

    Ok(planar * (position.length() / planar_len))
}

/// Circle of radius `|position|` in the plot plane.
///
/// [`ORBIT_SAMPLES`] points with θ spaced evenly over `[0, 2π]` inclusive,
/// so the first and last points coincide and the polyline closes.
pub fn project_orbit(position: DVec3) -> Vec<DVec2> {
    let r = position.length();
    let last = (ORBIT_SAMPLES - 1) as f64;
    (0..ORBIT_SAMPLES)
        .map(|i| {
            let theta = TAU * i as f64 / last;
            DVec2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

/// Everything the renderer needs for one body at one instant.
#[derive(Clone, Debug)]
pub struct ProjectedBody {
    pub id: CelestialBodyId,
    /// Marker position, or why the body cannot be placed.
    pub point: Result<DVec2, ProjectionError>,
    /// Orbit polyline; empty when the body sits at the origin.
    pub orbit: Vec<DVec2>,
}

/// Project every body at `time`.
///
/// Bodies the source cannot place are left out.
pub fn project_bodies<S>(source: &S, bodies: &[Body], time: f64) -> Vec<ProjectedBody>
where
    S: EphemerisSource + ?Sized,
{
    bodies
        .iter()
        .filter_map(|body| {
            let position = source.position_au(body.id, time)?;
            let orbit = if position.length() > 0.0 {
                project_orbit(position)
            } else {
                Vec::new()
            };
            Some(ProjectedBody {
                id: body.id,
                point: project(position),
                orbit,
            })
        })
        .collect()
}

/// Largest orbit radius among projected bodies, for fitting the view.
pub fn max_orbit_radius(projected: &[ProjectedBody]) -> f64 {
    projected
        .iter()
        .filter_map(|p| p.orbit.first())
        .map(|p| p.length())
        .fold(0.0, f64::max)
}
