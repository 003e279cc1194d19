//! Ephemeris module for computing celestial body positions.
//!
//! Runtime behavior:
//! - Prefer binary ephemeris tables (when present in `assets/ephemeris/`).
//! - Fall back to analytic Keplerian orbits otherwise.
//!
//! Coordinate frame:
//! - 3D, origin at the solar system barycenter, in AU.
//! - Tables and Kepler elements are J2000 ecliptic; the [`ReferenceFrame`]
//!   chosen on the [`Ephemeris`] is applied last.

pub mod data;
pub mod kepler;
pub mod table;
pub mod tables;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::{CelestialBodyData, CelestialBodyId, all_bodies, get_body_data};
pub use tables::{DEFAULT_TABLES_DIR, EphemerisTables};

use bevy::math::{DQuat, DVec3};
use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use crate::types::{DEG_TO_RAD, OBLIQUITY_J2000_DEG};

/// Anything that can place a body in space at a given instant.
///
/// Implementations must behave as a pure function of `(id, time)`.
pub trait EphemerisSource {
    /// Position of `id` at `time` (seconds since J2000), in AU.
    fn position_au(&self, id: CelestialBodyId, time: f64) -> Option<DVec3>;
}

/// Axes the ephemeris reports positions in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferenceFrame {
    /// Earth-equator axes (ICRF-like), as returned by JPL kernels.
    #[default]
    Equatorial,
    /// J2000 ecliptic axes; the planets stay close to z = 0.
    Ecliptic,
}

impl ReferenceFrame {
    /// Express a J2000 ecliptic vector in this frame.
    pub fn from_ecliptic(self, v: DVec3) -> DVec3 {
        match self {
            ReferenceFrame::Ecliptic => v,
            ReferenceFrame::Equatorial => {
                DQuat::from_rotation_x(OBLIQUITY_J2000_DEG * DEG_TO_RAD) * v
            }
        }
    }
}

/// Resource providing ephemeris data for the Sun and planets.
#[derive(Resource)]
pub struct Ephemeris {
    /// Cached body data (masses and Kepler elements)
    body_data: HashMap<CelestialBodyId, CelestialBodyData>,

    /// Optional high-accuracy tables.
    tables: EphemerisTables,

    /// Frame positions are reported in.
    frame: ReferenceFrame,

    /// Continuity offsets used when a table ends and Kepler takes over.
    ///
    /// For each body with a table, if `t > table.end_time()`, the Kepler position is shifted
    /// by the table/Kepler difference at the table end so the body does not jump when the
    /// coverage expires.
    table_fallback_offsets: RwLock<HashMap<CelestialBodyId, DVec3>>,

    /// Sum of all masses, for the barycentric shift of Kepler positions.
    total_mass: f64,
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris {
    /// Create an ephemeris, loading tables from [`DEFAULT_TABLES_DIR`] when present.
    pub fn new() -> Self {
        Self::from_tables_dir(DEFAULT_TABLES_DIR)
    }

    /// Create an ephemeris with tables from `dir`.
    ///
    /// A malformed table aborts table loading altogether; every body then
    /// uses the Kepler model.
    pub fn from_tables_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let tables = match EphemerisTables::load_from_dir(dir) {
            Ok(tables) => {
                if tables.is_empty() {
                    info!("No ephemeris tables in {}, using Kepler elements", dir.display());
                } else {
                    info!("Loaded {} ephemeris tables from {}", tables.len(), dir.display());
                }
                tables
            }
            Err(e) => {
                warn!("Ignoring ephemeris tables in {}: {}", dir.display(), e);
                EphemerisTables::default()
            }
        };
        Self::with_tables(tables)
    }

    /// Create an ephemeris backed by the given tables (possibly empty).
    pub fn with_tables(tables: EphemerisTables) -> Self {
        let body_data: HashMap<_, _> = all_bodies().into_iter().map(|d| (d.id, d)).collect();
        let total_mass = body_data.values().map(|d| d.mass).sum();

        Self {
            body_data,
            tables,
            frame: ReferenceFrame::default(),
            table_fallback_offsets: RwLock::new(HashMap::new()),
            total_mass,
        }
    }

    /// Report positions in `frame`.
    pub fn with_frame(mut self, frame: ReferenceFrame) -> Self {
        self.frame = frame;
        self
    }

    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Get the body data for a celestial body ID.
    pub fn get_body_data_by_id(&self, id: CelestialBodyId) -> Option<&CelestialBodyData> {
        self.body_data.get(&id)
    }

    /// Compute barycentric position of a body at given time, in the configured frame.
    ///
    /// # Arguments
    /// * `id` - The body
    /// * `time` - Time in seconds since J2000 epoch
    ///
    /// # Returns
    /// Position in AU from the solar system barycenter, or None if the body is unknown.
    pub fn get_position_by_id(&self, id: CelestialBodyId, time: f64) -> Option<DVec3> {
        self.ecliptic_position(id, time)
            .map(|p| self.frame.from_ecliptic(p))
    }

    fn ecliptic_position(&self, id: CelestialBodyId, time: f64) -> Option<DVec3> {
        if let Some(tbl) = self.tables.table(id) {
            if tbl.covers(time) {
                if let Ok(pos) = tbl.sample_position(time) {
                    return Some(pos);
                }
            } else if time > tbl.end_time() {
                // Past coverage end: patched Kepler continuation.
                let base = self.get_kepler_position_by_id(id, time)?;
                let offset = self.get_or_compute_table_offset(id, tbl.end_time())?;
                return Some(base + offset);
            }
            // Before the table starts, plain Kepler without offsets.
        }

        self.get_kepler_position_by_id(id, time)
    }

    /// Barycentric Kepler position (J2000 ecliptic, AU).
    fn get_kepler_position_by_id(&self, id: CelestialBodyId, time: f64) -> Option<DVec3> {
        let helio = self.heliocentric_position(id, time)?;
        Some(helio + self.sun_barycentric_offset(time))
    }

    fn heliocentric_position(&self, id: CelestialBodyId, time: f64) -> Option<DVec3> {
        let data = self.body_data.get(&id)?;
        Some(match &data.orbit {
            None => DVec3::ZERO,
            Some(orbit) => orbit.get_position(time),
        })
    }

    /// Position of the Sun relative to the barycenter: -Σ mᵢhᵢ / Σm.
    fn sun_barycentric_offset(&self, time: f64) -> DVec3 {
        let weighted: DVec3 = CelestialBodyId::PLANETS
            .iter()
            .filter_map(|&id| {
                let mass = self.body_data.get(&id)?.mass;
                Some(self.heliocentric_position(id, time)? * mass)
            })
            .sum();
        -weighted / self.total_mass
    }

    /// Computes (or reuses) the table→Kepler continuity offset at `t_end`.
    fn get_or_compute_table_offset(&self, id: CelestialBodyId, t_end: f64) -> Option<DVec3> {
        if let Ok(guard) = self.table_fallback_offsets.read()
            && let Some(offset) = guard.get(&id).copied()
        {
            return Some(offset);
        }

        let table_end = self.tables.table(id)?.sample_position(t_end).ok()?;
        let kepler_end = self.get_kepler_position_by_id(id, t_end)?;
        let offset = table_end - kepler_end;

        // Best-effort cache; a poisoned lock only costs a recomputation.
        if let Ok(mut guard) = self.table_fallback_offsets.write() {
            guard.insert(id, offset);
        }

        Some(offset)
    }
}

impl EphemerisSource for Ephemeris {
    fn position_au(&self, id: CelestialBodyId, time: f64) -> Option<DVec3> {
        self.get_position_by_id(id, time)
    }
}
