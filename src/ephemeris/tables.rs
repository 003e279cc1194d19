//! Per-body ephemeris tables loaded from a directory.
//!
//! Nothing in this crate generates the files. They are exported from JPL
//! Horizons vector tables (barycentric, J2000 ecliptic, AU and AU/day, fixed
//! step) into the `PLNEPH1` layout described in [`super::table`], one
//! `<body>.bin` per body, and placed in [`DEFAULT_TABLES_DIR`]. Without them
//! every body uses the Kepler model.

use std::collections::HashMap;
use std::path::Path;

use crate::ephemeris::data::CelestialBodyId;
use crate::ephemeris::table::{EphemerisTable, EphemerisTableError};

/// Default location of the binary tables, relative to the working directory.
pub const DEFAULT_TABLES_DIR: &str = "assets/ephemeris";

/// Time range covered by a loaded ephemeris table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableCoverage {
    pub start: f64,
    pub end: f64,
}

/// Per-body tables keyed by body.
#[derive(Default)]
pub struct EphemerisTables {
    tables: HashMap<CelestialBodyId, EphemerisTable>,
}

impl EphemerisTables {
    /// Load all available tables from `dir`.
    ///
    /// Missing files are ignored; callers fall back to Kepler for those bodies.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, EphemerisTableError> {
        let dir = dir.as_ref();
        let mut tables = Self::default();

        for &id in CelestialBodyId::ALL {
            let path = dir.join(id.table_file_name());
            if !path.exists() {
                continue;
            }
            tables.insert(id, EphemerisTable::load(&path)?)?;
        }

        Ok(tables)
    }

    /// Add a table for `id`, checking that its header names the same body.
    pub fn insert(
        &mut self,
        id: CelestialBodyId,
        table: EphemerisTable,
    ) -> Result<(), EphemerisTableError> {
        let expected = id.table_id();
        if table.body_id != expected {
            // Wrong file for this body (renamed or stale export).
            return Err(EphemerisTableError::BodyIdMismatch {
                expected,
                got: table.body_id,
            });
        }
        self.tables.insert(id, table);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn has(&self, id: CelestialBodyId) -> bool {
        self.tables.contains_key(&id)
    }

    /// Returns the coverage window for a body's table, if present.
    pub fn coverage(&self, id: CelestialBodyId) -> Option<TableCoverage> {
        let tbl = self.tables.get(&id)?;
        Some(TableCoverage {
            start: tbl.start_time(),
            end: tbl.end_time(),
        })
    }

    /// Returns a reference to the underlying table, if present.
    pub fn table(&self, id: CelestialBodyId) -> Option<&EphemerisTable> {
        self.tables.get(&id)
    }
}
