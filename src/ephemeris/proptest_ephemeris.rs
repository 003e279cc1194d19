//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that orbital computations maintain expected properties
//! across a wide range of inputs.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::kepler::KeplerOrbit;
use super::{CelestialBodyId, Ephemeris, EphemerisSource, EphemerisTables, ReferenceFrame};
use crate::types::SECONDS_PER_DAY;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The solver should always converge and produce E such that M = E - e*sin(E).
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;
        let orbit = KeplerOrbit::from_elements(1.0, eccentricity, 0.0, 0.0, 0.0, 0.0);

        let e_anom = orbit.solve_eccentric_anomaly(mean_anomaly);

        let m_check = e_anom - eccentricity * e_anom.sin();
        let m_normalized = mean_anomaly.rem_euclid(TAU);

        let error = (m_check - m_normalized).abs();
        prop_assert!(
            error < 1e-8,
            "Kepler solver failed: M={}, e={}, E={}, M_check={}, error={}",
            mean_anomaly, eccentricity, e_anom, m_check, error
        );
    }

    /// Heliocentric distance stays between perihelion and aphelion,
    /// whatever the orientation of the orbit.
    #[test]
    fn prop_distance_between_apsides(
        a in 0.3f64..40.0,
        e in 0.0f64..0.9,
        inclination in -90.0f64..90.0,
        mean_longitude in 0.0f64..360.0,
        perihelion in 0.0f64..360.0,
        node in 0.0f64..360.0,
    ) {
        let orbit = KeplerOrbit::from_elements(a, e, inclination, mean_longitude, perihelion, node);
        let r = orbit.get_position(0.0).length();
        prop_assert!(r >= a * (1.0 - e) - 1e-9, "r={} below perihelion {}", r, a * (1.0 - e));
        prop_assert!(r <= a * (1.0 + e) + 1e-9, "r={} beyond aphelion {}", r, a * (1.0 + e));
    }

    /// Height above the ecliptic is bounded by r·sin(i).
    #[test]
    fn prop_height_bounded_by_inclination(
        inclination in 0.0f64..30.0,
        mean_longitude in 0.0f64..360.0,
        node in 0.0f64..360.0,
    ) {
        let orbit = KeplerOrbit::from_elements(1.0, 0.0, inclination, mean_longitude, 0.0, node);
        let p = orbit.get_position(0.0);
        let bound = p.length() * inclination.to_radians().sin();
        prop_assert!(p.z.abs() <= bound + 1e-12, "|z|={} exceeds {}", p.z.abs(), bound);
    }

    /// Planet positions change smoothly: no jump larger than the orbital
    /// speed allows over one hour.
    #[test]
    fn prop_position_continuity(
        start_time_days in -3650.0f64..3650.0,
        body_index in 0usize..8,
    ) {
        let eph = Ephemeris::with_tables(EphemerisTables::default());
        let id = CelestialBodyId::PLANETS[body_index];
        let t = start_time_days * SECONDS_PER_DAY;

        let p0 = eph.position_au(id, t).unwrap();
        let p1 = eph.position_au(id, t + 3600.0).unwrap();

        // Mercury at perihelion moves ~59 km/s ≈ 1.4e-3 AU/hour
        prop_assert!((p1 - p0).length() < 2e-3, "{:?} jumped {} AU", id, (p1 - p0).length());
    }

    /// Changing the frame never changes a body's distance from the barycenter.
    #[test]
    fn prop_frame_preserves_distance(
        start_time_days in -3650.0f64..3650.0,
        body_index in 0usize..9,
    ) {
        let id = CelestialBodyId::ALL[body_index];
        let t = start_time_days * SECONDS_PER_DAY;
        let ecl = Ephemeris::with_tables(EphemerisTables::default())
            .with_frame(ReferenceFrame::Ecliptic)
            .position_au(id, t)
            .unwrap();
        let equ = Ephemeris::with_tables(EphemerisTables::default())
            .with_frame(ReferenceFrame::Equatorial)
            .position_au(id, t)
            .unwrap();
        prop_assert!((ecl.length() - equ.length()).abs() < 1e-12);
    }
}
