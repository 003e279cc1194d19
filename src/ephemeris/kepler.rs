//! Kepler orbit solver using Newton's method for the Kepler equation.

use bevy::math::DVec3;

use crate::types::{DAYS_PER_CENTURY, DEG_TO_RAD, SECONDS_PER_DAY};

/// Linear change of each element per Julian century.
///
/// Same units as the matching [`KeplerOrbit`] field (AU, radians).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SecularRates {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub longitude_of_perihelion: f64,
    pub ascending_node: f64,
}

/// Heliocentric Keplerian elements referred to the J2000 ecliptic.
/// Angular values in radians, distances in AU, time in seconds since J2000.
#[derive(Clone, Debug)]
pub struct KeplerOrbit {
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1 for ellipse)
    pub eccentricity: f64,
    /// Inclination to the ecliptic in radians
    pub inclination: f64,
    /// Mean longitude at J2000 in radians
    pub mean_longitude: f64,
    /// Longitude of perihelion (ϖ = Ω + ω) in radians
    pub longitude_of_perihelion: f64,
    /// Longitude of the ascending node (Ω) in radians
    pub ascending_node: f64,
    /// Secular drift of the elements
    pub rates: SecularRates,
}

impl KeplerOrbit {
    /// Create a Kepler orbit from J2000 mean elements, with no secular drift.
    ///
    /// # Arguments
    /// * `semi_major_axis` - Semi-major axis in AU
    /// * `eccentricity` - Orbital eccentricity (0-1 for elliptical orbits)
    /// * `inclination_deg` - Inclination in degrees
    /// * `mean_longitude_deg` - Mean longitude at J2000 in degrees
    /// * `longitude_of_perihelion_deg` - Longitude of perihelion in degrees
    /// * `ascending_node_deg` - Longitude of the ascending node in degrees
    pub fn from_elements(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        mean_longitude_deg: f64,
        longitude_of_perihelion_deg: f64,
        ascending_node_deg: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination: inclination_deg * DEG_TO_RAD,
            mean_longitude: mean_longitude_deg * DEG_TO_RAD,
            longitude_of_perihelion: longitude_of_perihelion_deg * DEG_TO_RAD,
            ascending_node: ascending_node_deg * DEG_TO_RAD,
            rates: SecularRates::default(),
        }
    }

    /// Attach per-century rates, given in AU and degrees like the elements.
    pub fn with_rates(
        mut self,
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        mean_longitude_deg: f64,
        longitude_of_perihelion_deg: f64,
        ascending_node_deg: f64,
    ) -> Self {
        self.rates = SecularRates {
            semi_major_axis,
            eccentricity,
            inclination: inclination_deg * DEG_TO_RAD,
            mean_longitude: mean_longitude_deg * DEG_TO_RAD,
            longitude_of_perihelion: longitude_of_perihelion_deg * DEG_TO_RAD,
            ascending_node: ascending_node_deg * DEG_TO_RAD,
        };
        self
    }

    /// Osculating elements at `time` (seconds since J2000), rates applied.
    pub fn elements_at(&self, time: f64) -> KeplerOrbit {
        let t = time / SECONDS_PER_DAY / DAYS_PER_CENTURY;
        let r = &self.rates;
        KeplerOrbit {
            semi_major_axis: self.semi_major_axis + r.semi_major_axis * t,
            eccentricity: self.eccentricity + r.eccentricity * t,
            inclination: self.inclination + r.inclination * t,
            mean_longitude: self.mean_longitude + r.mean_longitude * t,
            longitude_of_perihelion: self.longitude_of_perihelion
                + r.longitude_of_perihelion * t,
            ascending_node: self.ascending_node + r.ascending_node * t,
            rates: self.rates,
        }
    }

    /// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E
    /// using Newton's method.
    ///
    /// # Arguments
    /// * `mean_anomaly` - Mean anomaly M in radians
    ///
    /// # Returns
    /// Eccentric anomaly E in radians
    pub fn solve_eccentric_anomaly(&self, mean_anomaly: f64) -> f64 {
        // Normalize mean anomaly to [0, 2π)
        let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);

        // Initial guess: E = M for low eccentricity, π for high e
        let mut e_anomaly = if self.eccentricity < 0.8 {
            m
        } else {
            std::f64::consts::PI
        };

        for _ in 0..50 {
            let (sin_e, cos_e) = e_anomaly.sin_cos();

            // f(E) = E - e*sin(E) - M
            let f = e_anomaly - self.eccentricity * sin_e - m;
            // f'(E) = 1 - e*cos(E)
            let f_prime = 1.0 - self.eccentricity * cos_e;

            let delta = f / f_prime;
            e_anomaly -= delta;

            if delta.abs() < 1e-12 {
                break;
            }
        }

        e_anomaly
    }

    /// Heliocentric position at `time`, in AU, J2000 ecliptic frame.
    pub fn get_position(&self, time: f64) -> DVec3 {
        let el = self.elements_at(time);
        let e = el.eccentricity;
        let a = el.semi_major_axis;

        // Argument of perihelion and mean anomaly
        let omega = el.longitude_of_perihelion - el.ascending_node;
        let mean_anomaly = el.mean_longitude - el.longitude_of_perihelion;
        let e_anomaly = el.solve_eccentric_anomaly(mean_anomaly);

        // Position in the orbital plane, x toward perihelion
        let xp = a * (e_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * e_anomaly.sin();

        // Rotate by ω, i, Ω into the ecliptic frame
        let (sin_w, cos_w) = omega.sin_cos();
        let (sin_n, cos_n) = el.ascending_node.sin_cos();
        let (sin_i, cos_i) = el.inclination.sin_cos();

        DVec3::new(
            (cos_w * cos_n - sin_w * sin_n * cos_i) * xp
                + (-sin_w * cos_n - cos_w * sin_n * cos_i) * yp,
            (cos_w * sin_n + sin_w * cos_n * cos_i) * xp
                + (-sin_w * sin_n + cos_w * cos_n * cos_i) * yp,
            (sin_w * sin_i) * xp + (cos_w * sin_i) * yp,
        )
    }

    /// Mean motion in radians per day, from the mean-longitude rate.
    #[cfg(test)]
    pub fn mean_motion(&self) -> f64 {
        self.rates.mean_longitude / DAYS_PER_CENTURY
    }

    /// Orbital period in days (infinite when no mean-longitude rate is set).
    #[cfg(test)]
    pub fn period_days(&self) -> f64 {
        std::f64::consts::TAU / self.mean_motion()
    }
}
