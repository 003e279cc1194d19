//! Orbital elements and masses for the Sun and the eight planets.
//!
//! Elements are the J2000 mean elements with secular rates from
//! Standish, "Keplerian Elements for Approximate Positions of the Major
//! Planets" (valid 1800 AD - 2050 AD), referred to the J2000 ecliptic.

use super::kepler::KeplerOrbit;

/// Identifier for the bodies the ephemeris can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CelestialBodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl CelestialBodyId {
    /// Every body, Sun first, then planets outward.
    pub const ALL: &'static [CelestialBodyId] = &[
        CelestialBodyId::Sun,
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
    ];

    /// All planets (not including the Sun)
    pub const PLANETS: &'static [CelestialBodyId] = &[
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBodyId::Sun => "Sun",
            CelestialBodyId::Mercury => "Mercury",
            CelestialBodyId::Venus => "Venus",
            CelestialBodyId::Earth => "Earth",
            CelestialBodyId::Mars => "Mars",
            CelestialBodyId::Jupiter => "Jupiter",
            CelestialBodyId::Saturn => "Saturn",
            CelestialBodyId::Uranus => "Uranus",
            CelestialBodyId::Neptune => "Neptune",
        }
    }

    /// Stable numeric id written into ephemeris table headers.
    pub fn table_id(&self) -> u32 {
        match self {
            CelestialBodyId::Sun => 0,
            CelestialBodyId::Mercury => 1,
            CelestialBodyId::Venus => 2,
            CelestialBodyId::Earth => 3,
            CelestialBodyId::Mars => 4,
            CelestialBodyId::Jupiter => 5,
            CelestialBodyId::Saturn => 6,
            CelestialBodyId::Uranus => 7,
            CelestialBodyId::Neptune => 8,
        }
    }

    /// File name of this body's table inside the tables directory.
    pub fn table_file_name(&self) -> String {
        format!("{}.bin", self.name().to_lowercase())
    }
}

/// Static data for a celestial body.
#[derive(Clone, Debug)]
pub struct CelestialBodyData {
    pub id: CelestialBodyId,
    pub mass: f64, // kg
    /// Heliocentric orbit; `None` for the Sun.
    pub orbit: Option<KeplerOrbit>,
}

/// Sun's mass in kg.
pub const SUN_MASS: f64 = 1.98847e30;

/// Get orbital and physical data for a celestial body.
pub fn get_body_data(id: CelestialBodyId) -> CelestialBodyData {
    match id {
        CelestialBodyId::Sun => CelestialBodyData {
            id,
            mass: SUN_MASS,
            orbit: None,
        },

        CelestialBodyId::Mercury => CelestialBodyData {
            id,
            mass: 3.3011e23,
            orbit: Some(
                KeplerOrbit::from_elements(
                    0.38709927,   // semi-major axis (AU)
                    0.20563593,   // eccentricity
                    7.00497902,   // inclination (deg)
                    252.25032350, // mean longitude (deg)
                    77.45779628,  // longitude of perihelion (deg)
                    48.33076593,  // longitude of ascending node (deg)
                )
                .with_rates(
                    0.00000037,
                    0.00001906,
                    -0.00594749,
                    149472.67411175,
                    0.16047689,
                    -0.12534081,
                ),
            ),
        },

        CelestialBodyId::Venus => CelestialBodyData {
            id,
            mass: 4.8675e24,
            orbit: Some(
                KeplerOrbit::from_elements(
                    0.72333566,
                    0.00677672,
                    3.39467605,
                    181.97909950,
                    131.60246718,
                    76.67984255,
                )
                .with_rates(
                    0.00000390,
                    -0.00004107,
                    -0.00078890,
                    58517.81538729,
                    0.00268329,
                    -0.27769418,
                ),
            ),
        },

        // Earth-Moon barycenter elements; mass includes the Moon.
        CelestialBodyId::Earth => CelestialBodyData {
            id,
            mass: 5.9724e24 + 7.342e22,
            orbit: Some(
                KeplerOrbit::from_elements(
                    1.00000261,
                    0.01671123,
                    -0.00001531,
                    100.46457166,
                    102.93768193,
                    0.0,
                )
                .with_rates(
                    0.00000562,
                    -0.00004392,
                    -0.01294668,
                    35999.37244981,
                    0.32327364,
                    0.0,
                ),
            ),
        },

        CelestialBodyId::Mars => CelestialBodyData {
            id,
            mass: 6.4171e23,
            orbit: Some(
                KeplerOrbit::from_elements(
                    1.52371034,
                    0.09339410,
                    1.84969142,
                    -4.55343205,
                    -23.94362959,
                    49.55953891,
                )
                .with_rates(
                    0.00001847,
                    0.00007882,
                    -0.00813131,
                    19140.30268499,
                    0.44441088,
                    -0.29257343,
                ),
            ),
        },

        CelestialBodyId::Jupiter => CelestialBodyData {
            id,
            mass: 1.8982e27,
            orbit: Some(
                KeplerOrbit::from_elements(
                    5.20288700,
                    0.04838624,
                    1.30439695,
                    34.39644051,
                    14.72847983,
                    100.47390909,
                )
                .with_rates(
                    -0.00011607,
                    -0.00013253,
                    -0.00183714,
                    3034.74612775,
                    0.21252668,
                    0.20469106,
                ),
            ),
        },

        CelestialBodyId::Saturn => CelestialBodyData {
            id,
            mass: 5.6834e26,
            orbit: Some(
                KeplerOrbit::from_elements(
                    9.53667594,
                    0.05386179,
                    2.48599187,
                    49.95424423,
                    92.59887831,
                    113.66242448,
                )
                .with_rates(
                    -0.00125060,
                    -0.00050991,
                    0.00193609,
                    1222.49362201,
                    -0.41897216,
                    -0.28867794,
                ),
            ),
        },

        CelestialBodyId::Uranus => CelestialBodyData {
            id,
            mass: 8.6810e25,
            orbit: Some(
                KeplerOrbit::from_elements(
                    19.18916464,
                    0.04725744,
                    0.77263783,
                    313.23810451,
                    170.95427630,
                    74.01692503,
                )
                .with_rates(
                    -0.00196176,
                    -0.00004397,
                    -0.00242939,
                    428.48202785,
                    0.40805281,
                    0.04240589,
                ),
            ),
        },

        CelestialBodyId::Neptune => CelestialBodyData {
            id,
            mass: 1.02413e26,
            orbit: Some(
                KeplerOrbit::from_elements(
                    30.06992276,
                    0.00859048,
                    1.77004347,
                    -55.12002969,
                    44.96476227,
                    131.78422574,
                )
                .with_rates(
                    0.00026291,
                    0.00005105,
                    0.00035372,
                    218.45945325,
                    -0.32241464,
                    -0.00508664,
                ),
            ),
        },
    }
}

/// Get data for all celestial bodies, in [`CelestialBodyId::ALL`] order.
pub fn all_bodies() -> Vec<CelestialBodyData> {
    CelestialBodyId::ALL.iter().map(|&id| get_body_data(id)).collect()
}
