//! The nine plotted bodies and their display styling.

use bevy::prelude::*;

use crate::ephemeris::CelestialBodyId;

/// Marker area per unit of [`Body::size`], in square points.
pub const MARKER_AREA_PER_SIZE: f32 = 45.0;

/// One plotted body: its ephemeris handle and how it is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Handle into the ephemeris.
    pub id: CelestialBodyId,
    /// Legend label.
    pub name: &'static str,
    /// Marker fill color.
    pub color: Color,
    /// Relative marker size (1 = smallest).
    pub size: u8,
}

impl Body {
    /// Marker area in square points.
    pub fn marker_area(&self) -> f32 {
        self.size as f32 * MARKER_AREA_PER_SIZE
    }

    /// Marker radius in points: the radius of a circle of [`Body::marker_area`].
    pub fn marker_radius_points(&self) -> f32 {
        self.marker_area().sqrt() / 2.0
    }
}

/// Sun and planets in plotting order.
pub const SOLAR_SYSTEM: [Body; 9] = [
    Body {
        id: CelestialBodyId::Sun,
        name: "Sun",
        color: Color::srgb(1.0, 1.0, 0.0), // yellow
        size: 9,
    },
    Body {
        id: CelestialBodyId::Mercury,
        name: "Mercury",
        color: Color::srgb(0.412, 0.412, 0.412), // dimgray
        size: 1,
    },
    Body {
        id: CelestialBodyId::Venus,
        name: "Venus",
        color: Color::srgb(1.0, 0.271, 0.0), // orangered
        size: 3,
    },
    Body {
        id: CelestialBodyId::Earth,
        name: "Earth",
        color: Color::srgb(0.0, 0.0, 1.0), // blue
        size: 4,
    },
    Body {
        id: CelestialBodyId::Mars,
        name: "Mars",
        color: Color::srgb(0.698, 0.133, 0.133), // firebrick
        size: 2,
    },
    Body {
        id: CelestialBodyId::Jupiter,
        name: "Jupiter",
        color: Color::srgb(0.647, 0.165, 0.165), // brown
        size: 8,
    },
    Body {
        id: CelestialBodyId::Saturn,
        name: "Saturn",
        color: Color::srgb(0.741, 0.718, 0.420), // darkkhaki
        size: 7,
    },
    Body {
        id: CelestialBodyId::Uranus,
        name: "Uranus",
        color: Color::srgb(0.690, 0.769, 0.871), // lightsteelblue
        size: 6,
    },
    Body {
        id: CelestialBodyId::Neptune,
        name: "Neptune",
        color: Color::srgb(0.0, 0.808, 0.820), // darkturquoise
        size: 5,
    },
];

/// Look up a plotted body by its ephemeris handle.
pub fn find_body(id: CelestialBodyId) -> Option<&'static Body> {
    SOLAR_SYSTEM.iter().find(|b| b.id == id)
}
