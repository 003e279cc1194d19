//! Planisphere - live 2D view of the solar system
//!
//! Places the Sun and planets from an ephemeris, flattens them onto a plane
//! with their true distance as radius, and draws each orbit as a circle.

pub mod body;
pub mod camera;
pub mod ephemeris;
pub mod input;
pub mod projection;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;
pub mod zoom;
