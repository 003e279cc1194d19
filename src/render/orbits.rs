//! Orbit path rendering using Bevy Gizmos.
//!
//! Each body's circular orbit polyline is drawn dashed, with the dash pattern
//! measured in screen pixels so it looks the same at every zoom level.

use bevy::{math::DVec2, prelude::*, window::PrimaryWindow};

use crate::camera::world_units_per_pixel;
use crate::render::ProjectedScene;
use crate::zoom::ViewState;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, configure_orbit_gizmos);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    pub color: Color,
    /// Line width in pixels.
    pub line_width: f32,
    /// Dash pattern: draw `dash_on` pixels, then skip `dash_off` pixels.
    ///
    /// Set `dash_off` to 0 for a solid line.
    pub dash_on: f32,
    pub dash_off: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        // matplotlib's "--" style: 3.7 line widths on, 1.6 off
        Self {
            visible: true,
            color: Color::WHITE,
            line_width: 2.5,
            dash_on: 9.25,
            dash_off: 4.0,
        }
    }
}

/// Apply line width to the default gizmo group when settings change.
fn configure_orbit_gizmos(
    settings: Res<OrbitPathSettings>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    if !settings.is_changed() {
        return;
    }
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = settings.line_width;
}

/// Most dash pieces emitted for one polyline, whatever the zoom level.
pub const MAX_DASHES_PER_ORBIT: usize = 4096;

/// Axis-aligned world-space rectangle that polylines are clipped to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub min: DVec2,
    pub max: DVec2,
}

impl ClipRect {
    /// World region shown in a window of `window_size` pixels, grown by `pad`
    /// world units on every side.
    pub fn visible(view: &ViewState, window_size: Vec2, pad: f64) -> Option<Self> {
        let units_per_px = world_units_per_pixel(view, window_size) as f64;
        if !units_per_px.is_finite() || units_per_px <= 0.0 {
            return None;
        }
        let center = DVec2::new(view.x.center(), view.y.center());
        let half = window_size.as_dvec2() * (0.5 * units_per_px) + DVec2::splat(pad.max(0.0));
        Some(Self {
            min: center - half,
            max: center + half,
        })
    }

    /// Parameter interval of segment `a`→`b` inside the rectangle (Liang–Barsky).
    pub fn clip_segment(&self, a: DVec2, b: DVec2) -> Option<(f64, f64)> {
        let d = b - a;
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for (p, q) in [
            (-d.x, a.x - self.min.x),
            (d.x, self.max.x - a.x),
            (-d.y, a.y - self.min.y),
            (d.y, self.max.y - a.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 >= t1 {
                return None;
            }
        }
        Some((t0, t1))
    }

    /// Whether an origin-centred circle of `radius` can cross the rectangle.
    ///
    /// Tolerates the inward sag of a sampled circle's chords.
    pub fn touches_circle(&self, radius: f64) -> bool {
        let nearest = DVec2::ZERO.clamp(self.min, self.max).length();
        let farthest = DVec2::new(
            self.min.x.abs().max(self.max.x.abs()),
            self.min.y.abs().max(self.max.y.abs()),
        )
        .length();
        nearest <= radius && farthest >= radius * (1.0 - 1e-4)
    }
}

/// Largest distance of any polyline point from the origin.
fn orbit_radius(points: &[DVec2]) -> f64 {
    points.iter().map(|p| p.length()).fold(0.0, f64::max)
}

/// Split a polyline into dash segments.
///
/// `on` and `off` are lengths along the path in the polyline's own units.
/// The pattern runs continuously across vertices, starting with a dash. With
/// a `clip` rectangle only the visible parts are dashed, and the phase still
/// follows the full path length. At most [`MAX_DASHES_PER_ORBIT`] pieces are
/// returned.
pub fn dash_segments(
    points: &[DVec2],
    on: f64,
    off: f64,
    clip: Option<&ClipRect>,
) -> Vec<(DVec2, DVec2)> {
    let mut dashes: Vec<(DVec2, DVec2)> = Vec::new();
    if points.len() < 2 || !on.is_finite() || on <= 0.0 {
        return dashes;
    }
    let off = off.max(0.0);
    let solid = off == 0.0;
    let period = on + off;

    // Path length before the current segment
    let mut travelled = 0.0;

    'segments: for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        let len = a.distance(b);
        if !len.is_finite() || len <= 0.0 {
            continue;
        }
        let start = travelled;
        travelled += len;

        let (t0, t1) = match clip {
            Some(rect) => match rect.clip_segment(a, b) {
                Some(span) => span,
                None => continue,
            },
            None => (0.0, 1.0),
        };
        let point_at = |t: f64| match t {
            t if t <= 0.0 => a,
            t if t >= 1.0 => b,
            t => a + (b - a) * t,
        };

        if solid {
            if dashes.len() >= MAX_DASHES_PER_ORBIT {
                break;
            }
            dashes.push((point_at(t0), point_at(t1)));
            continue;
        }

        let (s0, s1) = (start + t0 * len, start + t1 * len);
        let first = (s0 / period).floor();
        let count = ((s1 / period).floor() - first) as usize + 1;

        for i in 0..count {
            if dashes.len() >= MAX_DASHES_PER_ORBIT {
                break 'segments;
            }
            let k = first + i as f64;
            let d0 = (k * period).max(s0);
            let d1 = (k * period + on).min(s1);
            if d1 <= d0 {
                continue;
            }
            let ta = if d0 == s0 { t0 } else { (d0 - start) / len };
            let tb = if d1 == s1 { t1 } else { (d1 - start) / len };
            let (p, q) = (point_at(ta), point_at(tb));

            // Merge dash pieces that continue across a vertex
            match dashes.last_mut() {
                Some(last) if last.1 == p && collinear(last.0, p, q) => last.1 = q,
                _ => dashes.push((p, q)),
            }
        }
    }

    dashes
}

fn collinear(a: DVec2, b: DVec2, c: DVec2) -> bool {
    (b - a).perp_dot(c - b).abs() <= 1e-12 * (b - a).length() * (c - b).length()
}

/// Draw every projected orbit that crosses the window as a dashed polyline.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    scene: Res<ProjectedScene>,
    view: Res<ViewState>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    if !settings.visible {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let units_per_px = world_units_per_pixel(&view, window.size()) as f64;
    if units_per_px <= 0.0 {
        return;
    }

    let on = settings.dash_on as f64 * units_per_px;
    let off = settings.dash_off as f64 * units_per_px;
    let pad = on + off + settings.line_width as f64 * units_per_px;
    let Some(rect) = ClipRect::visible(&view, window.size(), pad) else {
        return;
    };

    for projected in &scene.bodies {
        if !rect.touches_circle(orbit_radius(&projected.orbit)) {
            continue;
        }
        for (a, b) in dash_segments(&projected.orbit, on, off, Some(&rect)) {
            gizmos.line_2d(a.as_vec2(), b.as_vec2(), settings.color);
        }
    }
}
