//! Visible axis bounds and the scroll-wheel zoom that rescales them.

use bevy::prelude::*;
use thiserror::Error;

/// Half-width multiplier for one zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 0.9;

/// Half-width multiplier for one zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

/// Smallest half-width a zoom step may produce, in AU.
pub const MIN_HALF_WIDTH: f64 = 1e-6;

/// Largest half-width a zoom step may produce, in AU.
pub const MAX_HALF_WIDTH: f64 = 1e4;

/// Default margin added around the outermost orbit (fraction of its radius).
pub const DEFAULT_MARGIN: f64 = 0.05;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ViewError {
    #[error("axis bounds must be finite, got ({min}, {max})")]
    NonFinite { min: f64, max: f64 },

    #[error("axis bounds must satisfy min < max, got ({min}, {max})")]
    Unordered { min: f64, max: f64 },

    #[error("enclosing radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

/// One axis of the visible region, in AU.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ViewError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ViewError::NonFinite { min, max });
        }
        if min >= max {
            return Err(ViewError::Unordered { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    pub fn half_width(&self) -> f64 {
        0.5 * (self.max - self.min)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Rescale about the center, or `None` if the step is not allowed.
    ///
    /// A step may not push the half-width further past a zoom limit. An axis
    /// already outside the limits may still step back toward them.
    fn scaled(&self, factor: f64) -> Option<Self> {
        let center = self.center();
        let min = center + (self.min - center) * factor;
        let max = center + (self.max - center) * factor;
        let (old_half, half) = (self.half_width(), 0.5 * (max - min));
        if !half.is_finite()
            || (half > MAX_HALF_WIDTH && half > old_half)
            || (half < MIN_HALF_WIDTH && half < old_half)
        {
            return None;
        }
        Self::new(min, max).ok()
    }
}

/// Current visible region of the plot.
///
/// Mutated only by the zoom handlers; bounds are finite and ordered after
/// every step.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl Default for ViewState {
    fn default() -> Self {
        let unit = AxisRange { min: -1.0, max: 1.0 };
        Self { x: unit, y: unit }
    }
}

impl ViewState {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Result<Self, ViewError> {
        Ok(Self {
            x: AxisRange::new(x.0, x.1)?,
            y: AxisRange::new(y.0, y.1)?,
        })
    }

    /// Square view centered on the origin containing a circle of `radius`,
    /// padded by `margin` (a fraction of the radius).
    pub fn enclosing(radius: f64, margin: f64) -> Result<Self, ViewError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ViewError::InvalidRadius(radius));
        }
        let half = radius * (1.0 + margin.max(0.0));
        Self::new((-half, half), (-half, half))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x.center() as f32, self.y.center() as f32)
    }

    pub fn width(&self) -> f64 {
        self.x.width()
    }

    pub fn height(&self) -> f64 {
        self.y.width()
    }
}

/// The view restored by the Home key.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct InitialView(pub ViewState);

/// Zoom configuration.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ZoomSettings {
    /// Margin around the outermost orbit in the initial view.
    pub margin: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Direction of a single scroll step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Zoom in.
    Up,
    /// Zoom out.
    Down,
    Neutral,
}

impl ScrollDirection {
    /// Classify a vertical wheel delta.
    pub fn from_wheel(delta_y: f32) -> Self {
        if delta_y > 0.0 {
            ScrollDirection::Up
        } else if delta_y < 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Neutral
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            ScrollDirection::Up => ZOOM_IN_FACTOR,
            ScrollDirection::Down => ZOOM_OUT_FACTOR,
            ScrollDirection::Neutral => 1.0,
        }
    }
}

/// Apply one scroll step to `view`, scaling each axis about its center.
///
/// A step that would take either half-width further outside
/// [`MIN_HALF_WIDTH`]..=[`MAX_HALF_WIDTH`] returns `view` unchanged.
pub fn on_scroll(view: &ViewState, direction: ScrollDirection) -> ViewState {
    if direction == ScrollDirection::Neutral {
        return *view;
    }

    let factor = direction.factor();
    match (view.x.scaled(factor), view.y.scaled(factor)) {
        (Some(x), Some(y)) => ViewState { x, y },
        _ => *view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(half: f64) -> ViewState {
        ViewState::new((-half, half), (-half, half)).unwrap()
    }

    #[test]
    fn test_zoom_in_from_ten() {
        let view = on_scroll(&square(10.0), ScrollDirection::Up);
        assert_relative_eq!(view.x.min, -9.0);
        assert_relative_eq!(view.x.max, 9.0);
        assert_relative_eq!(view.y.min, -9.0);
        assert_relative_eq!(view.y.max, 9.0);
    }

    #[test]
    fn test_zoom_out_from_ten() {
        let view = on_scroll(&square(10.0), ScrollDirection::Down);
        assert_relative_eq!(view.x.min, -11.0);
        assert_relative_eq!(view.x.max, 11.0);
    }

    #[test]
    fn test_up_then_down_is_not_identity() {
        let start = ViewState::new((2.0, 6.0), (-3.0, 1.0)).unwrap();
        let view = on_scroll(&on_scroll(&start, ScrollDirection::Up), ScrollDirection::Down);

        assert_relative_eq!(view.x.center(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(view.y.center(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(view.x.half_width(), 2.0 * 0.99, epsilon = 1e-12);
        assert_relative_eq!(view.y.half_width(), 2.0 * 0.99, epsilon = 1e-12);
    }

    #[test]
    fn test_neutral_is_noop() {
        let start = ViewState::new((0.5, 0.75), (-100.0, 3.0)).unwrap();
        assert_eq!(on_scroll(&start, ScrollDirection::Neutral), start);
    }

    #[test]
    fn test_axes_scale_independently() {
        let start = ViewState::new((0.0, 10.0), (100.0, 102.0)).unwrap();
        let view = on_scroll(&start, ScrollDirection::Up);
        assert_relative_eq!(view.x.min, 0.5);
        assert_relative_eq!(view.x.max, 9.5);
        assert_relative_eq!(view.y.min, 100.1, epsilon = 1e-12);
        assert_relative_eq!(view.y.max, 101.9, epsilon = 1e-12);
    }

    #[test]
    fn test_zoom_stops_at_limits() {
        let tiny = square(MIN_HALF_WIDTH);
        assert_eq!(on_scroll(&tiny, ScrollDirection::Up), tiny);

        let huge = square(MAX_HALF_WIDTH);
        assert_eq!(on_scroll(&huge, ScrollDirection::Down), huge);

        // Either axis at its limit blocks the whole step
        let mixed = ViewState::new((-MIN_HALF_WIDTH, MIN_HALF_WIDTH), (-1.0, 1.0)).unwrap();
        assert_eq!(on_scroll(&mixed, ScrollDirection::Up), mixed);
    }

    #[test]
    fn test_oversized_view_can_zoom_back_in() {
        let wide = square(1e5);
        let view = on_scroll(&wide, ScrollDirection::Up);
        assert_relative_eq!(view.x.min, -9e4);
        assert_relative_eq!(view.y.max, 9e4);
        assert_eq!(on_scroll(&wide, ScrollDirection::Down), wide);

        // A fit around a distant orbit with a large margin starts past the limit
        let fitted = ViewState::enclosing(30.0, 400.0).unwrap();
        let view = on_scroll(&fitted, ScrollDirection::Up);
        assert_relative_eq!(view.x.half_width(), 0.9 * 12030.0, epsilon = 1e-9);
        assert!(view.x.half_width() < fitted.x.half_width());
    }

    #[test]
    fn test_undersized_view_can_zoom_back_out() {
        let narrow = square(5e-7);
        let view = on_scroll(&narrow, ScrollDirection::Down);
        assert_relative_eq!(view.x.max, 5.5e-7, epsilon = 1e-18);
        assert_relative_eq!(view.y.min, -5.5e-7, epsilon = 1e-18);
        assert_eq!(on_scroll(&narrow, ScrollDirection::Up), narrow);
    }

    #[test]
    fn test_from_wheel() {
        assert_eq!(ScrollDirection::from_wheel(1.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_wheel(0.01), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_wheel(-3.0), ScrollDirection::Down);
        assert_eq!(ScrollDirection::from_wheel(0.0), ScrollDirection::Neutral);
    }

    #[test]
    fn test_new_rejects_bad_bounds() {
        assert_eq!(
            ViewState::new((1.0, 1.0), (0.0, 1.0)),
            Err(ViewError::Unordered { min: 1.0, max: 1.0 })
        );
        assert!(matches!(
            ViewState::new((0.0, 1.0), (f64::NEG_INFINITY, 1.0)),
            Err(ViewError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_enclosing_adds_margin() {
        let view = ViewState::enclosing(30.0, DEFAULT_MARGIN).unwrap();
        assert_relative_eq!(view.x.max, 31.5);
        assert_relative_eq!(view.y.min, -31.5);
        assert_eq!(view.center(), Vec2::ZERO);

        assert_eq!(
            ViewState::enclosing(0.0, DEFAULT_MARGIN),
            Err(ViewError::InvalidRadius(0.0))
        );
    }
}
