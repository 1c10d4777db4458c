//! Pure slider geometry: mapping pointer positions to values and back.
//!
//! Everything here is plain math over measured pixel sizes, so it runs (and is
//! tested) off the wasm target. The interactive component in the binary feeds
//! it DOM measurements.

use crate::config::{FALLBACK_THUMB_HALF_PX, MOBILE_BREAKPOINT_PX, VALUE_EPSILON};

/// Axis the slider travels along.
///
/// Decided once by the caller (from a viewport-width sample at startup) and
/// never re-derived on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Narrow viewports get a horizontal slider, wide ones a vertical one.
    pub fn from_viewport_width(width_px: f64) -> Self {
        if width_px <= MOBILE_BREAKPOINT_PX {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Pick the coordinate along the active axis out of an (x, y) point.
    pub fn axis_coord(self, x: f64, y: f64) -> f64 {
        match self {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }
}

/// Numeric bounds of a slider, fixed at construction.
///
/// `min == max` is a documented precondition violation: the percentage maps
/// divide by the span width and are undefined for a degenerate range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpan {
    pub min: f64,
    pub max: f64,
}

impl SliderSpan {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Linear map of a value to 0..100 of the span.
    pub fn value_to_percent(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * 100.0
    }

    /// Linear map of 0..100 back to a value.
    pub fn percent_to_value(&self, percent: f64) -> f64 {
        self.min + (self.max - self.min) * percent / 100.0
    }
}

/// Value state behind a slider: fixed bounds plus the last applied value.
///
/// Owns the clamp-then-no-op decision so every update path (drag, click,
/// programmatic set) treats an unchanged value identically: no reposition,
/// no notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    span: SliderSpan,
    /// None until the first apply, so construction always counts as a change.
    value: Option<f64>,
}

impl SliderState {
    pub fn new(span: SliderSpan) -> Self {
        Self { span, value: None }
    }

    pub fn span(&self) -> SliderSpan {
        self.span
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Clamp `raw` to the span and apply it. Returns the new value when it
    /// differs from the current one, None for a no-op.
    pub fn apply(&mut self, raw: f64) -> Option<f64> {
        let next = self.span.clamp(raw);
        if self.value.is_some_and(|v| (v - next).abs() < VALUE_EPSILON) {
            return None;
        }
        self.value = Some(next);
        Some(next)
    }
}

/// Measured track dimensions along the active axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    /// Full track length, px.
    pub size: f64,
    /// Half the thumb extent, px. Keeps the thumb center on the track.
    pub thumb_half: f64,
}

impl TrackMetrics {
    /// Build metrics from raw measurements, substituting the fallback
    /// half-extent when the thumb has no layout yet.
    pub fn measured(size: f64, thumb_extent: f64) -> Self {
        let thumb_half = if thumb_extent > 0.0 {
            thumb_extent / 2.0
        } else {
            FALLBACK_THUMB_HALF_PX
        };
        Self { size, thumb_half }
    }

    /// Length the thumb center can actually travel.
    pub fn usable(&self) -> f64 {
        (self.size - self.thumb_half * 2.0).max(1.0)
    }
}

/// Convert a pointer position (relative to the track's top/left edge along the
/// active axis) into a 0..100 percentage of the usable length.
///
/// The position is clamped so the thumb center stays on the track. Vertical
/// sliders invert: top is 100 (max), bottom is 0 (min).
pub fn position_to_percent(rel: f64, metrics: TrackMetrics, orientation: Orientation) -> f64 {
    let clamped = rel.clamp(metrics.thumb_half, metrics.size - metrics.thumb_half);
    let fraction = (clamped - metrics.thumb_half) / metrics.usable() * 100.0;
    match orientation {
        Orientation::Horizontal => fraction,
        Orientation::Vertical => 100.0 - fraction,
    }
}

/// Inverse of [`position_to_percent`]: where the thumb center sits, as a
/// percentage of the *full* track size, for a given value percentage.
pub fn thumb_center_percent(percent: f64, metrics: TrackMetrics, orientation: Orientation) -> f64 {
    let fraction = match orientation {
        Orientation::Horizontal => percent / 100.0,
        Orientation::Vertical => 1.0 - percent / 100.0,
    };
    (metrics.thumb_half + fraction * metrics.usable()) / metrics.size * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn metrics() -> TrackMetrics {
        // 200px track, 28px thumb
        TrackMetrics::measured(200.0, 28.0)
    }

    #[test]
    fn span_clamps_out_of_range_values() {
        let span = SliderSpan::new(0.0, 50.0);
        assert_eq!(span.clamp(-3.0), 0.0);
        assert_eq!(span.clamp(75.0), 50.0);
        assert_eq!(span.clamp(25.0), 25.0);
    }

    #[test]
    fn percent_value_round_trip() {
        let span = SliderSpan::new(10.0, 90.0);
        for p in [0.0, 12.5, 50.0, 99.0, 100.0] {
            let back = span.value_to_percent(span.percent_to_value(p));
            assert!((back - p).abs() < TOL, "p={p} back={back}");
        }
    }

    #[test]
    fn first_apply_always_counts_as_a_change() {
        let mut state = SliderState::new(SliderSpan::new(0.0, 50.0));
        assert_eq!(state.apply(0.0), Some(0.0));
        assert_eq!(state.value(), Some(0.0));
    }

    #[test]
    fn repeated_apply_of_equal_value_is_a_no_op() {
        let mut state = SliderState::new(SliderSpan::new(0.0, 50.0));
        assert_eq!(state.apply(25.0), Some(25.0));
        assert_eq!(state.apply(25.0), None);
        assert_eq!(state.value(), Some(25.0));
    }

    #[test]
    fn out_of_range_apply_clamps_and_still_counts() {
        let mut state = SliderState::new(SliderSpan::new(0.0, 50.0));
        assert_eq!(state.apply(25.0), Some(25.0));
        // Clamped result differs from the current value: a change.
        assert_eq!(state.apply(75.0), Some(50.0));
        // Different raw input, same clamped result: a no-op.
        assert_eq!(state.apply(120.0), None);
        assert_eq!(state.apply(-3.0), Some(0.0));
        assert_eq!(state.value(), Some(0.0));
    }

    #[test]
    fn fallback_half_extent_when_thumb_unmeasured() {
        let m = TrackMetrics::measured(200.0, 0.0);
        assert_eq!(m.thumb_half, FALLBACK_THUMB_HALF_PX);
    }

    #[test]
    fn usable_length_never_zero() {
        let m = TrackMetrics::measured(10.0, 28.0);
        assert_eq!(m.usable(), 1.0);
    }

    #[test]
    fn press_at_ends_maps_to_bounds() {
        let m = metrics();
        // Horizontal: left edge of usable length is min, right edge is max.
        assert!((position_to_percent(m.thumb_half, m, Orientation::Horizontal)).abs() < TOL);
        let p = position_to_percent(m.size - m.thumb_half, m, Orientation::Horizontal);
        assert!((p - 100.0).abs() < TOL);
        // Past the edges clamps.
        assert!((position_to_percent(-50.0, m, Orientation::Horizontal)).abs() < TOL);
        let p = position_to_percent(500.0, m, Orientation::Horizontal);
        assert!((p - 100.0).abs() < TOL);
    }

    #[test]
    fn vertical_inverts_direction() {
        let m = metrics();
        // Top of the track is max in vertical mode.
        let p = position_to_percent(m.thumb_half, m, Orientation::Vertical);
        assert!((p - 100.0).abs() < TOL);
        let p = position_to_percent(m.size - m.thumb_half, m, Orientation::Vertical);
        assert!(p.abs() < TOL);
    }

    #[test]
    fn thumb_position_is_exact_inverse() {
        let m = metrics();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for p in [0.0, 25.0, 50.0, 80.0, 100.0] {
                let pos = thumb_center_percent(p, m, orientation) / 100.0 * m.size;
                let back = position_to_percent(pos, m, orientation);
                assert!((back - p).abs() < TOL, "{orientation:?} p={p} back={back}");
            }
        }
    }

    #[test]
    fn midpoint_value_sits_at_half_track() {
        // min=0, max=50, value=25 -> thumb at the 50% position.
        let span = SliderSpan::new(0.0, 50.0);
        let m = metrics();
        let pos = thumb_center_percent(span.value_to_percent(25.0), m, Orientation::Horizontal);
        assert!((pos - 50.0).abs() < TOL);
        let pos = thumb_center_percent(span.value_to_percent(25.0), m, Orientation::Vertical);
        assert!((pos - 50.0).abs() < TOL);
    }

    #[test]
    fn full_usable_press_selects_max() {
        let span = SliderSpan::new(0.0, 50.0);
        let m = metrics();
        let percent = position_to_percent(m.size - m.thumb_half, m, Orientation::Horizontal);
        assert!((span.percent_to_value(percent) - 50.0).abs() < TOL);
    }

    #[test]
    fn thumb_extremes_stay_on_track() {
        let m = metrics();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for p in [0.0, 100.0] {
                let pos = thumb_center_percent(p, m, orientation) / 100.0 * m.size;
                assert!(pos >= m.thumb_half - TOL && pos <= m.size - m.thumb_half + TOL);
            }
        }
    }

    #[test]
    fn orientation_from_viewport() {
        assert_eq!(
            Orientation::from_viewport_width(480.0),
            Orientation::Horizontal
        );
        assert_eq!(
            Orientation::from_viewport_width(MOBILE_BREAKPOINT_PX),
            Orientation::Horizontal
        );
        assert_eq!(
            Orientation::from_viewport_width(1280.0),
            Orientation::Vertical
        );
    }
}
