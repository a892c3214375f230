//! Scale math shared by the gauge renderers.
//!
//! Everything here is a pure function of the value and the current display
//! bounds, so the same reading always lands on the same pixel.
//!
//! # Angles
//!
//! Angles are in degrees, 0 at 3 o'clock, growing clockwise because screen
//! Y grows downward. This matches `embedded_graphics::primitives::Arc`.
//! The dial starts at [`DIAL_START_DEG`] (7:30) and sweeps
//! [`DIAL_SWEEP_DEG`] to 4:30, leaving the bottom quadrant open.
//!
//! # Tick Steps
//!
//! Major steps are "nice" numbers (1, 2 or 5 times a power of ten), picked as
//! the smallest that keeps the number of major intervals within a limit.
//! Steps of 1 and 5 split into 5 minor divisions, steps of 2 into 4.

use core::f32::consts::PI;
use core::ops::RangeInclusive;

use embedded_graphics::prelude::Point;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{DIAL_START_DEG, DIAL_SWEEP_DEG};

/// Slack used when snapping values onto a step grid.
const GRID_EPSILON: f32 = 1e-4;

/// Upper bound on ticks produced for one grid. Bounds too wide for their
/// step to stay under it draw no ticks at all.
const MAX_GRID_TICKS: i64 = 512;

/// Powers of ten tried for the major step, smallest first.
const STEP_MAGNITUDES: [f32; 10] = [0.001, 0.01, 0.1, 1.0, 10.0, 100.0, 1_000.0, 10_000.0, 100_000.0, 1_000_000.0];

/// Mantissas tried within each magnitude.
const STEP_MANTISSAS: [u8; 3] = [1, 2, 5];

// =============================================================================
// Value Mapping
// =============================================================================

/// Position of `value` within `min..=max`, clamped to `0.0..=1.0`.
///
/// A degenerate range (`max <= min`) maps everything to 0.
pub fn value_to_fraction(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Dial angle in degrees for a scale fraction.
#[inline]
pub fn fraction_to_angle(fraction: f32) -> f32 {
    DIAL_START_DEG + fraction.clamp(0.0, 1.0) * DIAL_SWEEP_DEG
}

/// Dial angle in degrees for a value on `min..=max`.
#[inline]
pub fn value_to_angle(value: f32, min: f32, max: f32) -> f32 {
    fraction_to_angle(value_to_fraction(value, min, max))
}

/// Pixel at `radius` from `center` in direction `angle_deg`.
pub fn polar_point(center: Point, radius: f32, angle_deg: f32) -> Point {
    let rad = angle_deg * (PI / 180.0);
    let dx = (radius * rad.cos()).round() as i32;
    let dy = (radius * rad.sin()).round() as i32;
    Point::new(center.x + dx, center.y + dy)
}

/// Round `value` down onto the `step` grid.
#[inline]
pub fn snap_down(value: f32, step: f32) -> f32 {
    (value / step).floor() * step
}

/// Round `value` up onto the `step` grid.
#[inline]
pub fn snap_up(value: f32, step: f32) -> f32 {
    (value / step).ceil() * step
}

// =============================================================================
// Tick Scale
// =============================================================================

/// Major/minor tick layout for a pair of display bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    min: f32,
    max: f32,
    major_step: f32,
    minor_divisions: i32,
}

impl Scale {
    /// Build a scale whose major intervals number at most `max_major`.
    pub fn new(min: f32, max: f32, max_major: u32) -> Self {
        let (major_step, mantissa) = nice_step(max - min, max_major.max(1));
        let minor_divisions = if mantissa == 2 { 4 } else { 5 };
        Self {
            min,
            max,
            major_step,
            minor_divisions,
        }
    }

    /// Distance between labelled ticks.
    #[inline]
    pub const fn major_step(&self) -> f32 {
        self.major_step
    }

    /// Number of minor intervals per major interval.
    #[inline]
    pub const fn minor_divisions(&self) -> i32 {
        self.minor_divisions
    }

    /// Decimal places needed to print major tick values.
    pub fn label_decimals(&self) -> usize {
        if self.major_step >= 1.0 - GRID_EPSILON {
            0
        } else if self.major_step >= 0.1 - GRID_EPSILON {
            1
        } else {
            2
        }
    }

    /// Values of the major ticks inside the bounds, ascending.
    pub fn major_ticks(&self) -> impl Iterator<Item = f32> {
        let step = self.major_step;
        grid_indices(self.min, self.max, step).map(move |k| k as f32 * step)
    }

    /// Values of the minor ticks inside the bounds, skipping major positions.
    pub fn minor_ticks(&self) -> impl Iterator<Item = f32> {
        let divisions = self.minor_divisions;
        let step = self.major_step / divisions as f32;
        grid_indices(self.min, self.max, step)
            .filter(move |j| j.rem_euclid(divisions) != 0)
            .map(move |j| j as f32 * step)
    }
}

/// Smallest nice step keeping `span / step <= max_intervals`.
///
/// Returns the step and its mantissa (1, 2 or 5).
fn nice_step(span: f32, max_intervals: u32) -> (f32, u8) {
    if span <= 0.0 || !span.is_finite() {
        return (1.0, 1);
    }
    for magnitude in STEP_MAGNITUDES {
        for mantissa in STEP_MANTISSAS {
            let step = f32::from(mantissa) * magnitude;
            if span / step <= max_intervals as f32 + GRID_EPSILON {
                return (step, mantissa);
            }
        }
    }
    (span, 1)
}

/// Grid indices `k` with `min <= k * step <= max`.
///
/// Empty when the bounds or step are not finite, or when the grid would hold
/// more than [`MAX_GRID_TICKS`] points.
fn grid_indices(min: f32, max: f32, step: f32) -> RangeInclusive<i32> {
    const EMPTY: RangeInclusive<i32> = 1..=0;

    let lo = min / step - GRID_EPSILON;
    let hi = max / step + GRID_EPSILON;
    if !lo.is_finite() || !hi.is_finite() || !step.is_finite() || step <= 0.0 {
        return EMPTY;
    }
    let first = lo.ceil() as i64;
    let last = hi.floor() as i64;
    if last - first >= MAX_GRID_TICKS {
        return EMPTY;
    }
    match (i32::try_from(first), i32::try_from(last)) {
        (Ok(first), Ok(last)) => first..=last,
        _ => EMPTY,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // -------------------------------------------------------------------------
    // Value Mapping Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fraction_endpoints_and_midpoint() {
        assert_eq!(value_to_fraction(960.0, 960.0, 1050.0), 0.0);
        assert_eq!(value_to_fraction(1050.0, 960.0, 1050.0), 1.0);
        assert!(approx(value_to_fraction(1005.0, 960.0, 1050.0), 0.5));
    }

    #[test]
    fn test_fraction_clamps_out_of_range() {
        assert_eq!(value_to_fraction(-50.0, 0.0, 100.0), 0.0, "below min clamps to 0");
        assert_eq!(value_to_fraction(150.0, 0.0, 100.0), 1.0, "above max clamps to 1");
    }

    #[test]
    fn test_fraction_degenerate_range() {
        assert_eq!(value_to_fraction(5.0, 5.0, 5.0), 0.0);
        assert_eq!(value_to_fraction(5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_angle_sweep() {
        assert!(approx(value_to_angle(0.0, 0.0, 100.0), 135.0), "min at 7:30");
        assert!(approx(value_to_angle(50.0, 0.0, 100.0), 270.0), "midpoint at 12:00");
        assert!(approx(value_to_angle(100.0, 0.0, 100.0), 405.0), "max at 4:30");
    }

    #[test]
    fn test_angle_is_deterministic() {
        let a = value_to_angle(1013.25, 960.0, 1050.0);
        let b = value_to_angle(1013.25, 960.0, 1050.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_polar_point_cardinal_directions() {
        let c = Point::new(80, 100);
        assert_eq!(polar_point(c, 70.0, 0.0), Point::new(150, 100), "3 o'clock");
        assert_eq!(polar_point(c, 70.0, 90.0), Point::new(80, 170), "6 o'clock (y down)");
        assert_eq!(polar_point(c, 70.0, 180.0), Point::new(10, 100), "9 o'clock");
        assert_eq!(polar_point(c, 70.0, 270.0), Point::new(80, 30), "12 o'clock");
    }

    #[test]
    fn test_snap() {
        assert_eq!(snap_up(1053.0, 10.0), 1060.0);
        assert_eq!(snap_up(1060.0, 10.0), 1060.0, "on-grid value stays");
        assert_eq!(snap_down(-12.0, 5.0), -15.0);
        assert_eq!(snap_down(-10.0, 5.0), -10.0);
    }

    // -------------------------------------------------------------------------
    // Scale Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_pressure_scale_steps_by_ten() {
        let scale = Scale::new(960.0, 1050.0, 10);
        assert!(approx(scale.major_step(), 10.0));
        assert_eq!(scale.minor_divisions(), 5);
        let majors: Vec<f32> = scale.major_ticks().collect();
        assert_eq!(majors.len(), 10, "960..=1050 step 10 has 10 labels");
        assert!(approx(majors[0], 960.0));
        assert!(approx(majors[9], 1050.0));
    }

    #[test]
    fn test_wide_range_picks_larger_step() {
        let scale = Scale::new(0.0, 1000.0, 10);
        assert!(approx(scale.major_step(), 100.0));

        let scale = Scale::new(0.0, 1300.0, 10);
        assert!(approx(scale.major_step(), 200.0), "1300/100 > 10 intervals");
        assert_eq!(scale.minor_divisions(), 4, "2-steps split into 4");
    }

    #[test]
    fn test_negative_bounds() {
        let scale = Scale::new(-10.0, 40.0, 10);
        assert!(approx(scale.major_step(), 5.0));
        let majors: Vec<f32> = scale.major_ticks().collect();
        assert!(approx(majors[0], -10.0));
        assert!(approx(*majors.last().unwrap(), 40.0));
        assert_eq!(majors.len(), 11);
    }

    #[test]
    fn test_minor_ticks_skip_majors() {
        let scale = Scale::new(0.0, 100.0, 10);
        let minors: Vec<f32> = scale.minor_ticks().collect();
        // 10 intervals x 4 inner minor ticks
        assert_eq!(minors.len(), 40);
        for m in &minors {
            let on_major = (m / 10.0 - (m / 10.0).round()).abs() < 1e-3;
            assert!(!on_major, "minor tick {m} coincides with a major tick");
        }
    }

    #[test]
    fn test_unaligned_bounds_only_yield_inner_ticks() {
        let scale = Scale::new(3.0, 27.0, 10);
        let majors: Vec<f32> = scale.major_ticks().collect();
        for m in &majors {
            assert!(*m >= 3.0 && *m <= 27.0, "tick {m} outside bounds");
        }
    }

    #[test]
    fn test_label_decimals() {
        assert_eq!(Scale::new(960.0, 1050.0, 10).label_decimals(), 0);
        assert_eq!(Scale::new(0.0, 5.0, 10).label_decimals(), 1, "step 0.5 needs one decimal");
        assert_eq!(Scale::new(0.0, 0.1, 10).label_decimals(), 2);
    }

    #[test]
    fn test_degenerate_span_does_not_panic() {
        let scale = Scale::new(5.0, 5.0, 10);
        assert!(approx(scale.major_step(), 1.0));
        assert_eq!(scale.major_ticks().count(), 1);
    }

    #[test]
    fn test_overflowing_span_yields_no_ticks() {
        // max - min is infinite, so no step can describe the grid
        let scale = Scale::new(-f32::MAX, f32::MAX, 10);
        assert_eq!(scale.major_ticks().count(), 0);
        assert_eq!(scale.minor_ticks().count(), 0);
    }

    #[test]
    fn test_huge_finite_span_stays_bounded() {
        let scale = Scale::new(0.0, f32::MAX, 10);
        let majors = scale.major_ticks().count();
        let minors = scale.minor_ticks().count();
        assert!(majors as i64 <= MAX_GRID_TICKS, "{majors} major ticks");
        assert!(minors as i64 <= MAX_GRID_TICKS, "{minors} minor ticks");
    }

    #[test]
    fn test_dense_grid_is_dropped() {
        assert_eq!(grid_indices(0.0, 1.0e6, 1.0).count(), 0, "a million ticks is over the cap");
        assert_eq!(grid_indices(0.0, 10.0, 1.0), 0..=10);
    }
}
