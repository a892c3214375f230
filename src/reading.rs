//! Display state of a single measured quantity.
//!
//! A [`Reading`] holds the latest value, its unit label and the display
//! bounds the gauge scale is drawn with. Bounds start at the quantity's
//! default range and auto-expand when a value falls outside them, snapped
//! outward to [`Quantity::expansion_step`] so tick labels stay round.
//! Bounds never shrink on their own; only [`Reading::set_range`] and
//! [`Reading::reset_range`] move them inward.

use heapless::String;

use crate::error::Error;
use crate::quantity::Quantity;
use crate::scale::{snap_down, snap_up, value_to_fraction};

/// Maximum bytes in a unit label.
pub const UNIT_CAPACITY: usize = 8;

/// Fixed-capacity unit label.
pub type UnitLabel = String<UNIT_CAPACITY>;

/// Which bounds moved during an update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeChange {
    /// Lower bound moved down.
    pub min_expanded: bool,
    /// Upper bound moved up.
    pub max_expanded: bool,
}

impl RangeChange {
    /// True if either bound moved.
    #[inline]
    pub const fn any(self) -> bool {
        self.min_expanded || self.max_expanded
    }
}

/// Current value, unit and display bounds of one quantity.
#[derive(Clone, Debug)]
pub struct Reading {
    quantity: Quantity,
    value: Option<f32>,
    unit: UnitLabel,
    min: f32,
    max: f32,
}

impl Reading {
    /// Fresh state with the quantity's default unit and range, no value.
    pub fn new(quantity: Quantity) -> Self {
        let (min, max) = quantity.default_range();
        let mut unit = UnitLabel::new();
        // Default units are checked to fit by the quantity tests.
        unit.push_str(quantity.default_unit()).ok();
        Self {
            quantity,
            value: None,
            unit,
            min,
            max,
        }
    }

    /// Quantity this state belongs to.
    #[inline]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Latest value, `None` before the first reading.
    #[inline]
    pub const fn value(&self) -> Option<f32> {
        self.value
    }

    /// Unit label.
    #[inline]
    pub fn unit(&self) -> &str {
        self.unit.as_str()
    }

    /// Lower display bound.
    #[inline]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper display bound.
    #[inline]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Position of the latest value on the scale, `None` before the first reading.
    pub fn fraction(&self) -> Option<f32> {
        self.value.map(|v| value_to_fraction(v, self.min, self.max))
    }

    /// Store a new value and expand the bounds to include it.
    ///
    /// Non-finite values, and values whose expanded bounds would span more
    /// than `f32` can hold, are rejected and leave the state untouched.
    pub fn update(&mut self, value: f32) -> Result<RangeChange, Error> {
        if !value.is_finite() {
            return Err(Error::NonFiniteValue(self.quantity));
        }
        let (min, max, change) = expanded_bounds(self.quantity, self.min, self.max, value)
            .ok_or(Error::RangeOverflow(self.quantity))?;
        self.value = Some(value);
        self.min = min;
        self.max = max;
        Ok(change)
    }

    /// Replace the unit label.
    pub fn set_unit(&mut self, unit: &str) -> Result<(), Error> {
        let mut label = UnitLabel::new();
        label
            .push_str(unit)
            .map_err(|_| Error::UnitTooLong(self.quantity))?;
        self.unit = label;
        Ok(())
    }

    /// Set explicit bounds, then re-expand them around the stored value.
    pub fn set_range(&mut self, min: f32, max: f32) -> Result<RangeChange, Error> {
        let invalid = Error::InvalidRange {
            quantity: self.quantity,
            min,
            max,
        };
        if !min.is_finite() || !max.is_finite() || min >= max || !(max - min).is_finite() {
            return Err(invalid);
        }
        let (min, max, change) = match self.value {
            Some(v) => expanded_bounds(self.quantity, min, max, v).ok_or(invalid)?,
            None => (min, max, RangeChange::default()),
        };
        self.min = min;
        self.max = max;
        Ok(change)
    }

    /// Restore the default bounds, re-expanded around the stored value.
    pub fn reset_range(&mut self) -> RangeChange {
        let (min, max) = self.quantity.default_range();
        let (min, max, change) = self
            .value
            .and_then(|v| expanded_bounds(self.quantity, min, max, v))
            .unwrap_or((min, max, RangeChange::default()));
        self.min = min;
        self.max = max;
        change
    }
}

/// Bounds `min..max` grown to include `value`, snapped outward to the
/// quantity's expansion step.
///
/// A snapped bound that would overflow falls back to the value itself.
/// Returns `None` if the resulting span is not finite.
fn expanded_bounds(quantity: Quantity, min: f32, max: f32, value: f32) -> Option<(f32, f32, RangeChange)> {
    let step = quantity.expansion_step();
    let snapped_or_raw = |snapped: f32| if snapped.is_finite() { snapped } else { value };

    let mut change = RangeChange::default();
    let (mut min, mut max) = (min, max);
    if value > max {
        max = snapped_or_raw(snap_up(value, step));
        change.max_expanded = true;
    }
    if value < min {
        min = snapped_or_raw(snap_down(value, step));
        change.min_expanded = true;
    }
    (max - min).is_finite().then_some((min, max, change))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let r = Reading::new(Quantity::Pressure);
        assert_eq!(r.value(), None, "no value before first reading");
        assert_eq!(r.unit(), "hPa");
        assert_eq!((r.min(), r.max()), (960.0, 1050.0));
        assert_eq!(r.fraction(), None);
    }

    #[test]
    fn test_update_within_range_keeps_bounds() {
        let mut r = Reading::new(Quantity::Humidity);
        let change = r.update(55.0).unwrap();
        assert!(!change.any(), "in-range value must not expand");
        assert_eq!(r.value(), Some(55.0));
        assert_eq!((r.min(), r.max()), (0.0, 100.0));
    }

    #[test]
    fn test_update_above_max_expands_to_step() {
        let mut r = Reading::new(Quantity::Pressure);
        let change = r.update(1053.2).unwrap();
        assert!(change.max_expanded);
        assert!(!change.min_expanded);
        assert_eq!(r.max(), 1060.0, "max snaps up to the 10 hPa grid");
        assert_eq!(r.min(), 960.0);
    }

    #[test]
    fn test_update_below_min_expands_to_step() {
        let mut r = Reading::new(Quantity::Temperature);
        let change = r.update(-12.3).unwrap();
        assert!(change.min_expanded);
        assert_eq!(r.min(), -15.0, "min snaps down to the 5 C grid");
    }

    #[test]
    fn test_bounds_never_shrink_on_update() {
        let mut r = Reading::new(Quantity::Light);
        r.update(1450.0).unwrap();
        assert_eq!(r.max(), 1500.0);
        let change = r.update(200.0).unwrap();
        assert!(!change.any());
        assert_eq!(r.max(), 1500.0, "max stays expanded");
    }

    #[test]
    fn test_value_on_bound_does_not_expand() {
        let mut r = Reading::new(Quantity::Light);
        assert!(!r.update(1000.0).unwrap().any());
        assert!(!r.update(0.0).unwrap().any());
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let mut r = Reading::new(Quantity::Temperature);
        r.update(21.0).unwrap();
        assert_eq!(r.update(f32::NAN), Err(Error::NonFiniteValue(Quantity::Temperature)));
        assert_eq!(r.update(f32::INFINITY), Err(Error::NonFiniteValue(Quantity::Temperature)));
        assert_eq!(r.value(), Some(21.0), "rejected value leaves state untouched");
        assert_eq!(r.max(), 40.0);
    }

    #[test]
    fn test_fraction_follows_bounds() {
        let mut r = Reading::new(Quantity::Humidity);
        r.update(25.0).unwrap();
        assert_eq!(r.fraction(), Some(0.25));
    }

    #[test]
    fn test_set_unit() {
        let mut r = Reading::new(Quantity::Temperature);
        r.set_unit("F").unwrap();
        assert_eq!(r.unit(), "F");
        assert_eq!(
            r.set_unit("degrees kelvin"),
            Err(Error::UnitTooLong(Quantity::Temperature))
        );
        assert_eq!(r.unit(), "F", "failed update keeps the old unit");
    }

    #[test]
    fn test_set_range_validates() {
        let mut r = Reading::new(Quantity::Pressure);
        assert!(r.set_range(1000.0, 1000.0).is_err());
        assert!(r.set_range(1010.0, 990.0).is_err());
        assert!(r.set_range(f32::NAN, 990.0).is_err());
        assert_eq!((r.min(), r.max()), (960.0, 1050.0));
    }

    #[test]
    fn test_set_range_re_expands_around_value() {
        let mut r = Reading::new(Quantity::Pressure);
        r.update(1013.0).unwrap();
        let change = r.set_range(980.0, 1000.0).unwrap();
        assert!(change.max_expanded);
        assert_eq!((r.min(), r.max()), (980.0, 1020.0));
    }

    #[test]
    fn test_set_range_rejects_overflowing_span() {
        let mut r = Reading::new(Quantity::Temperature);
        assert!(
            matches!(r.set_range(-f32::MAX, f32::MAX), Err(Error::InvalidRange { .. })),
            "span of -MAX..MAX is infinite"
        );
        assert_eq!((r.min(), r.max()), (-10.0, 40.0), "rejected range keeps the old bounds");

        r.update(0.0).unwrap();
        assert_eq!(r.fraction(), Some(0.2), "fraction still follows the value");
    }

    #[test]
    fn test_set_range_rejects_overflow_from_stored_value() {
        let mut r = Reading::new(Quantity::Light);
        r.update(f32::MAX).unwrap();
        assert!(r.set_range(-f32::MAX, 0.0).is_err(), "re-expanding to MAX would overflow the span");
        assert!((r.max() - r.min()).is_finite());
    }

    #[test]
    fn test_huge_value_keeps_bounds_finite() {
        let mut r = Reading::new(Quantity::Light);
        let change = r.update(f32::MAX).unwrap();
        assert!(change.max_expanded);
        assert!(r.max().is_finite(), "snapping MAX up must not overflow to infinity");
        assert!(r.max() >= f32::MAX);
        assert_eq!(r.fraction(), Some(1.0));
    }

    #[test]
    fn test_update_rejects_infinite_span() {
        let mut r = Reading::new(Quantity::Pressure);
        r.update(f32::MAX).unwrap();
        assert_eq!(r.update(-f32::MAX), Err(Error::RangeOverflow(Quantity::Pressure)));
        assert_eq!(r.value(), Some(f32::MAX), "rejected value leaves state untouched");
        assert!(r.min().is_finite() && r.max().is_finite());
        assert_eq!(r.min(), 960.0);
    }

    #[test]
    fn test_reset_range() {
        let mut r = Reading::new(Quantity::Temperature);
        r.update(44.0).unwrap();
        r.update(20.0).unwrap();
        assert_eq!(r.max(), 45.0);
        let change = r.reset_range();
        assert!(!change.any(), "current value fits the default range");
        assert_eq!((r.min(), r.max()), (-10.0, 40.0));
    }
}
