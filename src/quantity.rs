//! Measured quantities and the gauges that display them.
//!
//! | Quantity | Gauge | Unit | Default range | Step |
//! |----------|-------|------|---------------|------|
//! | Pressure | Dial (outer scale) | hPa | 960 – 1050 | 10 |
//! | Humidity | Dial (inner arc) | % | 0 – 100 | 10 |
//! | Temperature | Thermometer | C | -10 – 40 | 5 |
//! | Light | Light indicator | lx | 0 – 1000 | 100 |
//!
//! The step is the granularity that auto-expanded bounds snap to.

/// Number of measured quantities.
pub const QUANTITY_COUNT: usize = 4;

/// Number of gauges (sub-renderers).
pub const GAUGE_COUNT: usize = 3;

/// A measured scalar quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Barometric pressure.
    Pressure,
    /// Relative humidity.
    Humidity,
    /// Air temperature.
    Temperature,
    /// Ambient light level.
    Light,
}

impl Quantity {
    /// All quantities in storage order.
    pub const ALL: [Self; QUANTITY_COUNT] = [Self::Pressure, Self::Humidity, Self::Temperature, Self::Light];

    /// Storage index.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Pressure => 0,
            Self::Humidity => 1,
            Self::Temperature => 2,
            Self::Light => 3,
        }
    }

    /// Gauge that renders this quantity.
    #[inline]
    pub const fn gauge(self) -> Gauge {
        match self {
            Self::Pressure | Self::Humidity => Gauge::Dial,
            Self::Temperature => Gauge::Thermometer,
            Self::Light => Gauge::Light,
        }
    }

    /// Short uppercase label used in logs and error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pressure => "PRESS",
            Self::Humidity => "HUMID",
            Self::Temperature => "TEMP",
            Self::Light => "LIGHT",
        }
    }

    /// Unit label shown until the caller sets another one.
    pub const fn default_unit(self) -> &'static str {
        match self {
            Self::Pressure => "hPa",
            Self::Humidity => "%",
            Self::Temperature => "C",
            Self::Light => "lx",
        }
    }

    /// Display bounds `(min, max)` before any reading has expanded them.
    pub const fn default_range(self) -> (f32, f32) {
        match self {
            Self::Pressure => (960.0, 1050.0),
            Self::Humidity => (0.0, 100.0),
            Self::Temperature => (-10.0, 40.0),
            Self::Light => (0.0, 1000.0),
        }
    }

    /// Granularity that auto-expanded bounds are snapped to.
    pub const fn expansion_step(self) -> f32 {
        match self {
            Self::Pressure | Self::Humidity => 10.0,
            Self::Temperature => 5.0,
            Self::Light => 100.0,
        }
    }

    /// Decimal places used by the numeric readout.
    pub const fn decimals(self) -> usize {
        match self {
            Self::Temperature => 1,
            Self::Pressure | Self::Humidity | Self::Light => 0,
        }
    }

    /// Minimum change between old and new averages that counts as a trend.
    pub const fn trend_threshold(self) -> f32 {
        match self {
            Self::Pressure => 0.5,
            Self::Humidity => 1.0,
            Self::Temperature => 0.2,
            Self::Light => 25.0,
        }
    }
}

/// One of the three gauge renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gauge {
    /// Combined barometer/hygrometer dial.
    Dial,
    /// Vertical thermometer.
    Thermometer,
    /// Segmented light-level indicator.
    Light,
}

impl Gauge {
    /// All gauges in draw order.
    pub const ALL: [Self; GAUGE_COUNT] = [Self::Dial, Self::Thermometer, Self::Light];

    /// Storage index.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Dial => 0,
            Self::Thermometer => 1,
            Self::Light => 2,
        }
    }

    /// Panel label drawn at the top of the gauge.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dial => "BARO / HYGRO",
            Self::Thermometer => "TEMP",
            Self::Light => "LIGHT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_storage_order() {
        for (i, q) in Quantity::ALL.iter().enumerate() {
            assert_eq!(q.index(), i, "{q:?} index should match ALL order");
        }
        for (i, g) in Gauge::ALL.iter().enumerate() {
            assert_eq!(g.index(), i, "{g:?} index should match ALL order");
        }
    }

    #[test]
    fn test_pressure_and_humidity_share_dial() {
        assert_eq!(Quantity::Pressure.gauge(), Gauge::Dial);
        assert_eq!(Quantity::Humidity.gauge(), Gauge::Dial);
        assert_eq!(Quantity::Temperature.gauge(), Gauge::Thermometer);
        assert_eq!(Quantity::Light.gauge(), Gauge::Light);
    }

    #[test]
    fn test_default_ranges_are_increasing_and_on_step() {
        for q in Quantity::ALL {
            let (min, max) = q.default_range();
            assert!(min < max, "{q:?} default range must increase");
            let step = q.expansion_step();
            assert_eq!(min % step, 0.0, "{q:?} min should be a multiple of its step");
            assert_eq!(max % step, 0.0, "{q:?} max should be a multiple of its step");
        }
    }

    #[test]
    fn test_default_units_fit_label_buffer() {
        for q in Quantity::ALL {
            assert!(
                q.default_unit().len() <= crate::reading::UNIT_CAPACITY,
                "{q:?} default unit must fit"
            );
        }
    }
}
