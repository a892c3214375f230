//! The weather gauge widget.
//!
//! [`WeatherWidget`] owns the display state of every quantity and redraws
//! on demand: updates only mark the owning gauge dirty, and
//! [`WeatherWidget::redraw`] repaints the dirty gauges and nothing else.
//!
//! ```ignore
//! let mut widget = WeatherWidget::new();
//! widget.update(Quantity::Pressure, 1013.2)?;
//! widget.update(Quantity::Temperature, 21.4)?;
//! widget.redraw(&mut display)?; // dial and thermometer only
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;

use crate::debug_log::DebugLog;
use crate::error::Error;
use crate::quantity::{Gauge, QUANTITY_COUNT, Quantity};
use crate::reading::{RangeChange, Reading};
use crate::render::RenderState;
use crate::trend::{Trend, TrendTracker};
use crate::widgets::dial::draw_dial;
use crate::widgets::header::draw_dividers;
use crate::widgets::light::draw_light;
use crate::widgets::thermometer::draw_thermometer;

/// Result of a successful [`WeatherWidget::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Update {
    /// Gauge that was marked dirty.
    pub gauge: Gauge,
    /// Which display bounds auto-expanded to fit the value.
    pub range: RangeChange,
}

/// What a [`WeatherWidget::redraw`] call painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawReport {
    /// Dial repainted.
    pub dial: bool,
    /// Thermometer repainted.
    pub thermometer: bool,
    /// Light indicator repainted.
    pub light: bool,
    /// Divider lines repainted.
    pub dividers: bool,
}

impl RedrawReport {
    /// Number of gauges repainted.
    pub fn gauges_drawn(self) -> u32 {
        u32::from(self.dial) + u32::from(self.thermometer) + u32::from(self.light)
    }

    /// True if nothing was painted.
    pub fn is_empty(self) -> bool {
        self.gauges_drawn() == 0 && !self.dividers
    }

    fn mark(&mut self, gauge: Gauge) {
        match gauge {
            Gauge::Dial => self.dial = true,
            Gauge::Thermometer => self.thermometer = true,
            Gauge::Light => self.light = true,
        }
    }
}

/// Barometer/hygrometer dial, thermometer and light indicator.
pub struct WeatherWidget {
    readings: [Reading; QUANTITY_COUNT],
    trends: [TrendTracker; QUANTITY_COUNT],
    render: RenderState,
    log: DebugLog,
}

impl WeatherWidget {
    /// Default units and ranges, no readings, every gauge dirty.
    pub fn new() -> Self {
        Self {
            readings: Quantity::ALL.map(Reading::new),
            trends: Quantity::ALL.map(|q| TrendTracker::new(q.trend_threshold())),
            render: RenderState::new(),
            log: DebugLog::new(),
        }
    }

    /// Store a new value for `quantity` and mark its gauge dirty.
    ///
    /// Bounds expand to include the value. Non-finite values, and values
    /// that would stretch the bounds past what `f32` can span, are rejected,
    /// logged, and leave the state untouched.
    pub fn update(&mut self, quantity: Quantity, value: f32) -> Result<Update, Error> {
        let reading = &mut self.readings[quantity.index()];
        let range = match reading.update(value) {
            Ok(range) => range,
            Err(e) => {
                self.log.push_fmt(format_args!("{e}"));
                return Err(e);
            }
        };

        if range.min_expanded {
            self.log
                .push_fmt(format_args!("{} min -> {}", quantity.label(), reading.min()));
        }
        if range.max_expanded {
            self.log
                .push_fmt(format_args!("{} max -> {}", quantity.label(), reading.max()));
        }

        self.trends[quantity.index()].push(value);
        let gauge = quantity.gauge();
        self.render.mark_dirty(gauge);
        Ok(Update { gauge, range })
    }

    /// Replace the unit label shown in the readout.
    pub fn set_unit(&mut self, quantity: Quantity, unit: &str) -> Result<(), Error> {
        self.readings[quantity.index()].set_unit(unit)?;
        self.log.push_fmt(format_args!("{} unit {unit}", quantity.label()));
        self.render.mark_dirty(quantity.gauge());
        Ok(())
    }

    /// Set explicit display bounds.
    ///
    /// A stored value outside `min..=max` expands the bounds again.
    pub fn set_range(&mut self, quantity: Quantity, min: f32, max: f32) -> Result<(), Error> {
        let reading = &mut self.readings[quantity.index()];
        reading.set_range(min, max)?;
        self.log.push_fmt(format_args!(
            "{} range {}..{}",
            quantity.label(),
            reading.min(),
            reading.max()
        ));
        self.render.mark_dirty(quantity.gauge());
        Ok(())
    }

    /// Restore every quantity's default bounds and forget trend history.
    ///
    /// Current values stay; bounds re-expand around them.
    pub fn reset_ranges(&mut self) {
        for reading in &mut self.readings {
            reading.reset_range();
        }
        for trend in &mut self.trends {
            trend.clear();
        }
        self.log.push("Ranges reset");
        self.invalidate_all();
    }

    /// Mark every gauge and the dividers for redraw, e.g. after the surface
    /// was cleared.
    pub fn invalidate_all(&mut self) {
        self.render.mark_display_cleared();
    }

    /// Repaint dirty gauges, then the dividers if they were wiped.
    ///
    /// Dirty flags are cleared per gauge as it is drawn, so after an error
    /// the failed gauge and anything after it stay dirty.
    pub fn redraw<D>(&mut self, display: &mut D) -> Result<RedrawReport, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut report = RedrawReport::default();

        for gauge in Gauge::ALL {
            if !self.render.is_dirty(gauge) {
                continue;
            }
            self.draw_gauge(display, gauge)?;
            self.render.mark_clean(gauge);
            report.mark(gauge);
        }

        if self.render.need_dividers() {
            draw_dividers(display)?;
            self.render.mark_dividers_drawn();
            report.dividers = true;
        }

        Ok(report)
    }

    fn draw_gauge<D>(&self, display: &mut D, gauge: Gauge) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match gauge {
            Gauge::Dial => draw_dial(
                display,
                self.reading(Quantity::Pressure),
                self.trend(Quantity::Pressure),
                self.reading(Quantity::Humidity),
                self.trend(Quantity::Humidity),
            ),
            Gauge::Thermometer => draw_thermometer(
                display,
                self.reading(Quantity::Temperature),
                self.trend(Quantity::Temperature),
            ),
            Gauge::Light => draw_light(display, self.reading(Quantity::Light), self.trend(Quantity::Light)),
        }
    }

    /// Current display state of `quantity`.
    #[inline]
    pub fn reading(&self, quantity: Quantity) -> &Reading {
        &self.readings[quantity.index()]
    }

    /// Recent direction of `quantity`, `None` while steady.
    pub fn trend(&self, quantity: Quantity) -> Option<Trend> {
        self.trends[quantity.index()].trend()
    }

    /// Whether `gauge` will be repainted by the next [`redraw`](Self::redraw).
    #[inline]
    pub fn is_dirty(&self, gauge: Gauge) -> bool {
        self.render.is_dirty(gauge)
    }

    /// Whether the next [`redraw`](Self::redraw) would paint anything.
    pub fn needs_redraw(&self) -> bool {
        self.render.any_dirty() || self.render.need_dividers()
    }

    /// Event log.
    #[inline]
    pub const fn log(&self) -> &DebugLog {
        &self.log
    }

    /// Event log, for callers that add their own events.
    #[inline]
    pub fn log_mut(&mut self) -> &mut DebugLog {
        &mut self.log
    }
}

impl Default for WeatherWidget {
    fn default() -> Self {
        Self::new()
    }
}
