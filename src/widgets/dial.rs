//! Combined barometer/hygrometer dial.
//!
//! ```text
//!            BARO / HYGRO
//!          1000  1010  1020
//!       990   .--------.   1030
//!     980    /  humid   \    1040
//!    970    |     o      |    1050
//!     960    \          /
//!          `  1013 hPa  '
//!               45 %
//!           960..1050 hPa
//! ```
//!
//! Pressure owns the outer scale: a 270 degree ring with major and minor
//! ticks, numeric labels inside the ticks, and a long needle with a
//! counterweight tail. Humidity owns an inner arc with its own ticks and a
//! shorter needle. Both readouts sit in the open bottom sector.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, PrimitiveStyle};
use embedded_graphics::text::Text;

use super::primitives::{draw_disc, draw_needle, draw_panel_background, draw_radial_tick, draw_trend_arrow};
use super::{format_bounds, format_readout, format_tick_label};
use crate::colors::{BLACK, CYAN, GRAY, WHITE};
use crate::config::{
    DIAL_CENTER_DX,
    DIAL_CENTER_DY,
    DIAL_PANEL_WIDTH,
    DIAL_PANEL_X,
    DIAL_RADIUS,
    DIAL_START_DEG,
    DIAL_SWEEP_DEG,
    HEADER_HEIGHT,
    HUMIDITY_ARC_RADIUS,
    MAX_MAJOR_TICKS,
    PANEL_HEIGHT,
};
use crate::quantity::Gauge;
use crate::reading::Reading;
use crate::scale::{Scale, polar_point, value_to_angle};
use crate::styles::{CENTERED, CENTERED_MIDDLE, LABEL_STYLE_CYAN, LABEL_STYLE_ORANGE, LABEL_STYLE_WHITE, READOUT_STYLE_WHITE};
use crate::trend::Trend;

// =============================================================================
// Layout
// =============================================================================

/// Dial pivot in screen coordinates.
pub const DIAL_CENTER: Point = Point::new(DIAL_PANEL_X as i32 + DIAL_CENTER_DX, HEADER_HEIGHT as i32 + DIAL_CENTER_DY);

const PANEL_TOP: i32 = HEADER_HEIGHT as i32;
const CENTER_X: i32 = DIAL_CENTER.x;

const LABEL_POS: Point = Point::new(CENTER_X, PANEL_TOP + 14);
const PRESSURE_READOUT_POS: Point = Point::new(CENTER_X, PANEL_TOP + 164);
const HUMIDITY_READOUT_POS: Point = Point::new(CENTER_X, PANEL_TOP + 178);
const BOUNDS_POS: Point = Point::new(CENTER_X, PANEL_TOP + 206);

/// Arrow beside the pressure readout.
const PRESSURE_TREND_POS: Point = Point::new(CENTER_X + 50, PANEL_TOP + 159);
/// Arrow beside the humidity readout.
const HUMIDITY_TREND_POS: Point = Point::new(CENTER_X + 30, PANEL_TOP + 175);

const RADIUS: f32 = DIAL_RADIUS as f32;
const MAJOR_TICK_INNER: f32 = RADIUS - 8.0;
const MINOR_TICK_INNER: f32 = RADIUS - 4.0;
const LABEL_RADIUS: f32 = RADIUS - 18.0;
const PRESSURE_NEEDLE_LENGTH: f32 = RADIUS - 10.0;
const PRESSURE_NEEDLE_TAIL: f32 = 12.0;

const HUMIDITY_RADIUS: f32 = HUMIDITY_ARC_RADIUS as f32;
const HUMIDITY_TICK_INNER: f32 = HUMIDITY_RADIUS - 4.0;
const HUMIDITY_NEEDLE_LENGTH: f32 = HUMIDITY_RADIUS - 6.0;
/// The inner arc is short, so it gets a coarser scale.
const HUMIDITY_MAX_TICKS: u32 = 5;

const HUB_DIAMETER: u32 = 7;

const RING_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);
const HUMIDITY_ARC_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(CYAN, 1);

// =============================================================================
// Drawing
// =============================================================================

/// Redraw the whole dial panel.
///
/// A reading without a value gets no needle and a `--` readout.
pub fn draw_dial<D>(
    display: &mut D,
    pressure: &Reading,
    pressure_trend: Option<Trend>,
    humidity: &Reading,
    humidity_trend: Option<Trend>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel_background(display, DIAL_PANEL_X, HEADER_HEIGHT, DIAL_PANEL_WIDTH, PANEL_HEIGHT, BLACK)?;

    Text::with_text_style(Gauge::Dial.label(), LABEL_POS, LABEL_STYLE_WHITE, CENTERED).draw(display)?;

    draw_sweep_arc(display, DIAL_RADIUS, RING_STYLE)?;
    draw_pressure_scale(display, pressure)?;
    draw_sweep_arc(display, HUMIDITY_ARC_RADIUS, HUMIDITY_ARC_STYLE)?;
    draw_humidity_scale(display, humidity)?;

    // Humidity first so the longer pressure needle stays on top
    if let Some(v) = humidity.value() {
        let angle = value_to_angle(v, humidity.min(), humidity.max());
        draw_needle(display, DIAL_CENTER, angle, HUMIDITY_NEEDLE_LENGTH, 0.0, 2, CYAN)?;
    }
    if let Some(v) = pressure.value() {
        let angle = value_to_angle(v, pressure.min(), pressure.max());
        draw_needle(display, DIAL_CENTER, angle, PRESSURE_NEEDLE_LENGTH, PRESSURE_NEEDLE_TAIL, 2, WHITE)?;
    }
    draw_disc(display, DIAL_CENTER, HUB_DIAMETER, WHITE)?;

    let readout = format_readout(pressure);
    Text::with_text_style(&readout, PRESSURE_READOUT_POS, READOUT_STYLE_WHITE, CENTERED).draw(display)?;
    if let Some(trend) = pressure_trend {
        draw_trend_arrow(display, PRESSURE_TREND_POS.x, PRESSURE_TREND_POS.y, trend, WHITE)?;
    }

    let readout = format_readout(humidity);
    Text::with_text_style(&readout, HUMIDITY_READOUT_POS, LABEL_STYLE_CYAN, CENTERED).draw(display)?;
    if let Some(trend) = humidity_trend {
        draw_trend_arrow(display, HUMIDITY_TREND_POS.x, HUMIDITY_TREND_POS.y, trend, CYAN)?;
    }

    let bounds = format_bounds(pressure);
    Text::with_text_style(&bounds, BOUNDS_POS, LABEL_STYLE_ORANGE, CENTERED).draw(display)?;

    Ok(())
}

/// Arc over the scale sweep, open at the bottom.
fn draw_sweep_arc<D>(display: &mut D, radius: u32, style: PrimitiveStyle<Rgb565>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Arc::with_center(
        DIAL_CENTER,
        radius * 2 + 1,
        Angle::from_degrees(DIAL_START_DEG),
        Angle::from_degrees(DIAL_SWEEP_DEG),
    )
    .into_styled(style)
    .draw(display)
}

fn draw_pressure_scale<D>(display: &mut D, pressure: &Reading) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (min, max) = (pressure.min(), pressure.max());
    let scale = Scale::new(min, max, MAX_MAJOR_TICKS);

    for value in scale.minor_ticks() {
        draw_radial_tick(display, DIAL_CENTER, value_to_angle(value, min, max), MINOR_TICK_INNER, RADIUS, GRAY)?;
    }

    let decimals = scale.label_decimals();
    for value in scale.major_ticks() {
        let angle = value_to_angle(value, min, max);
        draw_radial_tick(display, DIAL_CENTER, angle, MAJOR_TICK_INNER, RADIUS, WHITE)?;

        let label = format_tick_label(value, decimals);
        let pos = polar_point(DIAL_CENTER, LABEL_RADIUS, angle);
        Text::with_text_style(&label, pos, LABEL_STYLE_WHITE, CENTERED_MIDDLE).draw(display)?;
    }
    Ok(())
}

fn draw_humidity_scale<D>(display: &mut D, humidity: &Reading) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (min, max) = (humidity.min(), humidity.max());
    let scale = Scale::new(min, max, HUMIDITY_MAX_TICKS);
    for value in scale.major_ticks() {
        let angle = value_to_angle(value, min, max);
        draw_radial_tick(display, DIAL_CENTER, angle, HUMIDITY_TICK_INNER, HUMIDITY_RADIUS, CYAN)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;
    use crate::test_display::TestDisplay;

    fn readings() -> (Reading, Reading) {
        (Reading::new(Quantity::Pressure), Reading::new(Quantity::Humidity))
    }

    #[test]
    fn test_center_inside_panel() {
        assert!(DIAL_CENTER.x - DIAL_RADIUS as i32 > DIAL_PANEL_X as i32);
        assert!(DIAL_CENTER.x + (DIAL_RADIUS as i32) < (DIAL_PANEL_X + DIAL_PANEL_WIDTH) as i32);
        assert!(DIAL_CENTER.y - (DIAL_RADIUS as i32) > LABEL_POS.y, "ring clears the panel label");
    }

    #[test]
    fn test_draw_stays_inside_panel() {
        let (mut p, mut h) = readings();
        p.update(1013.0).unwrap();
        h.update(45.0).unwrap();

        let mut display = TestDisplay::new();
        draw_dial(&mut display, &p, Some(Trend::Rising), &h, Some(Trend::Falling)).unwrap();

        let (x0, x1) = (DIAL_PANEL_X as i32, (DIAL_PANEL_X + DIAL_PANEL_WIDTH) as i32);
        assert_eq!(
            display.count_where(|pt, _| pt.x < x0 || pt.x >= x1 || pt.y < HEADER_HEIGHT as i32),
            0,
            "dial must not draw outside its panel"
        );
        assert!(display.lit_pixels() > 0);
    }

    #[test]
    fn test_needle_follows_value() {
        let (mut p, h) = readings();
        // The minimum sits at 7:30, lower left of the pivot
        p.update(960.0).unwrap();
        let mut display = TestDisplay::new();
        draw_dial(&mut display, &p, None, &h, None).unwrap();
        let tip = polar_point(DIAL_CENTER, 20.0, DIAL_START_DEG);
        assert_eq!(display.pixel(tip), Some(WHITE), "needle should reach toward the minimum");

        // Opposite end of the sweep has no needle
        let other = polar_point(DIAL_CENTER, 20.0, DIAL_START_DEG + DIAL_SWEEP_DEG);
        assert_ne!(display.pixel(other), Some(WHITE));
    }

    #[test]
    fn test_no_needle_before_first_reading() {
        let (p, h) = readings();
        let mut display = TestDisplay::new();
        draw_dial(&mut display, &p, None, &h, None).unwrap();

        // Straight up from the hub, between hub and labels, only a needle could be drawn
        for dy in 6..30 {
            let pt = Point::new(DIAL_CENTER.x, DIAL_CENTER.y - dy);
            assert_eq!(display.pixel(pt), Some(BLACK), "unexpected pixel at {pt:?}");
        }
    }

    #[test]
    fn test_humidity_needle_follows_value() {
        let (p, mut h) = readings();
        // Humidity maximum sits at 4:30, lower right of the pivot
        h.update(100.0).unwrap();
        let mut display = TestDisplay::new();
        draw_dial(&mut display, &p, None, &h, None).unwrap();

        let tip = polar_point(DIAL_CENTER, 20.0, DIAL_START_DEG + DIAL_SWEEP_DEG);
        assert_eq!(display.pixel(tip), Some(CYAN), "humidity needle should reach toward the maximum");
        let other = polar_point(DIAL_CENTER, 20.0, DIAL_START_DEG);
        assert_ne!(display.pixel(other), Some(CYAN), "no humidity needle at the minimum");
    }

    #[test]
    fn test_huge_bounds_draw_without_ticks_blowup() {
        let (mut p, mut h) = readings();
        p.update(f32::MAX).unwrap();
        p.update(0.0).unwrap();
        h.set_range(-1.0e38, 1.0e38).unwrap();
        h.update(0.0).unwrap();

        let mut display = TestDisplay::new();
        draw_dial(&mut display, &p, None, &h, None).unwrap();
        assert!(display.lit_pixels() > 0);
    }
}
