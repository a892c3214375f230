//! Vertical thermometer.
//!
//! A tube with a bulb at the bottom. The red column rises from the bulb by
//! the temperature's fraction of the scale; ticks and labels run up the
//! right side of the tube and the numeric readout sits under the bulb.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
#[allow(unused_imports)]
use micromath::F32Ext;

use super::primitives::{draw_panel_background, draw_trend_arrow};
use super::{format_readout, format_tick_label};
use crate::colors::{BLACK, DARK_GRAY, GRAY, RED, WHITE};
use crate::config::{
    HEADER_HEIGHT,
    MAX_MAJOR_TICKS,
    PANEL_HEIGHT,
    THERMO_BULB_DIAMETER,
    THERMO_PANEL_WIDTH,
    THERMO_PANEL_X,
    THERMO_TUBE_BOTTOM_DY,
    THERMO_TUBE_DX,
    THERMO_TUBE_TOP_DY,
    THERMO_TUBE_WIDTH,
};
use crate::quantity::Gauge;
use crate::reading::Reading;
use crate::scale::{Scale, value_to_fraction};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, LEFT_MIDDLE, READOUT_STYLE_WHITE};
use crate::trend::Trend;

// =============================================================================
// Layout
// =============================================================================

const PANEL_TOP: i32 = HEADER_HEIGHT as i32;
const PANEL_CENTER_X: i32 = (THERMO_PANEL_X + THERMO_PANEL_WIDTH / 2) as i32;

/// Horizontal center of the tube.
const TUBE_X: i32 = THERMO_PANEL_X as i32 + THERMO_TUBE_DX;
const TUBE_LEFT: i32 = TUBE_X - (THERMO_TUBE_WIDTH / 2) as i32;
const TUBE_RIGHT: i32 = TUBE_LEFT + THERMO_TUBE_WIDTH as i32 - 1;

/// Scale maximum sits here.
const SCALE_TOP: i32 = PANEL_TOP + THERMO_TUBE_TOP_DY;
/// Scale minimum sits here.
const SCALE_BOTTOM: i32 = PANEL_TOP + THERMO_TUBE_BOTTOM_DY;
/// Pixels between scale minimum and maximum.
pub const SCALE_SPAN: u32 = (SCALE_BOTTOM - SCALE_TOP) as u32;

const BULB_CENTER: Point = Point::new(TUBE_X, SCALE_BOTTOM + 8);

/// Column runs inside the tube outline.
const COLUMN_INSET: i32 = 2;

const MAJOR_TICK_LEN: i32 = 6;
const MINOR_TICK_LEN: i32 = 3;
const TICK_X: i32 = TUBE_RIGHT + 2;
const TICK_LABEL_X: i32 = TICK_X + MAJOR_TICK_LEN + 3;

const LABEL_POS: Point = Point::new(PANEL_CENTER_X, PANEL_TOP + 14);
const TREND_POS: Point = Point::new(PANEL_CENTER_X + 22, PANEL_TOP + 10);
const READOUT_POS: Point = Point::new(PANEL_CENTER_X, PANEL_TOP + 204);

const TUBE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(DARK_GRAY)
    .stroke_color(WHITE)
    .stroke_width(1)
    .build();
const MAJOR_TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);
const MINOR_TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);
const COLUMN_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

const _: () = assert!(BULB_CENTER.y + ((THERMO_BULB_DIAMETER / 2) as i32) < READOUT_POS.y - 12);

// =============================================================================
// Geometry
// =============================================================================

/// Column height in pixels above the scale minimum for a scale fraction.
pub fn column_height(fraction: f32) -> u32 {
    (fraction.clamp(0.0, 1.0) * SCALE_SPAN as f32).round() as u32
}

/// Screen row of `value` on the tube scale.
fn value_to_y(value: f32, min: f32, max: f32) -> i32 {
    SCALE_BOTTOM - column_height(value_to_fraction(value, min, max)) as i32
}

// =============================================================================
// Drawing
// =============================================================================

/// Redraw the whole thermometer panel.
///
/// Before the first reading the tube is empty and the bulb is dark.
pub fn draw_thermometer<D>(display: &mut D, temperature: &Reading, trend: Option<Trend>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel_background(display, THERMO_PANEL_X, HEADER_HEIGHT, THERMO_PANEL_WIDTH, PANEL_HEIGHT, BLACK)?;

    Text::with_text_style(Gauge::Thermometer.label(), LABEL_POS, LABEL_STYLE_WHITE, CENTERED).draw(display)?;
    if let Some(trend) = trend {
        draw_trend_arrow(display, TREND_POS.x, TREND_POS.y, trend, WHITE)?;
    }

    // Tube reaches into the bulb so the two read as one shape
    Rectangle::with_corners(Point::new(TUBE_LEFT, SCALE_TOP - 4), Point::new(TUBE_RIGHT, BULB_CENTER.y))
        .into_styled(TUBE_STYLE)
        .draw(display)?;

    let bulb_color = if temperature.value().is_some() { RED } else { DARK_GRAY };
    Circle::with_center(BULB_CENTER, THERMO_BULB_DIAMETER)
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(bulb_color)
                .stroke_color(WHITE)
                .stroke_width(1)
                .build(),
        )
        .draw(display)?;

    if let Some(fraction) = temperature.fraction() {
        let top = SCALE_BOTTOM - column_height(fraction) as i32;
        Rectangle::with_corners(
            Point::new(TUBE_LEFT + COLUMN_INSET, top),
            Point::new(TUBE_RIGHT - COLUMN_INSET, BULB_CENTER.y),
        )
        .into_styled(COLUMN_STYLE)
        .draw(display)?;
    }

    draw_scale(display, temperature)?;

    let readout = format_readout(temperature);
    Text::with_text_style(&readout, READOUT_POS, READOUT_STYLE_WHITE, CENTERED).draw(display)?;

    Ok(())
}

fn draw_scale<D>(display: &mut D, temperature: &Reading) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (min, max) = (temperature.min(), temperature.max());
    let scale = Scale::new(min, max, MAX_MAJOR_TICKS);

    for value in scale.minor_ticks() {
        let y = value_to_y(value, min, max);
        Line::new(Point::new(TICK_X, y), Point::new(TICK_X + MINOR_TICK_LEN - 1, y))
            .into_styled(MINOR_TICK_STYLE)
            .draw(display)?;
    }

    let decimals = scale.label_decimals();
    for value in scale.major_ticks() {
        let y = value_to_y(value, min, max);
        Line::new(Point::new(TICK_X, y), Point::new(TICK_X + MAJOR_TICK_LEN - 1, y))
            .into_styled(MAJOR_TICK_STYLE)
            .draw(display)?;
        let label = format_tick_label(value, decimals);
        Text::with_text_style(&label, Point::new(TICK_LABEL_X, y), LABEL_STYLE_WHITE, LEFT_MIDDLE).draw(display)?;
    }
    Ok(())
}
