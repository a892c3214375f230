//! Low-level drawing primitives shared across the gauges.
//!
//! # Panel Background Inset
//!
//! [`draw_panel_background`] fills a rectangle 2px inside the panel
//! boundary. Divider lines sit on panel edges, so a panel can repaint its
//! background without wiping the divider next to it.
//!
//! # Polar Primitives
//!
//! Ticks and needles are placed with [`polar_point`], so they share the
//! dial's angle convention (degrees, 0 at 3 o'clock, clockwise).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

use crate::scale::polar_point;
use crate::trend::Trend;

/// Inset between a panel boundary and its background fill.
const PANEL_INSET: u32 = 2;

/// Fill a panel's background, inset 2px from its boundary.
///
/// Returns early without drawing if the panel is too small to inset.
pub fn draw_panel_background<D>(display: &mut D, x: u32, y: u32, w: u32, h: u32, bg_color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if w <= PANEL_INSET * 2 || h <= PANEL_INSET * 2 {
        return Ok(());
    }
    Rectangle::new(
        Point::new((x + PANEL_INSET) as i32, (y + PANEL_INSET) as i32),
        Size::new(w - PANEL_INSET * 2, h - PANEL_INSET * 2),
    )
    .into_styled(PrimitiveStyle::with_fill(bg_color))
    .draw(display)
}

/// Draw a trend arrow centered on `(x, y)`.
///
/// 8px tall shaft with a 6px wide head, pointing up for [`Trend::Rising`].
pub fn draw_trend_arrow<D>(display: &mut D, x: i32, y: i32, trend: Trend, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    // Head tip and the row the barbs start from
    let (tip, barb) = match trend {
        Trend::Rising => (y - 4, y - 1),
        Trend::Falling => (y + 4, y + 1),
    };
    let tail = 2 * y - tip;

    Line::new(Point::new(x, tail), Point::new(x, tip))
        .into_styled(style)
        .draw(display)?;
    Line::new(Point::new(x - 3, barb), Point::new(x, tip))
        .into_styled(style)
        .draw(display)?;
    Line::new(Point::new(x + 3, barb), Point::new(x, tip))
        .into_styled(style)
        .draw(display)
}

/// Draw a radial tick from `inner` to `outer` radius at `angle_deg`.
pub fn draw_radial_tick<D>(
    display: &mut D,
    center: Point,
    angle_deg: f32,
    inner: f32,
    outer: f32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(polar_point(center, inner, angle_deg), polar_point(center, outer, angle_deg))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
}

/// Draw a needle from a counterweight tail through `center` to `length`.
///
/// `tail` is how far the needle extends behind the pivot, 0 for none.
pub fn draw_needle<D>(
    display: &mut D,
    center: Point,
    angle_deg: f32,
    length: f32,
    tail: f32,
    width: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let tip = polar_point(center, length, angle_deg);
    let back = polar_point(center, tail, angle_deg + 180.0);
    Line::new(back, tip)
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
}

/// Draw a filled disc centered on `center`.
pub fn draw_disc<D>(display: &mut D, center: Point, diameter: u32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Linear interpolation between two colors, `t` clamped to `0.0..=1.0`.
///
/// Works on the 5-6-5 channels in 8-bit fixed point, so `t = 1.0` lands
/// exactly on `to`.
pub fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;
    let mix = |a: u8, b: u8| -> u8 {
        let a = i32::from(a);
        let b = i32::from(b);
        (a + (((b - a) * t_fixed) >> 8)) as u8
    };
    Rgb565::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}
