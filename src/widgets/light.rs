//! Light-level indicator.
//!
//! A sun glyph that brightens from dark gray to yellow with the light
//! fraction, above a vertical bar of [`LIGHT_SEGMENTS`] segments. The lit
//! segments grade from amber at the bottom to yellow at the top.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
#[allow(unused_imports)]
use micromath::F32Ext;

use super::format_readout;
use super::primitives::{draw_disc, draw_panel_background, draw_radial_tick, draw_trend_arrow, lerp_rgb565};
use crate::colors::{AMBER, BLACK, DARK_GRAY, WHITE, YELLOW};
use crate::config::{
    HEADER_HEIGHT,
    LIGHT_BAR_BOTTOM_DY,
    LIGHT_BAR_WIDTH,
    LIGHT_PANEL_WIDTH,
    LIGHT_PANEL_X,
    LIGHT_SEGMENT_GAP,
    LIGHT_SEGMENT_HEIGHT,
    LIGHT_SEGMENTS,
    LIGHT_SUN_DIAMETER,
    LIGHT_SUN_DY,
    PANEL_HEIGHT,
};
use crate::quantity::Gauge;
use crate::reading::Reading;
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, READOUT_STYLE_WHITE};
use crate::trend::Trend;

const PANEL_TOP: i32 = HEADER_HEIGHT as i32;
const PANEL_CENTER_X: i32 = (LIGHT_PANEL_X + LIGHT_PANEL_WIDTH / 2) as i32;

const LABEL_POS: Point = Point::new(PANEL_CENTER_X, PANEL_TOP + 14);
const TREND_POS: Point = Point::new(PANEL_CENTER_X + 24, PANEL_TOP + 10);
const READOUT_POS: Point = Point::new(PANEL_CENTER_X, PANEL_TOP + 204);

const SUN_CENTER: Point = Point::new(PANEL_CENTER_X, PANEL_TOP + LIGHT_SUN_DY);
const SUN_RAY_INNER: f32 = (LIGHT_SUN_DIAMETER / 2 + 3) as f32;
const SUN_RAY_OUTER: f32 = SUN_RAY_INNER + 4.0;
const SUN_RAYS: u16 = 8;

const BAR_LEFT: i32 = PANEL_CENTER_X - (LIGHT_BAR_WIDTH / 2) as i32;
const BAR_BOTTOM: i32 = PANEL_TOP + LIGHT_BAR_BOTTOM_DY;
const SEGMENT_PITCH: i32 = (LIGHT_SEGMENT_HEIGHT + LIGHT_SEGMENT_GAP) as i32;

const UNLIT_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_GRAY);

/// Number of lit segments for a scale fraction, `round(fraction * segments)`.
///
/// No reading lights nothing.
pub fn lit_segments(fraction: Option<f32>) -> u32 {
    fraction.map_or(0, |f| (f.clamp(0.0, 1.0) * LIGHT_SEGMENTS as f32).round() as u32)
}

/// Sun glyph color for a scale fraction.
pub fn sun_color(fraction: Option<f32>) -> Rgb565 {
    lerp_rgb565(DARK_GRAY, YELLOW, fraction.unwrap_or(0.0))
}

/// Color of lit segment `index`, counted from the bottom.
pub fn segment_color(index: u32) -> Rgb565 {
    lerp_rgb565(AMBER, YELLOW, index as f32 / (LIGHT_SEGMENTS - 1) as f32)
}

/// Screen rectangle of segment `index`, counted from the bottom.
fn segment_rect(index: u32) -> Rectangle {
    let bottom = BAR_BOTTOM - index as i32 * SEGMENT_PITCH;
    Rectangle::new(
        Point::new(BAR_LEFT, bottom - LIGHT_SEGMENT_HEIGHT as i32),
        Size::new(LIGHT_BAR_WIDTH, LIGHT_SEGMENT_HEIGHT),
    )
}

/// Redraw the whole light panel.
pub fn draw_light<D>(display: &mut D, light: &Reading, trend: Option<Trend>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_panel_background(display, LIGHT_PANEL_X, HEADER_HEIGHT, LIGHT_PANEL_WIDTH, PANEL_HEIGHT, BLACK)?;

    Text::with_text_style(Gauge::Light.label(), LABEL_POS, LABEL_STYLE_WHITE, CENTERED).draw(display)?;
    if let Some(trend) = trend {
        draw_trend_arrow(display, TREND_POS.x, TREND_POS.y, trend, WHITE)?;
    }

    let fraction = light.fraction();

    let sun = sun_color(fraction);
    draw_disc(display, SUN_CENTER, LIGHT_SUN_DIAMETER, sun)?;
    for i in 0..SUN_RAYS {
        let angle = f32::from(i) * (360.0 / f32::from(SUN_RAYS));
        draw_radial_tick(display, SUN_CENTER, angle, SUN_RAY_INNER, SUN_RAY_OUTER, sun)?;
    }

    let lit = lit_segments(fraction);
    for i in 0..LIGHT_SEGMENTS {
        let style = if i < lit {
            PrimitiveStyle::with_fill(segment_color(i))
        } else {
            UNLIT_STYLE
        };
        segment_rect(i).into_styled(style).draw(display)?;
    }

    let readout = format_readout(light);
    Text::with_text_style(&readout, READOUT_POS, READOUT_STYLE_WHITE, CENTERED).draw(display)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;
    use crate::test_display::TestDisplay;

    #[test]
    fn test_lit_segments_rounds() {
        assert_eq!(lit_segments(None), 0, "no reading lights nothing");
        assert_eq!(lit_segments(Some(0.0)), 0);
        assert_eq!(lit_segments(Some(0.04)), 0);
        assert_eq!(lit_segments(Some(0.26)), 3);
        assert_eq!(lit_segments(Some(1.0)), LIGHT_SEGMENTS);
        assert_eq!(lit_segments(Some(1.5)), LIGHT_SEGMENTS, "fraction is clamped");
    }

    #[test]
    fn test_sun_color_range() {
        assert_eq!(sun_color(None), DARK_GRAY);
        assert_eq!(sun_color(Some(0.0)), DARK_GRAY);
        assert_eq!(sun_color(Some(1.0)), YELLOW);
    }

    #[test]
    fn test_segment_gradient() {
        assert_eq!(segment_color(0), AMBER, "bottom segment is amber");
        assert_eq!(segment_color(LIGHT_SEGMENTS - 1), YELLOW, "top segment is yellow");
    }

    #[test]
    fn test_segments_stay_in_panel() {
        let top = segment_rect(LIGHT_SEGMENTS - 1);
        assert!(top.top_left.y > SUN_CENTER.y + SUN_RAY_OUTER as i32, "bar clears the sun rays");
        assert!(BAR_LEFT > LIGHT_PANEL_X as i32);
    }

    #[test]
    fn test_draw_lights_half_the_bar() {
        let mut l = Reading::new(Quantity::Light);
        l.update(500.0).unwrap();

        let mut display = TestDisplay::new();
        draw_light(&mut display, &l, None).unwrap();

        let center_of = |i: u32| segment_rect(i).center();
        assert_eq!(display.pixel(center_of(4)), Some(segment_color(4)), "5th segment is lit");
        assert_eq!(display.pixel(center_of(5)), Some(DARK_GRAY), "6th segment is dark");
        assert_eq!(display.pixel(SUN_CENTER), Some(sun_color(Some(0.5))));
    }

    #[test]
    fn test_draw_stays_inside_panel() {
        let mut l = Reading::new(Quantity::Light);
        l.update(1234.0).unwrap();
        let mut display = TestDisplay::new();
        draw_light(&mut display, &l, Some(Trend::Rising)).unwrap();

        let x0 = LIGHT_PANEL_X as i32;
        assert_eq!(
            display.count_where(|pt, _| pt.x < x0 || pt.y < HEADER_HEIGHT as i32),
            0,
            "light indicator must not draw outside its panel"
        );
    }
}
