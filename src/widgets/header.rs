//! Header bar and panel divider rendering.
//!
//! Positions and styles are `const`, so nothing here is computed per frame.
//! The FPS text is formatted into a `heapless::String`.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{GRAY, NAVY};
use crate::config::{HEADER_HEIGHT, LIGHT_PANEL_X, SCREEN_HEIGHT, SCREEN_WIDTH, THERMO_PANEL_X};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, RIGHT_ALIGNED, TITLE_STYLE_WHITE};

/// Header title.
pub const TITLE: &str = "WEATHER STATION";

const HEADER_TITLE_POS: Point = Point::new(SCREEN_WIDTH as i32 / 2, 19);

/// FPS counter, right-aligned 5px from the edge.
const HEADER_FPS_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 17);

const HEADER_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

// Endpoints stop at SCREEN_HEIGHT - 1, the last valid row.

/// Divider between the dial and the thermometer.
const DIV_THERMO_START: Point = Point::new(THERMO_PANEL_X as i32, HEADER_HEIGHT as i32);
const DIV_THERMO_END: Point = Point::new(THERMO_PANEL_X as i32, (SCREEN_HEIGHT - 1) as i32);

/// Divider between the thermometer and the light indicator.
const DIV_LIGHT_START: Point = Point::new(LIGHT_PANEL_X as i32, HEADER_HEIGHT as i32);
const DIV_LIGHT_END: Point = Point::new(LIGHT_PANEL_X as i32, (SCREEN_HEIGHT - 1) as i32);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(NAVY);

/// Draw the header bar with the title and an optional FPS counter.
pub fn draw_header<D>(display: &mut D, show_fps: bool, fps: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display)?;

    Text::with_text_style(TITLE, HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED).draw(display)?;

    if show_fps {
        let mut fps_str: String<16> = String::new();
        let _ = write!(fps_str, "{fps:.0} FPS");
        Text::with_text_style(&fps_str, HEADER_FPS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED).draw(display)?;
    }
    Ok(())
}

/// Draw the vertical lines between the three gauge panels.
pub fn draw_dividers<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(DIV_THERMO_START, DIV_THERMO_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)?;
    Line::new(DIV_LIGHT_START, DIV_LIGHT_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_display::TestDisplay;

    #[test]
    fn test_header_fills_top_rows() {
        let mut display = TestDisplay::new();
        draw_header(&mut display, false, 0.0).unwrap();
        assert_eq!(display.pixel(Point::new(2, 2)), Some(NAVY));
        assert_eq!(
            display.count_where(|pt, _| pt.y >= HEADER_HEIGHT as i32),
            0,
            "header must stay above the panels"
        );
    }

    #[test]
    fn test_fps_counter_drawn_only_when_enabled() {
        let mut hidden = TestDisplay::new();
        draw_header(&mut hidden, false, 50.0).unwrap();
        let mut shown = TestDisplay::new();
        draw_header(&mut shown, true, 50.0).unwrap();

        let right_edge = |pt: Point, c: Rgb565| pt.x > 280 && c != NAVY;
        assert_eq!(hidden.count_where(right_edge), 0);
        assert!(shown.count_where(right_edge) > 0, "FPS text should be drawn");
    }

    #[test]
    fn test_dividers_on_panel_edges() {
        let mut display = TestDisplay::new();
        draw_dividers(&mut display).unwrap();
        assert_eq!(display.pixel(Point::new(THERMO_PANEL_X as i32, 100)), Some(GRAY));
        assert_eq!(display.pixel(Point::new(LIGHT_PANEL_X as i32, 239)), Some(GRAY));
        assert_eq!(display.pixel(Point::new(THERMO_PANEL_X as i32, 10)), None, "dividers start below the header");
    }
}
