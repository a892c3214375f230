//! Non-modal popup overlays for status messages.
//!
//! Popups appear centered on screen with a white border and a navy
//! background. Only one shows at a time; input is still processed while it
//! is visible. Closing a popup leaves remnants behind, so the caller clears
//! the surface and invalidates the gauges when one goes away.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{NAVY, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

/// Border thickness around every popup.
const BORDER: u32 = 3;

/// Two-line "RANGES / RESET" popup.
const RESET_POPUP: Rectangle = centered_rect(180, 60);
const RESET_TEXT1_POS: Point = Point::new(CENTER_X, CENTER_Y - 5);
const RESET_TEXT2_POS: Point = Point::new(CENTER_X, CENTER_Y + 15);

/// Single-line "FPS ON/OFF" popup.
const FPS_POPUP: Rectangle = centered_rect(140, 50);
const FPS_TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y + 5);

const BORDER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const BACKGROUND_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(NAVY);

const fn centered_rect(width: u32, height: u32) -> Rectangle {
    Rectangle::new(
        Point::new(
            (SCREEN_WIDTH - width) as i32 / 2,
            (SCREEN_HEIGHT - height) as i32 / 2,
        ),
        Size::new(width, height),
    )
}

/// Paint the bordered box shared by all popups.
fn draw_frame<D>(display: &mut D, rect: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    rect.offset(BORDER as i32).into_styled(BORDER_FILL).draw(display)?;
    rect.into_styled(BACKGROUND_FILL).draw(display)
}

/// Draw the "RANGES RESET" popup, shown after display bounds are reset.
pub fn draw_reset_popup<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_frame(display, RESET_POPUP)?;
    Text::with_text_style("RANGES", RESET_TEXT1_POS, TITLE_STYLE_WHITE, CENTERED).draw(display)?;
    Text::with_text_style("RESET", RESET_TEXT2_POS, TITLE_STYLE_WHITE, CENTERED).draw(display)?;
    Ok(())
}

/// Draw the "FPS ON" / "FPS OFF" popup.
pub fn draw_fps_toggle_popup<D>(display: &mut D, fps_enabled: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_frame(display, FPS_POPUP)?;
    let status = if fps_enabled { "FPS ON" } else { "FPS OFF" };
    Text::with_text_style(status, FPS_TEXT_POS, TITLE_STYLE_WHITE, CENTERED).draw(display)?;
    Ok(())
}
