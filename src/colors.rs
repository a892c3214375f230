//! Color constants for the weather gauges.
//!
//! Standard colors come from the `RgbColor` trait constants; the rest are
//! hand-tuned RGB565 values (5 bits red, 6 bits green, 5 bits blue).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Panel backgrounds.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Labels, rings and the pressure needle.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Thermometer column and bulb.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure yellow. Fully lit light segments and the sun at full brightness.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Cyan. Humidity arc and needle.
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Pure green. Log page headings and prompt.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange accent for min/max range text.
/// RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dim amber for the lowest lit light segment.
/// RGB565: (24, 24, 0).
pub const AMBER: Rgb565 = Rgb565::new(24, 24, 0);

/// Gray for divider lines and minor ticks.
/// RGB565: (8, 16, 8).
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Very dark gray for unlit segments, the empty tube and the dark sun.
/// RGB565: (4, 8, 4).
pub const DARK_GRAY: Rgb565 = Rgb565::new(4, 8, 4);

/// Near-black green tint behind the log terminal.
/// RGB565: (1, 2, 1).
pub const TERMINAL_BG: Rgb565 = Rgb565::new(1, 2, 1);

/// Navy blue header background.
/// RGB565: (0, 8, 12).
pub const NAVY: Rgb565 = Rgb565::new(0, 8, 12);
