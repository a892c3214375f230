//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` constructors are const fn, so every fixed
//! style lives in read-only data instead of being rebuilt on each redraw.
//! Styles that need a runtime color use [`LABEL_FONT`] / [`READOUT_FONT`]
//! with `MonoTextStyle::new(font, color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::{CYAN, ORANGE, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Panel labels, readouts and popup text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Centered both ways. Dial tick labels sit on their polar anchor point.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, vertically centered. Thermometer tick labels.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned text. Log page lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. FPS counter in the header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Readout font (`ProFont` 14pt).
pub const READOUT_FONT: &MonoFont = &PROFONT_14_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for labels and tick numbers.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small orange text for scale bounds.
pub const LABEL_STYLE_ORANGE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, ORANGE);

/// Small cyan text for the humidity readout.
pub const LABEL_STYLE_CYAN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, CYAN);

/// Header title (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Main readout text.
pub const READOUT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);
