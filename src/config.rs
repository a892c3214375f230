//! Layout and timing constants.
//!
//! Positions are pre-computed at compile time so the renderers never divide
//! screen dimensions per frame.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ WEATHER STATION                        50 FPS│  HEADER_HEIGHT
//! ├──────────────────────┬───────────┬───────────┤
//! │      DIAL_PANEL      │  THERMO   │   LIGHT   │  PANEL_HEIGHT
//! └──────────────────────┴───────────┴───────────┘
//!          160 px            80 px       80 px
//! ```

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 320x240).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Height of every gauge panel (everything below the header).
pub const PANEL_HEIGHT: u32 = SCREEN_HEIGHT - HEADER_HEIGHT;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Panel Layout
// =============================================================================

/// Left edge of the barometer/hygrometer dial panel.
pub const DIAL_PANEL_X: u32 = 0;

/// Width of the dial panel.
pub const DIAL_PANEL_WIDTH: u32 = 160;

/// Left edge of the thermometer panel.
pub const THERMO_PANEL_X: u32 = DIAL_PANEL_X + DIAL_PANEL_WIDTH;

/// Width of the thermometer panel.
pub const THERMO_PANEL_WIDTH: u32 = 80;

/// Left edge of the light indicator panel.
pub const LIGHT_PANEL_X: u32 = THERMO_PANEL_X + THERMO_PANEL_WIDTH;

/// Width of the light indicator panel.
pub const LIGHT_PANEL_WIDTH: u32 = SCREEN_WIDTH - LIGHT_PANEL_X;

const _: () = assert!(LIGHT_PANEL_X < SCREEN_WIDTH);
const _: () = assert!(LIGHT_PANEL_WIDTH == 80);

// =============================================================================
// Dial Geometry
// =============================================================================

/// Angle of the scale minimum in degrees (0 = 3 o'clock, clockwise positive).
/// 135 puts the minimum at the 7:30 position.
pub const DIAL_START_DEG: f32 = 135.0;

/// Angular extent of the dial scale in degrees.
pub const DIAL_SWEEP_DEG: f32 = 270.0;

/// Outer ring radius of the dial.
pub const DIAL_RADIUS: u32 = 70;

/// Radius of the humidity arc inside the pressure scale.
pub const HUMIDITY_ARC_RADIUS: u32 = 34;

/// Dial center, relative to the panel's top-left corner.
pub const DIAL_CENTER_DX: i32 = (DIAL_PANEL_WIDTH / 2) as i32;

/// Dial center, relative to the panel's top-left corner.
pub const DIAL_CENTER_DY: i32 = 100;

const _: () = assert!(HUMIDITY_ARC_RADIUS < DIAL_RADIUS);
const _: () = assert!(DIAL_CENTER_DY + DIAL_RADIUS as i32 <= PANEL_HEIGHT as i32 - 14);

/// Upper bound on labelled major intervals for a scale.
pub const MAX_MAJOR_TICKS: u32 = 10;

// =============================================================================
// Thermometer Geometry
// =============================================================================

/// Tube center, relative to the panel's left edge.
pub const THERMO_TUBE_DX: i32 = 26;

/// Tube width in pixels.
pub const THERMO_TUBE_WIDTH: u32 = 10;

/// Top of the tube, relative to the panel's top edge.
pub const THERMO_TUBE_TOP_DY: i32 = 30;

/// Bottom of the scale region of the tube, relative to the panel's top edge.
pub const THERMO_TUBE_BOTTOM_DY: i32 = 170;

/// Bulb diameter in pixels.
pub const THERMO_BULB_DIAMETER: u32 = 20;

const _: () = assert!(THERMO_TUBE_TOP_DY < THERMO_TUBE_BOTTOM_DY);

// =============================================================================
// Light Indicator Geometry
// =============================================================================

/// Number of segments in the light bar.
pub const LIGHT_SEGMENTS: u32 = 10;

/// Height of a single light segment.
pub const LIGHT_SEGMENT_HEIGHT: u32 = 10;

/// Vertical gap between light segments.
pub const LIGHT_SEGMENT_GAP: u32 = 3;

/// Width of the light bar.
pub const LIGHT_BAR_WIDTH: u32 = 36;

/// Bottom edge of the light bar, relative to the panel's top edge.
pub const LIGHT_BAR_BOTTOM_DY: i32 = 186;

/// Sun glyph center, relative to the panel's top edge.
pub const LIGHT_SUN_DY: i32 = 34;

/// Sun disc diameter.
pub const LIGHT_SUN_DIAMETER: u32 = 16;

const _: () = assert!(
    LIGHT_BAR_BOTTOM_DY - ((LIGHT_SEGMENT_HEIGHT + LIGHT_SEGMENT_GAP) * LIGHT_SEGMENTS) as i32
        > LIGHT_SUN_DY + LIGHT_SUN_DIAMETER as i32
);

// =============================================================================
// Trend Configuration
// =============================================================================

/// Number of readings kept per quantity for trend detection.
pub const HISTORY_SIZE: usize = 12;

/// Number of newest/oldest samples averaged when computing a trend.
pub const TREND_WINDOW: usize = 4;

/// Minimum readings before a trend is reported.
pub const TREND_MIN_SAMPLES: usize = 8;

const _: () = assert!(TREND_WINDOW * 2 <= TREND_MIN_SAMPLES);
const _: () = assert!(TREND_MIN_SAMPLES <= HISTORY_SIZE);

// =============================================================================
// Timing Configuration (frame-based, no clock dependency)
// =============================================================================

/// Target frame period in milliseconds (~50 FPS).
pub const FRAME_TIME_MS: u64 = 20;

/// Frames between demo sensor updates (~2 updates per second).
pub const SENSOR_UPDATE_FRAMES: u32 = 25;

/// How long popups stay on screen, in milliseconds.
pub const POPUP_DURATION_MS: u64 = 2000;
