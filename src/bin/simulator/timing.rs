//! Timing constants as `Duration`s.
//!
//! The library keeps plain millisecond counts since `no_std` has no clock;
//! the simulator converts them once here.

use std::time::Duration;

use weather_gauges::config::{FRAME_TIME_MS, POPUP_DURATION_MS};

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(FRAME_TIME_MS);

/// How long popups stay on screen.
pub const POPUP_DURATION: Duration = Duration::from_millis(POPUP_DURATION_MS);
