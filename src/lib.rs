//! Analog-style weather gauges for `embedded-graphics` displays.
//!
//! A barometer/hygrometer dial, a thermometer and a light-level indicator,
//! driven by scalar readings and redrawn on demand. Everything renders
//! through any `DrawTarget<Color = Rgb565>`, so the same code runs on an
//! SPI panel or in the desktop simulator.
//!
//! # Testing
//!
//! Tests run with `std` enabled (via `cfg_attr`) against an in-memory
//! framebuffer, while the library itself is `no_std`:
//! ```bash
//! cargo test --lib
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Configuration
pub mod colors;
pub mod config;
pub mod styles;

// Display state
pub mod debug_log;
pub mod error;
pub mod quantity;
pub mod reading;
pub mod render;
pub mod scale;
pub mod trend;

// Rendering
pub mod widget;
pub mod widgets;

#[cfg(test)]
mod test_display;

pub use error::Error;
pub use quantity::{Gauge, Quantity};
pub use widget::{RedrawReport, Update, WeatherWidget};
