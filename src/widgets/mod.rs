//! Gauge renderers and frame elements.
//!
//! - [`dial`]: combined barometer/hygrometer dial
//! - [`thermometer`]: vertical thermometer
//! - [`light`]: sun glyph and segmented light bar
//! - [`header`]: header bar and panel dividers
//! - [`popups`]: overlay popups
//! - [`primitives`]: shared drawing helpers
//!
//! Every renderer repaints its whole panel (background first), so it can
//! be called on its own whenever its gauge is dirty. Draw functions are
//! generic over the target and return its error unchanged.
//!
//! Text is formatted into `heapless::String` buffers; nothing allocates.

pub mod dial;
pub mod header;
pub mod light;
pub mod popups;
pub mod primitives;
pub mod thermometer;

use core::fmt::Write;

use heapless::String;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::reading::Reading;

/// Buffer size for readout and bounds text.
pub const TEXT_CAPACITY: usize = 24;

/// Short formatted text for one gauge label.
pub type GaugeText = String<TEXT_CAPACITY>;

/// Readout for a reading: value with the quantity's decimals and the unit,
/// or `--` before the first reading.
///
/// Values too long for the buffer switch to exponent form, dropping the
/// unit only if even that does not fit.
pub fn format_readout(reading: &Reading) -> GaugeText {
    let mut s = GaugeText::new();
    let unit = reading.unit();
    match reading.value() {
        Some(v) => {
            let prec = reading.quantity().decimals();
            let _ = refill(&mut s, format_args!("{v:.prec$} {unit}"))
                || refill(&mut s, format_args!("{v:.1e} {unit}"))
                || refill(&mut s, format_args!("{v:.1e}"));
        }
        None => {
            let _ = s.push_str("--");
        }
    }
    s
}

/// Current display bounds, e.g. `960..1050 hPa`, with the same exponent
/// fallback as [`format_readout`].
pub fn format_bounds(reading: &Reading) -> GaugeText {
    let mut s = GaugeText::new();
    let (min, max, unit) = (reading.min(), reading.max(), reading.unit());
    let prec = reading.quantity().decimals();
    let _ = refill(&mut s, format_args!("{min:.prec$}..{max:.prec$} {unit}"))
        || refill(&mut s, format_args!("{min:.1e}..{max:.1e} {unit}"))
        || refill(&mut s, format_args!("{min:.1e}..{max:.1e}"));
    s
}

/// Tick label for `value` printed with `decimals` places, or in exponent
/// form when that is too long.
pub fn format_tick_label(value: f32, decimals: usize) -> String<12> {
    let mut s = String::new();
    // Avoid "-0" for ticks that land on zero through float error
    let value = if value.abs() < 1e-6 { 0.0 } else { value };
    let _ = refill(&mut s, format_args!("{value:.decimals$}")) || refill(&mut s, format_args!("{value:.1e}"));
    s
}

/// Replace the contents of `s` with `args`. On overflow `s` is left empty
/// and `false` is returned.
fn refill<const N: usize>(s: &mut String<N>, args: core::fmt::Arguments<'_>) -> bool {
    s.clear();
    if s.write_fmt(args).is_ok() {
        true
    } else {
        s.clear();
        false
    }
}
