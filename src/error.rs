//! Error type for widget state operations.
//!
//! Variants carry only fixed-size data so the enum stays `Copy` and usable
//! without an allocator. Drawing errors are not wrapped here; renderers
//! return the draw target's own error type.

use core::fmt;

use crate::quantity::Quantity;

/// Errors returned by [`WeatherWidget`](crate::WeatherWidget) state updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// A reading was NaN or infinite. The stored state is unchanged.
    NonFiniteValue(Quantity),

    /// Expanding the bounds to include a reading would make their span
    /// overflow `f32`. The stored state is unchanged.
    RangeOverflow(Quantity),

    /// A unit label does not fit the fixed-capacity label buffer.
    UnitTooLong(Quantity),

    /// Explicit display bounds were non-finite or not strictly increasing.
    InvalidRange {
        /// Quantity whose bounds were being set.
        quantity: Quantity,
        /// Requested lower bound.
        min: f32,
        /// Requested upper bound.
        max: f32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue(q) => write!(f, "non-finite {} reading", q.label()),
            Self::RangeOverflow(q) => write!(f, "{} reading overflows range", q.label()),
            Self::UnitTooLong(q) => write!(f, "{} unit label too long", q.label()),
            Self::InvalidRange { quantity, min, max } => {
                write!(f, "invalid {} range {min}..{max}", quantity.label())
            }
        }
    }
}

impl core::error::Error for Error {}
