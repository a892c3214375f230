//! Popup state with time-based expiration.

use std::time::Instant;

use crate::timing::POPUP_DURATION;

/// Active popup with the instant it was triggered.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "RANGES RESET" popup (180×60).
    Reset(Instant),
    /// "FPS ON/OFF" popup (140×50).
    Fps(Instant),
}

impl Popup {
    /// When this popup was triggered.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Reset(t) | Self::Fps(t) => *t,
        }
    }

    /// Whether this popup has been visible for [`POPUP_DURATION`].
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.start_time().elapsed() >= POPUP_DURATION
    }

    /// Discriminant only, for detecting popup switches.
    #[inline]
    pub const fn kind(&self) -> u8 {
        match self {
            Self::Reset(_) => 0,
            Self::Fps(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_popup_not_expired() {
        assert!(!Popup::Reset(Instant::now()).is_expired());
    }

    #[test]
    fn test_old_popup_expired() {
        let Some(start) = Instant::now().checked_sub(POPUP_DURATION) else {
            return; // clock too close to its epoch to go back
        };
        assert!(Popup::Fps(start).is_expired());
    }

    #[test]
    fn test_kinds_differ() {
        let now = Instant::now();
        assert_ne!(Popup::Reset(now).kind(), Popup::Fps(now).kind());
    }
}
