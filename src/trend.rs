//! Reading history for barometer-style tendency arrows.
//!
//! Each quantity keeps the last [`HISTORY_SIZE`] readings in a fixed ring
//! buffer. The trend compares the mean of the newest [`TREND_WINDOW`]
//! readings against the mean of the oldest [`TREND_WINDOW`] still held; a
//! difference smaller than the quantity's threshold reads as steady, which
//! keeps sensor noise from flipping the arrow.

use crate::config::{HISTORY_SIZE, TREND_MIN_SAMPLES, TREND_WINDOW};

/// Direction of recent change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    /// Recent readings are higher than older ones.
    Rising,
    /// Recent readings are lower than older ones.
    Falling,
}

/// Fixed-size ring buffer of recent readings.
#[derive(Clone, Debug)]
pub struct TrendTracker {
    history: [f32; HISTORY_SIZE],
    index: usize,
    count: usize,
    threshold: f32,
}

impl TrendTracker {
    /// Empty history with the given steady-band threshold.
    pub const fn new(threshold: f32) -> Self {
        Self {
            history: [0.0; HISTORY_SIZE],
            index: 0,
            count: 0,
            threshold,
        }
    }

    /// Record a reading, overwriting the oldest once full.
    pub fn push(&mut self, value: f32) {
        self.history[self.index] = value;
        self.index = (self.index + 1) % HISTORY_SIZE;
        if self.count < HISTORY_SIZE {
            self.count += 1;
        }
    }

    /// Number of readings held.
    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// True before the first reading.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Forget all readings.
    pub fn clear(&mut self) {
        self.history = [0.0; HISTORY_SIZE];
        self.index = 0;
        self.count = 0;
    }

    /// Current trend, `None` while steady or with too little history.
    pub fn trend(&self) -> Option<Trend> {
        if self.count < TREND_MIN_SAMPLES {
            return None;
        }

        // Newest samples, walking backward from the write index
        let mut recent_sum = 0.0f32;
        for i in 0..TREND_WINDOW {
            let idx = (self.index + HISTORY_SIZE - 1 - i) % HISTORY_SIZE;
            recent_sum += self.history[idx];
        }

        // Oldest samples still in the buffer
        let start = if self.count < HISTORY_SIZE { 0 } else { self.index };
        let mut older_sum = 0.0f32;
        for i in 0..TREND_WINDOW {
            older_sum += self.history[(start + i) % HISTORY_SIZE];
        }

        let diff = (recent_sum - older_sum) / TREND_WINDOW as f32;
        if diff >= self.threshold {
            Some(Trend::Rising)
        } else if diff <= -self.threshold {
            Some(Trend::Falling)
        } else {
            None
        }
    }
}
