//! Frame timing and render counters shown on the log page.

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;
use weather_gauges::RedrawReport;

/// Frame timing and redraw statistics, updated every frame.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    pub header_redraws: u32,
    pub divider_redraws: u32,
    pub gauge_draws: u32,
    pub updates: u32,
    pub range_expansions: u32,
    pub rejected_updates: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            header_redraws: 0,
            divider_redraws: 0,
            gauge_draws: 0,
            updates: 0,
            range_expansions: 0,
            rejected_updates: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for the frame that just finished.
    pub fn record_frame(&mut self, total_time: Duration, render_time: Duration, sleep_time: Duration) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Count what a widget redraw painted.
    pub fn record_redraw(&mut self, report: RedrawReport) {
        self.gauge_draws += report.gauges_drawn();
        self.divider_redraws += u32::from(report.dividers);
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> {
        format_uptime(self.start_time.elapsed())
    }

    #[inline]
    pub fn inc_header_redraws(&mut self) {
        self.header_redraws += 1;
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_uptime(uptime: Duration) -> String<12> {
    let secs = uptime.as_secs();
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
    s
}
