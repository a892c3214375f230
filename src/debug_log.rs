//! In-memory event log.
//!
//! The widget records range expansions, rejected readings and explicit
//! changes here; the simulator shows the lines on its log page. Entries
//! are fixed-size strings in a fixed-size deque, so logging never
//! allocates.
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("PRESS max -> 1060");
//! for line in log.iter() {
//!     println!("{line}");
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

/// Number of lines kept; older lines are dropped.
pub const LOG_BUFFER_SIZE: usize = 12;

/// Maximum characters per line, longer messages are truncated.
pub const LOG_LINE_LENGTH: usize = 48;

/// One log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

/// Ring buffer of recent log lines.
pub struct DebugLog {
    buffer: Deque<LogLine, LOG_BUFFER_SIZE>,
    total: u32,
}

impl DebugLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total: 0,
        }
    }

    /// Append a message, dropping the oldest line when full.
    pub fn push(&mut self, msg: &str) {
        let mut line = LogLine::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Append a formatted message without going through an intermediate `&str`.
    ///
    /// Output past the line capacity is cut off.
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) {
        let mut line = TruncatingLine(LogLine::new());
        let _ = line.write_fmt(args);
        self.push_line(line.0);
    }

    fn push_line(&mut self, line: LogLine) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
        self.total = self.total.wrapping_add(1);
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    /// Newest line.
    pub fn last(&self) -> Option<&str> {
        self.buffer.back().map(|line| line.as_str())
    }

    /// Number of lines held.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when nothing has been logged or the log was cleared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Messages logged since creation, including dropped ones.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

/// `fmt::Write` adapter that keeps what fits and drops the rest.
struct TruncatingLine(LogLine);

impl Write for TruncatingLine {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.len() + c.len_utf8() > LOG_LINE_LENGTH - 1 {
                return Ok(());
            }
            self.0.push(c).ok();
        }
        Ok(())
    }
}
