//! Full-page screens other than the gauges.
//!
//! - **Log page** ([`log`]): frame timing, redraw counters and the widget's
//!   event log (toggled with `Y`)

mod log;

pub use log::draw_log_page;
