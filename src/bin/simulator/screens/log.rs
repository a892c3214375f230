//! Event log page, toggled with `Y`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ EVENT LOG           UP 00:12:34               50 FPS│
//! ├─────────────────────────────────────────────────────┤
//! │ TIMING          │ REDRAWS         │ FEED            │
//! │ Frame  20.0ms   │ Frames 12847    │ Updates 1024    │
//! │ Render  0.5ms   │ Header 12       │ Expand  6       │
//! │ Sleep  19.5ms   │ Gauges 3071     │ Reject  10      │
//! │ Min    19.8ms   │ Divs   3        │ Logged  31      │
//! │ Max    25.1ms   │                 │                 │
//! │ Avg    20.1ms   │                 │                 │
//! ├─────────────────────────────────────────────────────┤
//! │ > System started                                    │
//! │ > PRESS max -> 1070                                 │
//! │ > _                                                 │
//! └─────────────────────────────────────────────────────┘
//! ```

use core::fmt::{self, Write};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use weather_gauges::colors::{BLACK, GRAY, GREEN, ORANGE, TERMINAL_BG, WHITE, YELLOW};
use weather_gauges::config::{CENTER_X, SCREEN_HEIGHT, SCREEN_WIDTH};
use weather_gauges::debug_log::DebugLog;
use weather_gauges::styles::{CENTERED, LABEL_FONT, LEFT_ALIGNED, RIGHT_ALIGNED};

use crate::profiling::ProfilingMetrics;

const TITLE_BASELINE: i32 = 11;
const RULE_TOP_Y: i32 = 16;
const COLUMN_TITLE_Y: i32 = 27;
const FIRST_STAT_Y: i32 = 39;
const STAT_PITCH: i32 = 12;

/// Left edge of each stats column.
const COLUMNS: [i32; 3] = [6, 112, 216];

/// Rule between the stats and the terminal.
const RULE_LOG_Y: i32 = 116;

/// Baseline of the first terminal line.
const TERMINAL_Y: i32 = 129;
const TERMINAL_PITCH: i32 = 11;
const TERMINAL_TEXT_X: i32 = 16;

/// Log lines shown; the row after them holds the cursor.
const TERMINAL_ROWS: usize = ((SCREEN_HEIGHT as i32 - TERMINAL_Y) / TERMINAL_PITCH) as usize - 1;

const _: () = assert!(FIRST_STAT_Y + STAT_PITCH * 5 < RULE_LOG_Y);
const _: () = assert!(TERMINAL_ROWS >= 4);

/// One stat line: text and color.
type StatLine = (String<20>, Rgb565);

/// Draw the whole page. Clears the display first.
pub fn draw_log_page<D>(display: &mut D, metrics: &ProfilingMetrics, log: &DebugLog, fps: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK)?;

    draw_title_bar(display, metrics, fps)?;
    draw_rule(display, RULE_TOP_Y)?;

    let columns = [
        ("TIMING", timing_lines(metrics)),
        ("REDRAWS", redraw_lines(metrics)),
        ("FEED", feed_lines(metrics, log)),
    ];
    let title_style = MonoTextStyle::new(LABEL_FONT, GRAY);
    for ((title, lines), x) in columns.iter().zip(COLUMNS) {
        Text::with_text_style(title, Point::new(x, COLUMN_TITLE_Y), title_style, LEFT_ALIGNED).draw(display)?;
        let mut y = FIRST_STAT_Y;
        for (text, color) in lines.iter().filter(|(text, _)| !text.is_empty()) {
            Text::new(text, Point::new(x, y), MonoTextStyle::new(LABEL_FONT, *color)).draw(display)?;
            y += STAT_PITCH;
        }
    }

    draw_rule(display, RULE_LOG_Y)?;
    draw_terminal(display, log)
}

fn draw_title_bar<D>(display: &mut D, metrics: &ProfilingMetrics, fps: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let white = MonoTextStyle::new(LABEL_FONT, WHITE);

    Text::with_text_style(
        "EVENT LOG",
        Point::new(COLUMNS[0], TITLE_BASELINE),
        MonoTextStyle::new(LABEL_FONT, GREEN),
        LEFT_ALIGNED,
    )
    .draw(display)?;

    let mut uptime: String<16> = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    Text::with_text_style(&uptime, Point::new(CENTER_X, TITLE_BASELINE), white, CENTERED).draw(display)?;

    let mut fps_text: String<12> = String::new();
    let _ = write!(fps_text, "{fps:.0} FPS");
    Text::with_text_style(
        &fps_text,
        Point::new(SCREEN_WIDTH as i32 - COLUMNS[0], TITLE_BASELINE),
        white,
        RIGHT_ALIGNED,
    )
    .draw(display)?;
    Ok(())
}

fn line(color: Rgb565, args: fmt::Arguments<'_>) -> StatLine {
    let mut s = String::new();
    let _ = s.write_fmt(args);
    (s, color)
}

fn ms(us: u32) -> f32 {
    us as f32 / 1000.0
}

fn timing_lines(m: &ProfilingMetrics) -> [StatLine; 6] {
    // u32::MAX until the first frame is recorded
    let min = if m.frame_time_min_us == u32::MAX { 0 } else { m.frame_time_min_us };
    [
        line(WHITE, format_args!("Frame  {:.1}ms", ms(m.frame_time_us))),
        line(WHITE, format_args!("Render {:.1}ms", ms(m.render_time_us))),
        line(WHITE, format_args!("Sleep  {:.1}ms", ms(m.sleep_time_us))),
        line(YELLOW, format_args!("Min    {:.1}ms", ms(min))),
        line(YELLOW, format_args!("Max    {:.1}ms", ms(m.frame_time_max_us))),
        line(YELLOW, format_args!("Avg    {:.1}ms", ms(m.frame_time_avg_us()))),
    ]
}

fn redraw_lines(m: &ProfilingMetrics) -> [StatLine; 6] {
    [
        line(WHITE, format_args!("Frames {}", m.total_frames)),
        line(WHITE, format_args!("Header {}", m.header_redraws)),
        line(WHITE, format_args!("Gauges {}", m.gauge_draws)),
        line(WHITE, format_args!("Divs   {}", m.divider_redraws)),
        (String::new(), WHITE),
        (String::new(), WHITE),
    ]
}

fn feed_lines(m: &ProfilingMetrics, log: &DebugLog) -> [StatLine; 6] {
    let reject_color = if m.rejected_updates > 0 { ORANGE } else { WHITE };
    [
        line(WHITE, format_args!("Updates {}", m.updates)),
        line(WHITE, format_args!("Expand  {}", m.range_expansions)),
        line(reject_color, format_args!("Reject  {}", m.rejected_updates)),
        line(WHITE, format_args!("Logged  {}", log.total())),
        (String::new(), WHITE),
        (String::new(), WHITE),
    ]
}

/// Newest log lines with `>` prompts, then a cursor.
fn draw_terminal<D>(display: &mut D, log: &DebugLog) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let top = RULE_LOG_Y + 2;
    Rectangle::new(Point::new(0, top), Size::new(SCREEN_WIDTH, (SCREEN_HEIGHT as i32 - top) as u32))
        .into_styled(PrimitiveStyle::with_fill(TERMINAL_BG))
        .draw(display)?;

    let prompt = MonoTextStyle::new(LABEL_FONT, GREEN);
    let text = MonoTextStyle::new(LABEL_FONT, ORANGE);

    let mut y = TERMINAL_Y;
    for entry in log.iter().skip(log.len().saturating_sub(TERMINAL_ROWS)) {
        Text::new(">", Point::new(COLUMNS[0], y), prompt).draw(display)?;
        Text::new(entry, Point::new(TERMINAL_TEXT_X, y), text).draw(display)?;
        y += TERMINAL_PITCH;
    }
    Text::new("> _", Point::new(COLUMNS[0], y), prompt).draw(display)?;
    Ok(())
}

fn draw_rule<D>(display: &mut D, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 3, y))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
}
