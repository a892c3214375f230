// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::too_many_lines)] // main() is one frame loop
#![allow(clippy::struct_excessive_bools)] // FrameState flags are independent

//! Desktop simulator for the weather gauge widget.
//!
//! Opens an SDL window, feeds the widget a synthetic signal for every
//! quantity and redraws only the gauges that changed.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `B` | Reset all ranges to their defaults |
//! | `X` | Toggle FPS display on/off |
//! | `Y` | Switch between the gauges and the event log |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! # Frame loop
//!
//! | Element | Redrawn when |
//! |---------|--------------|
//! | Header | FPS text changes / after a clear |
//! | Gauges | Their quantity was updated / after a clear |
//! | Dividers | After a clear |
//! | Popup | Every frame while visible |
//! | Log page | Every frame |

mod feed;
mod frame_state;
mod pages;
mod popup;
mod profiling;
mod screens;
mod timing;

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use feed::DemoFeed;
use frame_state::FrameState;
use pages::Page;
use popup::Popup;
use profiling::ProfilingMetrics;
use screens::draw_log_page;
use timing::FRAME_TIME;
use weather_gauges::WeatherWidget;
use weather_gauges::colors::BLACK;
use weather_gauges::config::{SCREEN_HEIGHT, SCREEN_WIDTH, SENSOR_UPDATE_FRAMES};
use weather_gauges::widgets::header::draw_header;
use weather_gauges::widgets::popups::{draw_fps_toggle_popup, draw_reset_popup};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Weather Gauges", &output_settings);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    // Signal generation time parameter (advances each frame)
    let mut t = 0.0f32;
    let mut frame_count = 0u32;

    let mut widget = WeatherWidget::new();
    let mut feed = DemoFeed::new();

    // Active popup (only one at a time, encapsulates kind + start time)
    let mut active_popup: Option<Popup> = None;

    // FPS counter state (X button toggles)
    let mut show_fps = true;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    let mut frame_state = FrameState::new();

    let mut current_page = Page::default();
    let mut page_just_switched = false;

    let mut metrics = ProfilingMetrics::new();
    widget.log_mut().push("System started");

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // B: reset ranges (gauges page only)
                        Keycode::B if current_page == Page::Gauges => {
                            widget.reset_ranges();
                            active_popup = Some(Popup::Reset(Instant::now()));
                        }
                        // X: toggle FPS display (gauges page only)
                        Keycode::X if current_page == Page::Gauges => {
                            show_fps = !show_fps;
                            active_popup = Some(Popup::Fps(Instant::now()));
                            widget.log_mut().push(if show_fps { "FPS: ON" } else { "FPS: OFF" });
                        }
                        // Y: switch page (any page)
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                            active_popup = None;
                            widget.log_mut().push(match current_page {
                                Page::Gauges => "Page: Gauges",
                                Page::Log => "Page: Log",
                            });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Expire before tracking, so cleanup happens the frame the popup disappears
        if active_popup.is_some_and(|p| p.is_expired()) {
            active_popup = None;
        }
        frame_state.update_popup(active_popup.map(|p| p.kind()));

        // Popups differ in size and the log page covers everything, so clear
        // and let every element repaint
        if frame_state.is_first_frame() || frame_state.popup_just_closed() || page_just_switched {
            display.clear(BLACK).ok();
            frame_state.mark_display_cleared();
            widget.invalidate_all();
        }

        // ======================================================================
        // Demo Sensor Feed
        // ======================================================================

        if frame_count.is_multiple_of(SENSOR_UPDATE_FRAMES) {
            for (quantity, value) in feed.sample(t) {
                match widget.update(quantity, value) {
                    Ok(update) => {
                        metrics.updates += 1;
                        metrics.range_expansions +=
                            u32::from(update.range.min_expanded) + u32::from(update.range.max_expanded);
                    }
                    // Already logged by the widget
                    Err(_) => metrics.rejected_updates += 1,
                }
            }
        }

        // ======================================================================
        // FPS Calculation (updated once per second)
        // ======================================================================

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // ======================================================================
        // Page-Based Rendering
        // ======================================================================

        match current_page {
            Page::Gauges => {
                if frame_state.check_header_dirty(show_fps, current_fps) {
                    draw_header(&mut display, show_fps, current_fps).ok();
                    metrics.inc_header_redraws();
                }

                if let Ok(report) = widget.redraw(&mut display) {
                    metrics.record_redraw(report);
                }

                // Drawn after the gauges to stay on top
                match active_popup {
                    Some(Popup::Reset(_)) => draw_reset_popup(&mut display).ok(),
                    Some(Popup::Fps(_)) => draw_fps_toggle_popup(&mut display, show_fps).ok(),
                    None => None,
                };
            }

            Page::Log => {
                draw_log_page(&mut display, &metrics, widget.log(), current_fps).ok();
            }
        }

        // ======================================================================
        // Frame Timing and Profiling
        // ======================================================================

        let render_time = frame_start.elapsed();

        frame_state.end_frame();
        page_just_switched = false;

        window.update(&display);

        t += 0.05;
        frame_count = frame_count.wrapping_add(1);

        // Sleep to maintain target frame rate (~50 FPS)
        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start
            .elapsed()
            .checked_sub(pre_sleep)
            .unwrap_or(Duration::ZERO);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}
