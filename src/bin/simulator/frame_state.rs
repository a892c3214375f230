//! Header and popup tracking for the simulator's frame loop.
//!
//! The widget tracks its own gauges; this covers what sits around them.
//!
//! | Element | Redrawn when |
//! |---------|--------------|
//! | Header | FPS text changes, first frame, after a clear |
//! | Popup | Every frame while visible |
//!
//! When a popup closes or switches to another kind, the display is cleared
//! to remove remnants (popups differ in size) and everything is redrawn.

/// Per-frame bookkeeping for header redraws and popup cleanup.
pub struct FrameState {
    /// Previous FPS display state.
    prev_show_fps: bool,

    /// Previous FPS value, rounded the same way the header prints it.
    prev_fps_rounded: u32,

    /// Previous popup kind, for detecting switches.
    prev_popup_kind: Option<u8>,

    /// Popup closed or switched this frame.
    popup_just_closed: bool,

    /// Nothing drawn yet.
    first_frame: bool,

    /// Display was cleared this frame (page switch or popup cleanup).
    display_cleared: bool,
}

impl FrameState {
    pub const fn new() -> Self {
        Self {
            prev_show_fps: true,
            prev_fps_rounded: 0,
            prev_popup_kind: None,
            popup_just_closed: false,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the header needs redrawing, and remember what it will show.
    ///
    /// Rounds like the header's `{:.0}` formatting so a change that does not
    /// alter the text does not trigger a redraw.
    pub fn check_header_dirty(&mut self, show_fps: bool, fps: f32) -> bool {
        let fps_rounded = fps.round() as u32;
        let dirty = self.first_frame
            || self.popup_just_closed
            || self.display_cleared
            || show_fps != self.prev_show_fps
            || (show_fps && fps_rounded != self.prev_fps_rounded);

        self.prev_show_fps = show_fps;
        self.prev_fps_rounded = fps_rounded;
        dirty
    }

    /// Record the current popup kind; detects close and switch.
    pub fn update_popup(&mut self, popup_kind: Option<u8>) {
        let changed = popup_kind != self.prev_popup_kind;
        let was_visible = self.prev_popup_kind.is_some();
        self.prev_popup_kind = popup_kind;

        if changed && was_visible {
            self.popup_just_closed = true;
        }
    }

    #[inline]
    pub const fn popup_just_closed(&self) -> bool {
        self.popup_just_closed
    }

    #[inline]
    pub const fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// The display was cleared; the header must be redrawn.
    pub const fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
    }

    /// Reset per-frame flags.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.popup_just_closed = false;
        self.display_cleared = false;
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self::new()
    }
}
