//! Dirty tracking for the gauge panels.
//!
//! Gauges redraw only when their state changed. Divider lines are drawn
//! once and again after anything wiped the surface.
//!
//! | Element | Redrawn when |
//! |---------|--------------|
//! | Gauge panel | Its reading, unit or bounds changed, or after a clear |
//! | Dividers | Not yet drawn, or after a clear |
//!
//! Header and popup tracking live in the simulator since they depend on
//! frame timing.

use crate::quantity::{GAUGE_COUNT, Gauge};

/// Per-gauge dirty flags plus draw-once divider state.
#[derive(Clone, Debug)]
pub struct RenderState {
    /// Gauges whose panel must be redrawn.
    dirty: [bool; GAUGE_COUNT],

    /// Whether dividers have been drawn since the last clear.
    dividers_drawn: bool,
}

impl RenderState {
    /// Everything dirty, nothing drawn yet.
    pub const fn new() -> Self {
        Self {
            dirty: [true; GAUGE_COUNT],
            dividers_drawn: false,
        }
    }

    /// Mark one gauge for redraw.
    #[inline]
    pub const fn mark_dirty(&mut self, gauge: Gauge) {
        self.dirty[gauge.index()] = true;
    }

    /// Whether `gauge` needs redrawing.
    #[inline]
    pub const fn is_dirty(&self, gauge: Gauge) -> bool {
        self.dirty[gauge.index()]
    }

    /// Whether any gauge needs redrawing.
    pub fn any_dirty(&self) -> bool {
        self.dirty.iter().any(|d| *d)
    }

    /// Clear the flag of a gauge that was just drawn.
    #[inline]
    pub const fn mark_clean(&mut self, gauge: Gauge) {
        self.dirty[gauge.index()] = false;
    }

    /// Check if dividers need drawing.
    #[inline]
    pub const fn need_dividers(&self) -> bool {
        !self.dividers_drawn
    }

    /// Mark dividers as drawn.
    #[inline]
    pub const fn mark_dividers_drawn(&mut self) {
        self.dividers_drawn = true;
    }

    /// The surface was wiped: every gauge and the dividers must be drawn again.
    pub const fn mark_display_cleared(&mut self) {
        self.dirty = [true; GAUGE_COUNT];
        self.dividers_drawn = false;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}
