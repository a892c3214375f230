//! Page navigation for the simulator.
//!
//! Press `Y` to switch between the gauges and the event log.

/// Screens the simulator can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Dial, thermometer and light indicator.
    #[default]
    Gauges,

    /// Frame timing and the widget's event log.
    Log,
}

impl Page {
    /// Switch to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Gauges => Self::Log,
            Self::Log => Self::Gauges,
        }
    }
}
