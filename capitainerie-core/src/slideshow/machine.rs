//! Slideshow lifecycle states

/// Scheduler state
///
/// There is no terminal state in normal operation; `ShuttingDown` is only
/// entered on an operator stop or a render fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlideshowState {
    /// Not started yet
    #[default]
    Idle,
    /// Rendering pages and dwelling
    Cycling,
    /// Loop left; display cleanup has run or is running
    ShuttingDown,
}

impl SlideshowState {
    /// State after the loop starts
    pub fn start(self) -> Self {
        match self {
            SlideshowState::Idle => SlideshowState::Cycling,
            other => other,
        }
    }

    /// State after a stop request or fault
    pub fn stop(self) -> Self {
        SlideshowState::ShuttingDown
    }

    pub fn is_running(&self) -> bool {
        matches!(self, SlideshowState::Cycling)
    }
}
