//! Navigation input
//!
//! Buttons, encoders and touch panels all reduce to these four events.

/// User navigation event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Move selection down (encoder clockwise, short press)
    Next,
    /// Move selection up (encoder counter-clockwise)
    Previous,
    /// Activate the selected item (encoder click, long press)
    Select,
    /// Leave the current page
    Back,
}
