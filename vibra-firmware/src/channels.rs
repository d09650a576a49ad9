//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use vibra_core::Intervals;
use vibra_display::NavigationEvent;

/// Channel capacity for navigation events
const INPUT_CHANNEL_SIZE: usize = 8;

/// Request for the vibrator task
#[derive(Debug, Clone, PartialEq, Eq, defmt::Format)]
pub enum VibrationCommand {
    /// Single buzz (ms)
    Buzz(u32),
    /// Pause/buzz pattern with repeat index
    Pattern { intervals: Intervals, repeat_index: i32 },
    /// Stop immediately
    Cancel,
}

/// Navigation events from the button
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, NavigationEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Latest vibration command (a newer command overwrites one not yet taken)
pub static VIBRATION_CMD: Signal<CriticalSectionRawMutex, VibrationCommand> = Signal::new();
