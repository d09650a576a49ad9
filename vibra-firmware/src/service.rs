//! Vibration service that hands requests to the vibrator task

use defmt::*;

use vibra_core::{Intervals, MAX_PATTERN_LEN};
use vibra_hal::VibrationService;

use crate::channels::{VibrationCommand, VIBRATION_CMD};

/// Forwards every call to [`VIBRATION_CMD`]
///
/// Calls return immediately; the vibrator task picks the command up on
/// its next tick.
pub struct SignalService;

impl VibrationService for SignalService {
    fn vibrate(&mut self, duration_ms: u32) {
        trace!("Vibrate {} ms", duration_ms);
        VIBRATION_CMD.signal(VibrationCommand::Buzz(duration_ms));
    }

    fn vibrate_by_pattern(&mut self, intervals: &[u32], repeat_index: i32) {
        let len = intervals.len().min(MAX_PATTERN_LEN);
        if len < intervals.len() {
            warn!(
                "Pattern truncated from {} to {} intervals",
                intervals.len(),
                len
            );
        }

        let mut stored = Intervals::new();
        // Cannot fail: len is bounded by capacity
        let _ = stored.extend_from_slice(&intervals[..len]);

        trace!("Pattern {} repeat={}", stored.as_slice(), repeat_index);
        VIBRATION_CMD.signal(VibrationCommand::Pattern {
            intervals: stored,
            repeat_index,
        });
    }

    fn cancel(&mut self) {
        trace!("Cancel");
        VIBRATION_CMD.signal(VibrationCommand::Cancel);
    }
}
