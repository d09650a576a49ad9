//! Platform vibration service
//!
//! The three primitives every vibration backend offers. Timing precision,
//! motor arbitration and permission handling all belong to the
//! implementation; callers only forward requests.

/// Repeat index meaning "play the pattern once"
pub const NO_REPEAT: i32 = -1;

/// Platform-provided vibration capability
///
/// Implementations decide whether a new request replaces one that is
/// still playing. None of the methods report failure: a backend that
/// cannot vibrate simply does nothing.
pub trait VibrationService {
    /// Buzz once for `duration_ms` milliseconds
    fn vibrate(&mut self, duration_ms: u32);

    /// Play an alternating pause/buzz pattern
    ///
    /// - `intervals`: durations in ms, index 0 is a pause, index 1 a buzz, ...
    /// - `repeat_index`: [`NO_REPEAT`] to play once, otherwise the index to
    ///   restart from after reaching the end
    fn vibrate_by_pattern(&mut self, intervals: &[u32], repeat_index: i32);

    /// Stop any vibration or pattern loop in progress
    fn cancel(&mut self);
}

impl<T: VibrationService + ?Sized> VibrationService for &mut T {
    fn vibrate(&mut self, duration_ms: u32) {
        (**self).vibrate(duration_ms);
    }

    fn vibrate_by_pattern(&mut self, intervals: &[u32], repeat_index: i32) {
        (**self).vibrate_by_pattern(intervals, repeat_index);
    }

    fn cancel(&mut self) {
        (**self).cancel();
    }
}
