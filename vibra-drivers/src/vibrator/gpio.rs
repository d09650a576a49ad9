//! GPIO vibration motor driver
//!
//! This driver provides:
//! - Single buzzes with a configurable upper bound
//! - Pause/buzz pattern playback, optionally looping from a repeat index
//! - Immediate cancel
//!
//! # Usage
//!
//! The driver is advanced by calling `update()` periodically (typically every
//! millisecond). Each call switches the motor line as the pattern requires.
//!
//! ```ignore
//! let mut vibrator = GpioVibrator::new(pin, GpioVibratorConfig::default());
//! vibrator.vibrate_by_pattern(&[0, 400, 500, 800], NO_REPEAT);
//!
//! // In periodic timer:
//! vibrator.update();
//! ```
//!
//! A new request always replaces whatever was playing.

use vibra_core::config::VibrationConfig;
use vibra_core::request::{Intervals, MAX_PATTERN_LEN};
use vibra_hal::{MotorOutput, VibrationService};

/// GPIO vibrator configuration
#[derive(Debug, Clone)]
pub struct GpioVibratorConfig {
    /// Longest single buzz accepted by `vibrate()` (ms); longer requests are clamped
    pub max_duration_ms: u32,
}

impl Default for GpioVibratorConfig {
    fn default() -> Self {
        Self {
            max_duration_ms: vibra_core::config::DEFAULT_MAX_DURATION_MS,
        }
    }
}

impl From<&VibrationConfig> for GpioVibratorConfig {
    fn from(config: &VibrationConfig) -> Self {
        Self {
            max_duration_ms: config.max_duration_ms,
        }
    }
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VibratorState {
    /// Nothing playing, motor off
    #[default]
    Idle,
    /// Inside a buzz interval, motor on
    Buzzing,
    /// Inside a pause interval, motor off
    Pausing,
}

/// Vibration service that drives a motor line from a periodic tick
pub struct GpioVibrator<P> {
    pin: P,
    config: GpioVibratorConfig,
    /// Pattern being played (single buzzes are stored as `[0, ms]`)
    intervals: Intervals,
    /// Index to restart from after the last interval
    repeat_index: Option<usize>,
    /// Current interval index
    index: usize,
    /// Time left in the current interval (ms)
    remaining_ms: u32,
    state: VibratorState,
}

impl<P: MotorOutput> GpioVibrator<P> {
    /// Create a new vibrator; the motor is switched off immediately
    pub fn new(mut pin: P, config: GpioVibratorConfig) -> Self {
        pin.set_off();
        Self {
            pin,
            config,
            intervals: Intervals::new(),
            repeat_index: None,
            index: 0,
            remaining_ms: 0,
            state: VibratorState::Idle,
        }
    }

    /// Get the current playback state
    pub fn state(&self) -> VibratorState {
        self.state
    }

    /// Check if a buzz or pattern is in progress
    pub fn is_active(&self) -> bool {
        self.state != VibratorState::Idle
    }

    /// Get the configuration
    pub fn config(&self) -> &GpioVibratorConfig {
        &self.config
    }

    /// Get the motor line
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Index of the interval being played
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Time left in the current interval (ms)
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Advance playback by `delta_ms`
    ///
    /// Returns the state after the update.
    pub fn update_with_delta(&mut self, delta_ms: u32) -> VibratorState {
        let mut delta = delta_ms;

        while self.state != VibratorState::Idle && delta > 0 {
            if delta < self.remaining_ms {
                self.remaining_ms -= delta;
                break;
            }
            delta -= self.remaining_ms;
            self.remaining_ms = 0;
            self.enter_interval(self.index + 1);
        }

        self.state
    }

    /// Advance playback by one millisecond
    pub fn update(&mut self) -> VibratorState {
        self.update_with_delta(1)
    }

    /// Load a pattern and start at its first non-empty interval
    fn start(&mut self, intervals: &[u32], repeat_index: i32) {
        let len = intervals.len().min(MAX_PATTERN_LEN);
        self.intervals.clear();
        // Cannot fail: len is bounded by capacity
        let _ = self.intervals.extend_from_slice(&intervals[..len]);

        // Out-of-range indices and loops with no duration play once
        self.repeat_index = usize::try_from(repeat_index)
            .ok()
            .filter(|&start| start < len)
            .filter(|&start| self.intervals[start..].iter().any(|&ms| ms > 0));

        self.enter_interval(0);
    }

    /// Move to `index`, skipping zero-length intervals and wrapping on repeat
    fn enter_interval(&mut self, mut index: usize) {
        loop {
            if index >= self.intervals.len() {
                match self.repeat_index {
                    Some(start) => index = start,
                    None => {
                        self.stop();
                        return;
                    }
                }
            }

            let ms = self.intervals[index];
            if ms > 0 {
                let buzzing = index % 2 == 1;
                self.index = index;
                self.remaining_ms = ms;
                self.pin.set_state(buzzing);
                self.state = if buzzing {
                    VibratorState::Buzzing
                } else {
                    VibratorState::Pausing
                };
                return;
            }

            index += 1;
        }
    }

    fn stop(&mut self) {
        self.pin.set_off();
        self.intervals.clear();
        self.repeat_index = None;
        self.index = 0;
        self.remaining_ms = 0;
        self.state = VibratorState::Idle;
    }
}

impl<P: MotorOutput> VibrationService for GpioVibrator<P> {
    fn vibrate(&mut self, duration_ms: u32) {
        let duration_ms = duration_ms.min(self.config.max_duration_ms);
        self.start(&[0, duration_ms], vibra_hal::NO_REPEAT);
    }

    fn vibrate_by_pattern(&mut self, intervals: &[u32], repeat_index: i32) {
        self.start(intervals, repeat_index);
    }

    fn cancel(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vibra_hal::NO_REPEAT;

    /// Motor line that counts how often it was switched on
    #[derive(Default)]
    struct FakeMotor {
        on: bool,
        pulses: u32,
    }

    impl MotorOutput for FakeMotor {
        fn set_on(&mut self) {
            if !self.on {
                self.pulses += 1;
            }
            self.on = true;
        }

        fn set_off(&mut self) {
            self.on = false;
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    fn vibrator() -> GpioVibrator<FakeMotor> {
        GpioVibrator::new(FakeMotor::default(), GpioVibratorConfig::default())
    }

    /// Run until idle, returning total time and total buzz time
    fn run_to_idle(vibrator: &mut GpioVibrator<FakeMotor>, limit_ms: u32) -> (u32, u32) {
        let mut elapsed = 0;
        let mut buzzing = 0;
        while vibrator.is_active() && elapsed < limit_ms {
            if vibrator.pin().is_on() {
                buzzing += 1;
            }
            vibrator.update();
            elapsed += 1;
        }
        (elapsed, buzzing)
    }

    #[test]
    fn test_initial_state() {
        let vibrator = vibrator();
        assert_eq!(vibrator.state(), VibratorState::Idle);
        assert!(!vibrator.pin().is_on());
    }

    #[test]
    fn test_single_buzz() {
        let mut vibrator = vibrator();
        vibrator.vibrate(400);

        assert_eq!(vibrator.state(), VibratorState::Buzzing);
        assert!(vibrator.pin().is_on());

        vibrator.update_with_delta(399);
        assert_eq!(vibrator.state(), VibratorState::Buzzing);

        vibrator.update();
        assert_eq!(vibrator.state(), VibratorState::Idle);
        assert!(!vibrator.pin().is_on());
    }

    #[test]
    fn test_zero_duration_does_nothing() {
        let mut vibrator = vibrator();
        vibrator.vibrate(0);
        assert_eq!(vibrator.state(), VibratorState::Idle);
        assert_eq!(vibrator.pin().pulses, 0);
    }

    #[test]
    fn test_buzz_is_clamped() {
        let config = GpioVibratorConfig {
            max_duration_ms: 1000,
        };
        let mut vibrator = GpioVibrator::new(FakeMotor::default(), config);
        vibrator.vibrate(60_000);
        assert_eq!(vibrator.remaining_ms(), 1000);
    }

    #[test]
    fn test_pattern_once() {
        let mut vibrator = vibrator();
        vibrator.vibrate_by_pattern(&[0, 400, 500, 800], NO_REPEAT);

        // Leading zero pause is skipped
        assert_eq!(vibrator.state(), VibratorState::Buzzing);
        assert_eq!(vibrator.current_index(), 1);

        vibrator.update_with_delta(400);
        assert_eq!(vibrator.state(), VibratorState::Pausing);
        assert!(!vibrator.pin().is_on());

        vibrator.update_with_delta(500);
        assert_eq!(vibrator.state(), VibratorState::Buzzing);
        assert_eq!(vibrator.remaining_ms(), 800);

        vibrator.update_with_delta(800);
        assert_eq!(vibrator.state(), VibratorState::Idle);
        assert_eq!(vibrator.pin().pulses, 2);
    }

    #[test]
    fn test_pattern_starts_with_pause() {
        let mut vibrator = vibrator();
        vibrator.vibrate_by_pattern(&[100, 50], NO_REPEAT);
        assert_eq!(vibrator.state(), VibratorState::Pausing);
        assert!(!vibrator.pin().is_on());

        let (elapsed, buzzing) = run_to_idle(&mut vibrator, 1000);
        assert_eq!(elapsed, 150);
        assert_eq!(buzzing, 50);
    }

    #[test]
    fn test_pattern_repeat_loops_until_cancel() {
        let mut vibrator = vibrator();
        vibrator.vibrate_by_pattern(&[0, 400, 500, 800], 0);

        vibrator.update_with_delta(1700 * 3);
        assert!(vibrator.is_active());
        assert_eq!(vibrator.current_index(), 1);
        // The 800 ms buzz runs straight into the next loop's 400 ms buzz
        assert_eq!(vibrator.pin().pulses, 4);

        vibrator.cancel();
        assert_eq!(vibrator.state(), VibratorState::Idle);
        assert!(!vibrator.pin().is_on());
    }

    #[test]
    fn test_repeat_from_middle_index() {
        let mut vibrator = vibrator();
        vibrator.vibrate_by_pattern(&[0, 100, 200, 300], 2);

        vibrator.update_with_delta(100 + 200 + 300);
        // Wrapped to index 2 (pause)
        assert_eq!(vibrator.current_index(), 2);
        assert_eq!(vibrator.state(), VibratorState::Pausing);
    }

    #[test]
    fn test_out_of_range_repeat_plays_once() {
        let mut vibrator = vibrator();
        vibrator.vibrate_by_pattern(&[0, 100], 5);
        let (elapsed, _) = run_to_idle(&mut vibrator, 10_000);
        assert_eq!(elapsed, 100);
    }

    #[test]
    fn test_zero_length_loop_stops() {
        let mut vibrator = vibrator();
        vibrator.vibrate_by_pattern(&[0, 0, 0], 0);
        assert_eq!(vibrator.state(), VibratorState::Idle);

        vibrator.vibrate_by_pattern(&[0, 100, 0, 0], 2);
        let (elapsed, _) = run_to_idle(&mut vibrator, 10_000);
        assert_eq!(elapsed, 100);
    }

    #[test]
    fn test_empty_pattern_stops_motor() {
        let mut vibrator = vibrator();
        vibrator.vibrate(1000);
        vibrator.vibrate_by_pattern(&[], NO_REPEAT);
        assert_eq!(vibrator.state(), VibratorState::Idle);
        assert!(!vibrator.pin().is_on());
    }

    #[test]
    fn test_new_request_replaces_pattern() {
        let mut vibrator = vibrator();
        vibrator.vibrate_by_pattern(&[0, 400, 500, 800], 0);
        vibrator.vibrate(50);

        let (elapsed, buzzing) = run_to_idle(&mut vibrator, 10_000);
        assert_eq!(elapsed, 50);
        assert_eq!(buzzing, 50);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut vibrator = vibrator();
        vibrator.cancel();
        vibrator.cancel();
        assert_eq!(vibrator.state(), VibratorState::Idle);
    }

    #[test]
    fn test_long_pattern_is_truncated() {
        let mut vibrator = vibrator();
        let long = [1u32; MAX_PATTERN_LEN + 8];
        vibrator.vibrate_by_pattern(&long, NO_REPEAT);
        let (elapsed, _) = run_to_idle(&mut vibrator, 10_000);
        assert_eq!(elapsed, MAX_PATTERN_LEN as u32);
    }

    proptest! {
        #[test]
        fn prop_single_pass_takes_pattern_sum(
            intervals in proptest::collection::vec(0u32..50, 0..MAX_PATTERN_LEN)
        ) {
            let mut vibrator = vibrator();
            vibrator.vibrate_by_pattern(&intervals, NO_REPEAT);

            let (elapsed, buzzing) = run_to_idle(&mut vibrator, 100_000);
            let total: u32 = intervals.iter().sum();
            let buzz_total: u32 = intervals.iter().skip(1).step_by(2).sum();

            prop_assert_eq!(elapsed, total);
            prop_assert_eq!(buzzing, buzz_total);
            prop_assert!(!vibrator.pin().is_on());
        }

        #[test]
        fn prop_big_step_matches_small_steps(
            intervals in proptest::collection::vec(0u32..50, 0..MAX_PATTERN_LEN),
            step in 1u32..500,
        ) {
            let mut coarse = vibrator();
            let mut fine = vibrator();
            coarse.vibrate_by_pattern(&intervals, 0);
            fine.vibrate_by_pattern(&intervals, 0);

            coarse.update_with_delta(step);
            for _ in 0..step {
                fine.update();
            }

            prop_assert_eq!(coarse.state(), fine.state());
            prop_assert_eq!(coarse.current_index(), fine.current_index());
            prop_assert_eq!(coarse.remaining_ms(), fine.remaining_ms());
        }
    }
}
