//! Vibration controller
//!
//! Validates requests and forwards them to the platform vibration
//! service. The controller keeps no playback state of its own: whether
//! the motor is idle or buzzing is known only to the service.

use vibra_hal::{VibrationService, NO_REPEAT};

use crate::config::VibrationConfig;
use crate::error::{InvalidArgument, VibrationError};
use crate::request::{PatternArg, VibrationRequest, DEFAULT_VIBRATION_MS, MAX_PATTERN_LEN};

/// Front door for application code that wants the device to vibrate
///
/// ```ignore
/// let mut vibration = VibrationController::new(service);
/// vibration.vibrate_default();                      // 400 ms
/// vibration.vibrate_with_pattern(&[0, 400, 500, 800], true)?;
/// vibration.cancel();
/// ```
pub struct VibrationController<S> {
    service: S,
    default_duration_ms: u32,
}

impl<S: VibrationService> VibrationController<S> {
    /// Create a controller with the stock 400 ms default buzz
    pub fn new(service: S) -> Self {
        Self {
            service,
            default_duration_ms: DEFAULT_VIBRATION_MS,
        }
    }

    /// Create a controller using the configured default buzz length
    pub fn with_config(service: S, config: &VibrationConfig) -> Self {
        Self {
            service,
            default_duration_ms: config.default_duration_ms,
        }
    }

    /// Vibrate according to a loosely-typed argument
    ///
    /// - `None`: buzz for the default duration
    /// - a duration: buzz for that long, `repeat` is ignored
    /// - a pattern: play it once, or loop from the start when `repeat` is set
    ///
    /// An invalid argument fails before anything reaches the service.
    pub fn vibrate(
        &mut self,
        pattern: Option<PatternArg>,
        repeat: bool,
    ) -> Result<(), VibrationError> {
        let request = VibrationRequest::from_arg(pattern, repeat, self.default_duration_ms)?;
        self.dispatch(&request);
        Ok(())
    }

    /// Buzz for the default duration
    pub fn vibrate_default(&mut self) {
        self.service.vibrate(self.default_duration_ms);
    }

    /// Buzz for `duration_ms` milliseconds
    pub fn vibrate_for(&mut self, duration_ms: u32) {
        self.service.vibrate(duration_ms);
    }

    /// Play a pause/buzz pattern, looping from index 0 when `repeat` is set
    ///
    /// Patterns longer than [`MAX_PATTERN_LEN`] are rejected before
    /// anything reaches the service.
    pub fn vibrate_with_pattern(
        &mut self,
        intervals: &[u32],
        repeat: bool,
    ) -> Result<(), VibrationError> {
        if intervals.len() > MAX_PATTERN_LEN {
            return Err(InvalidArgument::PatternTooLong.into());
        }
        self.forward_pattern(intervals, repeat);
        Ok(())
    }

    /// Forward an already-validated request
    pub fn dispatch(&mut self, request: &VibrationRequest) {
        match request {
            VibrationRequest::Duration(ms) => self.vibrate_for(*ms),
            // Stored intervals are bounded by MAX_PATTERN_LEN
            VibrationRequest::Pattern { intervals, repeat } => {
                self.forward_pattern(intervals, *repeat)
            }
        }
    }

    fn forward_pattern(&mut self, intervals: &[u32], repeat: bool) {
        let repeat_index = if repeat { 0 } else { NO_REPEAT };
        self.service.vibrate_by_pattern(intervals, repeat_index);
    }

    /// Stop any vibration in progress
    ///
    /// Always forwarded, even if nothing is playing.
    pub fn cancel(&mut self) {
        self.service.cancel();
    }

    /// Default buzz length in ms
    pub fn default_duration_ms(&self) -> u32 {
        self.default_duration_ms
    }

    /// Get the underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Get the underlying service mutably
    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    /// Consume the controller and return the service
    pub fn into_inner(self) -> S {
        self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Intervals;
    use heapless::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Vibrate(u32),
        Pattern(Intervals, i32),
        Cancel,
    }

    /// Records every call forwarded by the controller
    #[derive(Default)]
    struct RecordingService {
        calls: Vec<Call, 16>,
    }

    impl VibrationService for RecordingService {
        fn vibrate(&mut self, duration_ms: u32) {
            self.calls.push(Call::Vibrate(duration_ms)).unwrap();
        }

        fn vibrate_by_pattern(&mut self, intervals: &[u32], repeat_index: i32) {
            let intervals = Intervals::from_slice(intervals).unwrap();
            self.calls.push(Call::Pattern(intervals, repeat_index)).unwrap();
        }

        fn cancel(&mut self) {
            self.calls.push(Call::Cancel).unwrap();
        }
    }

    const DEMO_PATTERN: [u32; 4] = [0, 400, 500, 800];

    fn controller() -> VibrationController<RecordingService> {
        VibrationController::new(RecordingService::default())
    }

    fn demo_pattern() -> Intervals {
        Intervals::from_slice(&DEMO_PATTERN).unwrap()
    }

    #[test]
    fn test_vibrate_without_pattern_uses_default() {
        let mut vibration = controller();
        vibration.vibrate(None, false).unwrap();
        assert_eq!(vibration.service().calls.as_slice(), &[Call::Vibrate(400)]);
    }

    #[test]
    fn test_vibrate_default() {
        let mut vibration = controller();
        vibration.vibrate_default();
        assert_eq!(vibration.service().calls.as_slice(), &[Call::Vibrate(400)]);
    }

    #[test]
    fn test_vibrate_duration() {
        let mut vibration = controller();
        vibration.vibrate(Some(1000u32.into()), false).unwrap();
        vibration.vibrate_for(250);
        assert_eq!(
            vibration.service().calls.as_slice(),
            &[Call::Vibrate(1000), Call::Vibrate(250)]
        );
    }

    #[test]
    fn test_vibrate_duration_ignores_repeat() {
        let mut vibration = controller();
        vibration.vibrate(Some(1000u32.into()), true).unwrap();
        assert_eq!(vibration.service().calls.as_slice(), &[Call::Vibrate(1000)]);
    }

    #[test]
    fn test_vibrate_pattern_once() {
        let mut vibration = controller();
        vibration
            .vibrate(Some(PatternArg::Pattern(demo_pattern())), false)
            .unwrap();
        assert_eq!(
            vibration.service().calls.as_slice(),
            &[Call::Pattern(demo_pattern(), -1)]
        );
    }

    #[test]
    fn test_vibrate_pattern_repeat() {
        let mut vibration = controller();
        vibration
            .vibrate(Some(PatternArg::Pattern(demo_pattern())), true)
            .unwrap();
        vibration.vibrate_with_pattern(&DEMO_PATTERN, true).unwrap();
        assert_eq!(
            vibration.service().calls.as_slice(),
            &[
                Call::Pattern(demo_pattern(), 0),
                Call::Pattern(demo_pattern(), 0)
            ]
        );
    }

    #[test]
    fn test_vibrate_empty_pattern_is_forwarded() {
        let mut vibration = controller();
        vibration.vibrate(PatternArg::parse("[]"), false).unwrap();
        assert_eq!(
            vibration.service().calls.as_slice(),
            &[Call::Pattern(Intervals::new(), -1)]
        );
    }

    #[test]
    fn test_vibrate_invalid_argument_dispatches_nothing() {
        let mut vibration = controller();
        let result = vibration.vibrate(PatternArg::parse("abc"), false);
        assert_eq!(
            result,
            Err(VibrationError::InvalidArgument(
                InvalidArgument::NotNumberOrSequence
            ))
        );
        assert!(vibration.service().calls.is_empty());
    }

    #[test]
    fn test_vibrate_parsed_pattern() {
        let mut vibration = controller();
        vibration
            .vibrate(PatternArg::parse("[0, 400, 500, 800]"), true)
            .unwrap();
        assert_eq!(
            vibration.service().calls.as_slice(),
            &[Call::Pattern(demo_pattern(), 0)]
        );
    }

    #[test]
    fn test_vibrate_with_pattern_rejects_too_long() {
        let mut vibration = controller();
        let too_long = [1u32; MAX_PATTERN_LEN + 1];

        let result = vibration.vibrate_with_pattern(&too_long, false);
        assert_eq!(
            result,
            Err(VibrationError::InvalidArgument(
                InvalidArgument::PatternTooLong
            ))
        );
        assert!(vibration.service().calls.is_empty());

        vibration
            .vibrate_with_pattern(&too_long[..MAX_PATTERN_LEN], false)
            .unwrap();
        assert_eq!(vibration.service().calls.len(), 1);
    }

    #[test]
    fn test_cancel_always_dispatches() {
        let mut vibration = controller();
        vibration.cancel();
        vibration.cancel();
        assert_eq!(
            vibration.service().calls.as_slice(),
            &[Call::Cancel, Call::Cancel]
        );
    }

    #[test]
    fn test_new_request_does_not_cancel_previous() {
        let mut vibration = controller();
        vibration.vibrate_with_pattern(&DEMO_PATTERN, true).unwrap();
        vibration.vibrate_for(100);
        assert_eq!(
            vibration.service().calls.as_slice(),
            &[Call::Pattern(demo_pattern(), 0), Call::Vibrate(100)]
        );
    }

    #[test]
    fn test_configured_default() {
        let config = VibrationConfig {
            default_duration_ms: 150,
            ..VibrationConfig::default()
        };
        let mut vibration =
            VibrationController::with_config(RecordingService::default(), &config);
        vibration.vibrate(None, false).unwrap();
        assert_eq!(vibration.default_duration_ms(), 150);
        assert_eq!(vibration.into_inner().calls.as_slice(), &[Call::Vibrate(150)]);
    }

    #[test]
    fn test_borrowed_service() {
        let mut service = RecordingService::default();
        {
            let mut vibration = VibrationController::new(&mut service);
            vibration.dispatch(&VibrationRequest::Duration(50));
        }
        assert_eq!(service.calls.as_slice(), &[Call::Vibrate(50)]);
    }
}
