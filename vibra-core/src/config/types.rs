//! Configuration type definitions

use crate::request::{Intervals, DEFAULT_VIBRATION_MS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest single buzz a driver will honour (ms)
pub const DEFAULT_MAX_DURATION_MS: u32 = 10_000;

/// Pattern played by the demo: 400 ms buzz, 500 ms pause, 800 ms buzz
pub const DEMO_PATTERN: [u32; 4] = [0, 400, 500, 800];

/// Vibration configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VibrationConfig {
    /// Buzz length when no pattern is given (ms)
    pub default_duration_ms: u32,
    /// Upper bound for a single buzz, enforced by drivers (ms)
    pub max_duration_ms: u32,
    /// Pattern shown and played by the demo screen
    pub demo_pattern: Intervals,
}

impl VibrationConfig {
    /// Create the stock configuration
    pub fn new() -> Self {
        Self {
            default_duration_ms: DEFAULT_VIBRATION_MS,
            max_duration_ms: DEFAULT_MAX_DURATION_MS,
            // DEMO_PATTERN is far below MAX_PATTERN_LEN
            demo_pattern: DEMO_PATTERN.iter().copied().collect(),
        }
    }

    /// Check that the settings are consistent with each other
    pub fn is_valid(&self) -> bool {
        self.max_duration_ms > 0 && self.default_duration_ms <= self.max_duration_ms
    }
}

impl Default for VibrationConfig {
    fn default() -> Self {
        Self::new()
    }
}
