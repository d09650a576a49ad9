//! Vibration request errors

/// Why a pattern argument was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidArgument {
    /// Argument is neither a duration nor a sequence of durations
    NotNumberOrSequence,
    /// A duration or interval is below zero
    NegativeInterval,
    /// A duration or interval does not fit in 32 bits
    OutOfRange,
    /// Pattern has more intervals than [`crate::MAX_PATTERN_LEN`]
    PatternTooLong,
}

/// Errors raised by the vibration controller
///
/// Raised synchronously, before anything is forwarded to the platform
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VibrationError {
    /// Malformed pattern argument
    InvalidArgument(InvalidArgument),
}

impl VibrationError {
    /// Human-readable description for logs and status lines
    pub const fn message(&self) -> &'static str {
        match self {
            VibrationError::InvalidArgument(InvalidArgument::NotNumberOrSequence) => {
                "Vibration pattern should be a number or array"
            }
            VibrationError::InvalidArgument(InvalidArgument::NegativeInterval) => {
                "Vibration intervals must not be negative"
            }
            VibrationError::InvalidArgument(InvalidArgument::OutOfRange) => {
                "Vibration interval out of range"
            }
            VibrationError::InvalidArgument(InvalidArgument::PatternTooLong) => {
                "Vibration pattern too long"
            }
        }
    }
}

impl From<InvalidArgument> for VibrationError {
    fn from(reason: InvalidArgument) -> Self {
        VibrationError::InvalidArgument(reason)
    }
}
