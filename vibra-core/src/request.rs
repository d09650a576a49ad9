//! Vibration request model
//!
//! A request is either a single buzz or a pause/buzz pattern. Patterns
//! always start with a pause:
//!
//! ```text
//! [0, 400, 500, 800]
//!  │   │    │    └─ buzz 800 ms
//!  │   │    └────── pause 500 ms
//!  │   └─────────── buzz 400 ms
//!  └─────────────── pause 0 ms
//! ```

use heapless::Vec;

use vibra_hal::NO_REPEAT;

use crate::error::{InvalidArgument, VibrationError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Buzz length used when no pattern is given (ms)
pub const DEFAULT_VIBRATION_MS: u32 = 400;

/// Maximum number of intervals in a stored pattern
pub const MAX_PATTERN_LEN: usize = 32;

/// Pattern interval storage
pub type Intervals = Vec<u32, MAX_PATTERN_LEN>;

/// A validated vibration request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VibrationRequest {
    /// Single buzz for the given number of milliseconds
    Duration(u32),
    /// Alternating pause/buzz pattern
    Pattern {
        /// Interval durations in ms, starting with a pause
        intervals: Intervals,
        /// Loop the whole pattern until cancelled
        repeat: bool,
    },
}

impl VibrationRequest {
    /// Build a pattern request from a slice of intervals
    pub fn pattern(intervals: &[u32], repeat: bool) -> Result<Self, VibrationError> {
        let intervals =
            Intervals::from_slice(intervals).map_err(|_| InvalidArgument::PatternTooLong)?;
        Ok(VibrationRequest::Pattern { intervals, repeat })
    }

    /// Resolve a loosely-typed argument into a request
    ///
    /// A missing argument becomes a buzz of `default_ms`. `repeat` only
    /// applies to patterns.
    pub fn from_arg(
        arg: Option<PatternArg>,
        repeat: bool,
        default_ms: u32,
    ) -> Result<Self, VibrationError> {
        match arg {
            None => Ok(VibrationRequest::Duration(default_ms)),
            Some(PatternArg::Duration(ms)) => Ok(VibrationRequest::Duration(ms)),
            Some(PatternArg::Pattern(intervals)) => {
                Ok(VibrationRequest::Pattern { intervals, repeat })
            }
            Some(PatternArg::Invalid(reason)) => Err(reason.into()),
        }
    }

    /// Repeat index handed to the platform service
    ///
    /// `None` for single buzzes, `Some(0)` for looping patterns and
    /// `Some(NO_REPEAT)` for patterns played once.
    pub fn repeat_index(&self) -> Option<i32> {
        match self {
            VibrationRequest::Duration(_) => None,
            VibrationRequest::Pattern { repeat: true, .. } => Some(0),
            VibrationRequest::Pattern { repeat: false, .. } => Some(NO_REPEAT),
        }
    }

    /// Total time the motor is busy for one pass, in ms
    ///
    /// Returns `None` for looping patterns, which never finish on their own.
    pub fn total_duration_ms(&self) -> Option<u32> {
        match self {
            VibrationRequest::Duration(ms) => Some(*ms),
            VibrationRequest::Pattern { repeat: true, .. } => None,
            VibrationRequest::Pattern { intervals, .. } => Some(
                intervals
                    .iter()
                    .fold(0u32, |total, &ms| total.saturating_add(ms)),
            ),
        }
    }
}

/// Loosely-typed pattern argument, as typed by a user or read from config
///
/// This is the only place where the shape of the argument is checked at
/// runtime; typed callers should build a [`VibrationRequest`] directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternArg {
    /// A single duration in ms
    Duration(u32),
    /// A sequence of pause/buzz intervals in ms
    Pattern(Intervals),
    /// Anything else
    Invalid(InvalidArgument),
}

impl PatternArg {
    /// Parse an argument from text
    ///
    /// Accepts `1000` or `[0, 400, 500, 800]` (a trailing comma is allowed
    /// inside brackets). Blank input means the argument was omitted and
    /// yields `None`. Everything else parses to [`PatternArg::Invalid`].
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let arg = if let Some(inner) = text.strip_prefix('[') {
            match inner.strip_suffix(']') {
                Some(inner) => match parse_sequence(inner) {
                    Ok(intervals) => PatternArg::Pattern(intervals),
                    Err(reason) => PatternArg::Invalid(reason),
                },
                None => PatternArg::Invalid(InvalidArgument::NotNumberOrSequence),
            }
        } else {
            match parse_interval(text) {
                Ok(ms) => PatternArg::Duration(ms),
                Err(reason) => PatternArg::Invalid(reason),
            }
        };

        Some(arg)
    }
}

impl From<u32> for PatternArg {
    fn from(ms: u32) -> Self {
        PatternArg::Duration(ms)
    }
}

impl From<Intervals> for PatternArg {
    fn from(intervals: Intervals) -> Self {
        PatternArg::Pattern(intervals)
    }
}

/// Parse the inside of `[...]`
fn parse_sequence(inner: &str) -> Result<Intervals, InvalidArgument> {
    let mut intervals = Intervals::new();

    let inner = inner.trim();
    if inner.is_empty() {
        return Ok(intervals);
    }

    // Allow a single trailing comma, TOML style
    let inner = match inner.strip_suffix(',') {
        Some(rest) if !rest.trim().is_empty() => rest,
        _ => inner,
    };

    for item in inner.split(',') {
        let ms = parse_interval(item)?;
        intervals
            .push(ms)
            .map_err(|_| InvalidArgument::PatternTooLong)?;
    }

    Ok(intervals)
}

/// Parse a single non-negative duration in ms
fn parse_interval(text: &str) -> Result<u32, InvalidArgument> {
    let text = text.trim();

    if let Some(magnitude) = text.strip_prefix('-') {
        return if is_digits(magnitude.trim_start()) {
            Err(InvalidArgument::NegativeInterval)
        } else {
            Err(InvalidArgument::NotNumberOrSequence)
        };
    }

    if !is_digits(text) {
        return Err(InvalidArgument::NotNumberOrSequence);
    }

    text.parse::<u32>().map_err(|_| InvalidArgument::OutOfRange)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
