//! Minimal TOML reader for vibration settings
//!
//! Only the subset needed here is understood:
//!
//! ```toml
//! [vibration]
//! default_ms = 400       # buzz length for vibrate()
//! max_ms = 10000         # driver clamp for a single buzz
//! pattern = [0, 400, 500, 800]
//! ```
//!
//! Other sections and unknown keys are skipped so the same file can carry
//! board settings. Multi-line arrays, strings and inline tables are not
//! supported inside `[vibration]`.

use crate::error::InvalidArgument;
use crate::request::PatternArg;

use super::types::VibrationConfig;

/// Section holding the vibration settings
pub const SECTION: &str = "vibration";

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Malformed section header
    InvalidSection,
    /// Line is not `key = value`, or a value has the wrong type
    InvalidValue,
    /// `pattern` holds a malformed sequence
    InvalidPattern(InvalidArgument),
    /// Values parse but contradict each other (default above max)
    Inconsistent,
}

/// Parse the `[vibration]` section into a [`VibrationConfig`]
///
/// Keys missing from the file keep their default values.
pub fn parse_config(input: &str) -> Result<VibrationConfig, ParseError> {
    let mut config = VibrationConfig::default();
    let mut in_section = false;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(ParseError::InvalidSection)?;
            in_section = name == SECTION;
            continue;
        }

        if !in_section {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidValue)?;
        apply_key(&mut config, key.trim(), value.trim())?;
    }

    if !config.is_valid() {
        return Err(ParseError::Inconsistent);
    }

    Ok(config)
}

fn apply_key(config: &mut VibrationConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "default_ms" => config.default_duration_ms = parse_duration(value)?,
        "max_ms" => config.max_duration_ms = parse_duration(value)?,
        "pattern" => {
            config.demo_pattern = match PatternArg::parse(value) {
                Some(PatternArg::Pattern(intervals)) => intervals,
                Some(PatternArg::Invalid(reason)) => return Err(ParseError::InvalidPattern(reason)),
                Some(PatternArg::Duration(_)) | None => return Err(ParseError::InvalidValue),
            }
        }
        _ => {} // Unknown keys are ignored
    }
    Ok(())
}

fn parse_duration(value: &str) -> Result<u32, ParseError> {
    match PatternArg::parse(value) {
        Some(PatternArg::Duration(ms)) => Ok(ms),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}
