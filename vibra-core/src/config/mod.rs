//! Configuration types
//!
//! Board-agnostic settings for the vibration API, plus a small `no_std`
//! parser for the `[vibration]` section of a TOML file.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
