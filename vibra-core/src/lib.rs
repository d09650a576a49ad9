//! Board-agnostic core logic for the vibration API
//!
//! This crate contains everything that does not depend on a particular
//! vibration backend:
//!
//! - Request model (single buzz or pause/buzz pattern)
//! - Controller that validates requests and forwards them to a
//!   [`vibra_hal::VibrationService`]
//! - Error taxonomy for malformed requests
//! - Configuration types and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod request;

pub use controller::VibrationController;
pub use error::{InvalidArgument, VibrationError};
pub use request::{
    Intervals, PatternArg, VibrationRequest, DEFAULT_VIBRATION_MS, MAX_PATTERN_LEN,
};
