//! Vibrator implementations
//!
//! - GPIO: on/off motor line driven by a millisecond tick

pub mod gpio;

pub use gpio::{GpioVibrator, GpioVibratorConfig, VibratorState};
