//! Vibration service implementations
//!
//! This crate provides concrete implementations of
//! [`vibra_hal::VibrationService`]:
//!
//! - GPIO vibrator: switches an ERM/coin motor through a [`vibra_hal::MotorOutput`]
//!   and plays pause/buzz patterns from a periodic tick

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod vibrator;

pub use vibrator::{GpioVibrator, GpioVibratorConfig, VibratorState};
