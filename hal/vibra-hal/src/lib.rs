//! Vibra Hardware Abstraction Layer
//!
//! This crate defines the traits that sit between the vibration API and
//! whatever actually moves the motor. A phone OS service, a GPIO-driven
//! eccentric rotating mass motor, or a test double can all sit behind
//! the same interface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (vibra-display demo, etc.) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vibra-core (VibrationController)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vibra-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ vibra-drivers │       │ host platform │
//! │ (GPIO motor)  │       │   service     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`vibration::VibrationService`] - Platform vibration primitives
//! - [`gpio::MotorOutput`] - On/off motor drive line

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod vibration;

// Re-export key traits at crate root for convenience
pub use gpio::MotorOutput;
pub use vibration::{VibrationService, NO_REPEAT};
