//! Display abstraction and demo screen for Vibra
//!
//! This crate provides:
//! - `DisplayBackend` trait for character displays (OLED, LCD, log sink)
//! - `NavigationEvent` enum for unified input handling
//! - `Screen` buffer that renders to any backend
//! - `VibrationDemo`, a menu that exercises every vibration call
//!
//! # Architecture
//!
//! The demo owns no hardware. Input arrives as [`NavigationEvent`]s, the
//! demo calls into a [`vibra_core::VibrationController`] and draws itself
//! into a [`Screen`], which the firmware flushes to whatever
//! [`DisplayBackend`] the board has.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod demo;
pub mod input;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use demo::{DemoAction, DemoItem, DemoPage, VibrationDemo, DEMO_ITEMS};
pub use input::NavigationEvent;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
