//! Vibra - Vibration Demo Firmware
//!
//! Runs the vibration demo menu on an RP2040 board. A single push button
//! drives the menu (click = next entry, long press = select); the screen
//! is mirrored to the RTT log.
//!
//! ```text
//! button_task ──NavigationEvent──▶ demo_task ──VibrationCommand──▶ vibrator_task ──▶ GPIO 4
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use vibra_core::config::{parse_config, VibrationConfig};
use vibra_drivers::{GpioVibrator, GpioVibratorConfig};

use crate::motor::RpMotorPin;

mod channels;
mod display;
mod motor;
mod service;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit vibration.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../vibration.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Vibra firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Vibration config: default={}ms, max={}ms, pattern={}",
        config.default_duration_ms,
        config.max_duration_ms,
        config.demo_pattern.as_slice()
    );

    // Motor driver transistor (GPIO 4), off at boot
    let motor = RpMotorPin::new(Output::new(p.PIN_4, Level::Low));
    let vibrator = GpioVibrator::new(motor, GpioVibratorConfig::from(&config));

    // User button (GPIO 3, active low)
    let button = Input::new(p.PIN_3, Pull::Up);

    spawner.spawn(tasks::vibrator_task(vibrator)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::demo_task(config)).unwrap();

    info!("All tasks spawned");
}

/// Parse the embedded config, falling back to defaults
fn load_config() -> VibrationConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid embedded config ({:?}), using defaults", e);
            VibrationConfig::default()
        }
    }
}
