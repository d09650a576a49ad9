//! Vibrator task
//!
//! Owns the motor driver and advances it on a 1 ms ticker while anything
//! is playing. When idle it sleeps until the next command arrives.

use defmt::*;
use embassy_time::{Duration, Ticker};

use vibra_drivers::{GpioVibrator, VibratorState};
use vibra_hal::VibrationService;

use crate::channels::{VibrationCommand, VIBRATION_CMD};
use crate::motor::RpMotorPin;

/// Playback resolution in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1;

#[embassy_executor::task]
pub async fn vibrator_task(mut vibrator: GpioVibrator<RpMotorPin>) {
    info!("Vibrator task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let mut last_state = vibrator.state();

    loop {
        if vibrator.is_active() {
            if let Some(cmd) = VIBRATION_CMD.try_take() {
                apply(&mut vibrator, cmd);
            }
            ticker.next().await;
            vibrator.update_with_delta(TICK_INTERVAL_MS);
        } else {
            let cmd = VIBRATION_CMD.wait().await;
            apply(&mut vibrator, cmd);
            ticker.reset();
        }

        let state = vibrator.state();
        if state != last_state {
            trace!("Vibrator {:?} -> {:?}", last_state, state);
            if state == VibratorState::Idle {
                debug!("Vibration finished");
            }
            last_state = state;
        }
    }
}

fn apply(vibrator: &mut GpioVibrator<RpMotorPin>, cmd: VibrationCommand) {
    match cmd {
        VibrationCommand::Buzz(ms) => {
            debug!("Buzz {} ms", ms);
            vibrator.vibrate(ms);
        }
        VibrationCommand::Pattern {
            intervals,
            repeat_index,
        } => {
            debug!(
                "Pattern of {} intervals, repeat={}",
                intervals.len(),
                repeat_index
            );
            vibrator.vibrate_by_pattern(&intervals, repeat_index);
        }
        VibrationCommand::Cancel => {
            debug!("Cancel");
            vibrator.cancel();
        }
    }
}
