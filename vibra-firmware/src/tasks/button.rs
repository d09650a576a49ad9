//! Button input task
//!
//! One button drives the whole menu: a click moves to the next entry and
//! a long press selects it.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Instant, Timer};

use vibra_display::NavigationEvent;

use crate::channels::INPUT_CHANNEL;

/// Hold time that turns a click into a select (ms)
const LONG_PRESS_MS: u64 = 500;

/// Minimum press length counted as a click (ms)
const MIN_CLICK_MS: u64 = 50;

#[embassy_executor::task]
pub async fn button_task(mut btn: Input<'static>) {
    info!("Button task started");

    loop {
        btn.wait_for_falling_edge().await;
        let press_start = Instant::now();

        // Debounce
        Timer::after(Duration::from_millis(20)).await;
        if !btn.is_low() {
            continue;
        }

        // Wait for release or long press timeout
        let release = with_timeout(
            Duration::from_millis(LONG_PRESS_MS),
            btn.wait_for_rising_edge(),
        )
        .await;

        match release {
            Ok(()) => {
                if press_start.elapsed().as_millis() > MIN_CLICK_MS {
                    debug!("Button: Click");
                    INPUT_CHANNEL.send(NavigationEvent::Next).await;
                }
            }
            Err(_) => {
                debug!("Button: LongPress");
                INPUT_CHANNEL.send(NavigationEvent::Select).await;
                btn.wait_for_rising_edge().await;
            }
        }

        // Debounce after release
        Timer::after(Duration::from_millis(50)).await;
    }
}
