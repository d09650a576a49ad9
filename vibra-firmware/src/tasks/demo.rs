//! Demo task
//!
//! Feeds navigation events into the vibration demo and redraws the
//! screen after each one.

use defmt::*;

use vibra_core::config::VibrationConfig;
use vibra_core::VibrationController;
use vibra_display::{Screen, VibrationDemo};

use crate::channels::INPUT_CHANNEL;
use crate::display::LogBackend;
use crate::service::SignalService;

#[embassy_executor::task]
pub async fn demo_task(config: VibrationConfig) {
    info!("Demo task started");

    let mut controller = VibrationController::with_config(SignalService, &config);
    let mut demo = VibrationDemo::new(&config);
    let mut screen = Screen::new();
    let mut backend = LogBackend::new();

    loop {
        demo.render(&mut screen);
        if let Err(e) = screen.render_to(&mut backend) {
            warn!("Render failed: {:?}", e);
        }

        let event = INPUT_CHANNEL.receive().await;
        trace!("Input: {:?}", event);

        match demo.handle(event, &mut controller) {
            Ok(Some(action)) => debug!("Demo action: {:?}", action),
            Ok(None) => {}
            Err(e) => warn!("Vibration rejected: {}", e.message()),
        }
    }
}
