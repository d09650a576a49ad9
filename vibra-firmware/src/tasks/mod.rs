//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod demo;
pub mod vibrator;

pub use button::button_task;
pub use demo::demo_task;
pub use vibrator::vibrator_task;
