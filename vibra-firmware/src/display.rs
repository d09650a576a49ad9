//! RTT log display backend
//!
//! Mirrors the demo screen to the defmt log, one line per row.

use defmt::*;

use vibra_display::{DisplayBackend, DisplayError};

/// Display backend that prints frames over RTT
pub struct LogBackend {
    frame: u32,
}

impl LogBackend {
    pub fn new() -> Self {
        Self { frame: 0 }
    }
}

impl DisplayBackend for LogBackend {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.frame = self.frame.wrapping_add(1);
        info!("-- frame {} --", self.frame);
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        info!("{}:{} {}", row, col, text);
        Ok(())
    }

    fn highlight_span(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        debug!("Selected row {} cols {}-{}", row, start_col, end_col);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}
