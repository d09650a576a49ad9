//! Sink for a rendered [`Screen`](crate::Screen)
//!
//! The demo never talks to hardware directly. It fills an 8x21 character
//! grid and hands it to whatever implements [`DisplayBackend`]: a small
//! OLED in text mode, or the firmware's RTT log mirror.

/// Failure reported by a display sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The bus or transport to the panel failed
    Communication,
    /// Row or column outside the panel
    InvalidCoordinates,
    /// `render_to` was called before the sink came up
    NotInitialized,
}

/// Row/column addressed text sink
///
/// Coordinates are in character cells. A frame is `clear`, any number of
/// `draw_text`/`highlight_span` calls, then `flush`; nothing has to be
/// visible before `flush`.
pub trait DisplayBackend {
    /// Blank every cell of the next frame
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write `text` starting at cell (`row`, `col`)
    ///
    /// Text running past the right edge may be clipped by the sink.
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Mark cells `start_col..end_col` of `row` as selected
    ///
    /// Used for the cursor bar over the active menu entry. How it looks is
    /// up to the sink (inverted pixels on a panel, a marker in a log).
    fn highlight_span(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Push the frame out
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Whether the sink can accept a frame yet
    fn is_ready(&self) -> bool;
}
