//! Vibration demo screen
//!
//! A menu with one entry per vibration call plus a page explaining the
//! pattern format:
//!
//! ```text
//! ┌─────────────────────┐
//! │Vibration            │
//! │ Pattern help        │
//! │▌Vibrate 400ms      ▐│  <- selection
//! │ Vibrate 1s          │
//! │ Pattern once        │
//! │ Pattern loop        │
//! │ Cancel              │
//! │Buzzing 400ms        │  <- status
//! └─────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;

use vibra_core::config::VibrationConfig;
use vibra_core::{Intervals, PatternArg, VibrationController, VibrationError, VibrationRequest};
use vibra_hal::VibrationService;

use crate::input::NavigationEvent;
use crate::screen::{Screen, SCREEN_COLS, SCREEN_ROWS};

/// Row of the first menu item
const MENU_FIRST_ROW: usize = 1;

/// Row used for status messages
const STATUS_ROW: usize = SCREEN_ROWS - 1;

/// Buzz length of the "Vibrate 1s" entry
const ONE_SECOND_MS: u32 = 1000;

/// A vibration call triggered from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoAction {
    /// `vibrate()` with no argument
    VibrateDefault,
    /// `vibrate(1000)`
    VibrateOneSecond,
    /// `vibrate(pattern)`
    PatternOnce,
    /// `vibrate(pattern, true)`
    PatternLoop,
    /// `cancel()`
    Cancel,
}

impl DemoAction {
    /// Status line shown after the action ran
    pub const fn status(&self) -> &'static str {
        match self {
            DemoAction::VibrateDefault => "Buzzing (default)",
            DemoAction::VibrateOneSecond => "Buzzing 1 second",
            DemoAction::PatternOnce => "Pattern once",
            DemoAction::PatternLoop => "Looping until cancel",
            DemoAction::Cancel => "Cancelled",
        }
    }
}

/// Menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoItem {
    /// Open the pattern format page
    PatternHelp,
    /// Run a vibration call
    Action(DemoAction),
}

impl DemoItem {
    /// Menu label
    pub const fn label(&self) -> &'static str {
        match self {
            DemoItem::PatternHelp => "Pattern help",
            DemoItem::Action(DemoAction::VibrateDefault) => "Vibrate 400ms",
            DemoItem::Action(DemoAction::VibrateOneSecond) => "Vibrate 1s",
            DemoItem::Action(DemoAction::PatternOnce) => "Pattern once",
            DemoItem::Action(DemoAction::PatternLoop) => "Pattern loop",
            DemoItem::Action(DemoAction::Cancel) => "Cancel",
        }
    }
}

/// Menu entries, top to bottom
pub const DEMO_ITEMS: [DemoItem; 6] = [
    DemoItem::PatternHelp,
    DemoItem::Action(DemoAction::VibrateDefault),
    DemoItem::Action(DemoAction::VibrateOneSecond),
    DemoItem::Action(DemoAction::PatternOnce),
    DemoItem::Action(DemoAction::PatternLoop),
    DemoItem::Action(DemoAction::Cancel),
];

/// Page currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoPage {
    #[default]
    Menu,
    PatternHelp,
}

/// Vibration demo state
pub struct VibrationDemo {
    page: DemoPage,
    selected: usize,
    pattern: Intervals,
    status: &'static str,
}

impl VibrationDemo {
    /// Create the demo using the configured pattern
    pub fn new(config: &VibrationConfig) -> Self {
        Self {
            page: DemoPage::Menu,
            selected: 0,
            pattern: config.demo_pattern.clone(),
            status: "",
        }
    }

    /// Current page
    pub fn page(&self) -> DemoPage {
        self.page
    }

    /// Selected menu item
    pub fn selected(&self) -> DemoItem {
        DEMO_ITEMS[self.selected]
    }

    /// Last status message
    pub fn status(&self) -> &'static str {
        self.status
    }

    /// Pattern used by the pattern entries
    pub fn pattern(&self) -> &[u32] {
        &self.pattern
    }

    /// Handle one navigation event
    ///
    /// Returns the action that ran, if any. Errors from the controller are
    /// shown on the status line and returned.
    pub fn handle<S: VibrationService>(
        &mut self,
        event: NavigationEvent,
        controller: &mut VibrationController<S>,
    ) -> Result<Option<DemoAction>, VibrationError> {
        match (self.page, event) {
            (DemoPage::Menu, NavigationEvent::Next) => {
                self.selected = (self.selected + 1) % DEMO_ITEMS.len();
                Ok(None)
            }
            (DemoPage::Menu, NavigationEvent::Previous) => {
                self.selected = (self.selected + DEMO_ITEMS.len() - 1) % DEMO_ITEMS.len();
                Ok(None)
            }
            (DemoPage::Menu, NavigationEvent::Select) => match self.selected() {
                DemoItem::PatternHelp => {
                    self.page = DemoPage::PatternHelp;
                    Ok(None)
                }
                DemoItem::Action(action) => self.run(action, controller).map(|()| Some(action)),
            },
            (DemoPage::Menu, NavigationEvent::Back) => Ok(None),
            (DemoPage::PatternHelp, NavigationEvent::Select | NavigationEvent::Back) => {
                self.page = DemoPage::Menu;
                Ok(None)
            }
            (DemoPage::PatternHelp, _) => Ok(None),
        }
    }

    /// Run a demo action against the controller
    pub fn run<S: VibrationService>(
        &mut self,
        action: DemoAction,
        controller: &mut VibrationController<S>,
    ) -> Result<(), VibrationError> {
        let result = match action {
            DemoAction::VibrateDefault => controller.vibrate(None, false),
            DemoAction::VibrateOneSecond => {
                controller.vibrate(Some(PatternArg::Duration(ONE_SECOND_MS)), false)
            }
            DemoAction::PatternOnce => {
                controller.vibrate(Some(PatternArg::Pattern(self.pattern.clone())), false)
            }
            DemoAction::PatternLoop => {
                controller.vibrate(Some(PatternArg::Pattern(self.pattern.clone())), true)
            }
            DemoAction::Cancel => {
                controller.cancel();
                Ok(())
            }
        };

        self.status = match result {
            Ok(()) => action.status(),
            Err(e) => e.message(),
        };
        result
    }

    /// Draw the current page into the screen buffer
    pub fn render(&self, screen: &mut Screen) {
        screen.clear();
        match self.page {
            DemoPage::Menu => self.render_menu(screen),
            DemoPage::PatternHelp => self.render_help(screen),
        }
    }

    fn render_menu(&self, screen: &mut Screen) {
        screen.set_line(0, "Vibration");

        for (i, item) in DEMO_ITEMS.iter().enumerate() {
            let row = MENU_FIRST_ROW + i;
            let mut line = String::<SCREEN_COLS>::new();
            let _ = write!(line, " {}", item.label());
            screen.set_line(row, &line);

            if i == self.selected {
                screen.set_highlight(row, 0, SCREEN_COLS as u8);
            }
        }

        screen.set_line(STATUS_ROW, self.status);
    }

    fn render_help(&self, screen: &mut Screen) {
        let literal = pattern_literal(&self.pattern);

        screen.set_line(0, "Pattern format");
        screen.set_line(1, &literal);
        screen.set_line(2, "[wait,vibrate,wait..]");
        screen.set_line(3, "Even idx: pause ms");
        screen.set_line(4, "Odd idx: buzz ms");

        let once = VibrationRequest::Pattern {
            intervals: self.pattern.clone(),
            repeat: false,
        };
        if let Some(total) = once.total_duration_ms() {
            let mut line = String::<SCREEN_COLS>::new();
            let _ = write!(line, "One pass: {} ms", total);
            screen.set_line(5, &line);
        }

        screen.set_line(STATUS_ROW, "Click to go back");
    }
}

/// Format a pattern as `[a,b,c]`, ending in `..]` when it overflows a line
fn pattern_literal(pattern: &[u32]) -> String<SCREEN_COLS> {
    let mut literal = String::new();
    let _ = literal.push('[');

    for (i, ms) in pattern.iter().enumerate() {
        // ",4294967295" is the longest item
        let mut item = String::<12>::new();
        let separator = if i > 0 { "," } else { "" };
        let _ = write!(item, "{}{}", separator, ms);

        // Keep room for "]" after the last item, "..]" after any other
        let tail = if i + 1 == pattern.len() { 1 } else { 3 };
        if literal.len() + item.len() + tail > SCREEN_COLS {
            let _ = literal.push_str("..]");
            return literal;
        }
        let _ = literal.push_str(&item);
    }

    let _ = literal.push(']');
    literal
}
