//! Boot-time threshold selection
//!
//! Runs once before the main loop: the operator cycles a fixed menu with
//! the push button; every press re-arms the full selection window, and
//! silence locks the current value. An operator who never touches the
//! button simply locks the first menu entry.

use core::fmt::Write;

use crate::alert::Row;
use crate::config::{
    CONFIRM_HOLD_MS, PRESS_DEBOUNCE_MS, SELECT_TICK_MS, SELECT_WINDOW_MS, THRESHOLD_MENU,
};
use crate::traits::{Button, CharDisplay, Clock, DisplayError};

/// Selection-phase state: menu index plus time since the last press
///
/// Consumed by [`run`](Self::run) to produce the locked threshold; the
/// selector has no life after the selection phase.
#[derive(Debug, Clone, Default)]
pub struct ThresholdSelector {
    index: usize,
    elapsed_ms: u32,
}

impl ThresholdSelector {
    /// Start at the first menu entry with a fresh window
    pub fn new() -> Self {
        Self {
            index: 0,
            elapsed_ms: 0,
        }
    }

    /// Currently selected menu value
    pub fn value(&self) -> u32 {
        THRESHOLD_MENU[self.index]
    }

    /// Cycle to the next menu entry, wrapping at the end
    pub fn advance(&mut self) -> u32 {
        self.index = (self.index + 1) % THRESHOLD_MENU.len();
        self.value()
    }

    /// Run the selection phase to completion and lock a threshold
    ///
    /// Blocks for at least the selection window plus the confirmation
    /// dwell; longer if the operator keeps pressing.
    pub fn run<D, BTN, C>(
        mut self,
        display: &mut D,
        button: &mut BTN,
        clock: &mut C,
    ) -> Result<u32, DisplayError>
    where
        D: CharDisplay,
        BTN: Button,
        C: Clock,
    {
        display.clear()?;
        display.text(0, 0, "Set min val:")?;
        self.draw_value(display)?;

        while self.elapsed_ms < SELECT_WINDOW_MS {
            if button.was_pressed() {
                self.advance();
                self.draw_value(display)?;
                // Re-arm: a press grants the operator the full window again
                self.elapsed_ms = 0;
                clock.delay_ms(PRESS_DEBOUNCE_MS);
            }
            clock.delay_ms(SELECT_TICK_MS);
            self.elapsed_ms += SELECT_TICK_MS;
        }

        let locked = self.value();
        display.clear()?;
        display.text(0, 0, "Threshold Saved")?;
        clock.delay_ms(CONFIRM_HOLD_MS);
        display.clear()?;
        Ok(locked)
    }

    /// Left-justified 7-wide value field so redraws fully overwrite the
    /// previous digits
    fn draw_value<D: CharDisplay>(&self, display: &mut D) -> Result<(), DisplayError> {
        let mut row = Row::new();
        let _ = write!(row, "${:<7}", self.value());
        display.text(1, 0, &row)
    }
}
