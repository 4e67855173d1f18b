//! Threshold alarm policy
//!
//! Two effective states per update: Normal (price at or above the locked
//! threshold) and Alarm (below threshold, not yet acknowledged). The
//! acknowledgement latch makes the alarm single-shot per excursion below
//! the threshold: once silenced, it cannot re-trigger until a line at or
//! above the threshold clears the latch.

use crate::config::{ALARM_FLASH_MS, CHANGE_EPSILON};
use crate::feed::PriceUpdate;
use crate::traits::{BicolorLed, Button, Buzzer, CharDisplay, Clock, DisplayError};

use super::format;

/// LED rendering for a 24h change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    /// Price moving up
    Green,
    /// Price moving down
    Red,
    /// No meaningful change
    Off,
}

/// Map a 24h change to its LED state
///
/// The dead band is `CHANGE_EPSILON` wide on each side of zero; with the
/// default of 0.0 only an exact zero reads as no change.
pub fn led_for_change(change_pct: f32) -> LedState {
    if change_pct > CHANGE_EPSILON {
        LedState::Green
    } else if change_pct < -CHANGE_EPSILON {
        LedState::Red
    } else {
        LedState::Off
    }
}

/// Alert engine
#[derive(Debug, Default)]
pub struct AlertEngine {
    /// Operator has silenced the current below-threshold excursion
    acked: bool,
    /// Flash phase for the amber composite
    flash_on: bool,
}

impl AlertEngine {
    /// Create an engine with the latch clear
    pub fn new() -> Self {
        Self {
            acked: false,
            flash_on: false,
        }
    }

    /// Whether the current excursion has been acknowledged
    pub fn is_acked(&self) -> bool {
        self.acked
    }

    /// Process one parsed update
    ///
    /// Runs the alarm sub-loop first if the price is below threshold and
    /// unacknowledged, then falls through to the normal render for the
    /// same update.
    #[allow(clippy::too_many_arguments)]
    pub fn process<D, L, B, BTN, C>(
        &mut self,
        update: PriceUpdate,
        threshold: f32,
        display: &mut D,
        led: &mut L,
        buzzer: &mut B,
        button: &mut BTN,
        clock: &mut C,
    ) -> Result<(), DisplayError>
    where
        D: CharDisplay,
        L: BicolorLed,
        B: Buzzer,
        BTN: Button,
        C: Clock,
    {
        if update.price < threshold && !self.acked {
            self.run_alarm(update.price, threshold, display, led, buzzer, button, clock)?;
        }
        if update.price >= threshold {
            self.acked = false;
        }

        display.clear()?;
        display.text(0, 0, "BTC Price:")?;
        display.text(1, 0, &format::ticker_line(update.price, update.change_pct))?;
        match led_for_change(update.change_pct) {
            LedState::Green => led.set(false, true),
            LedState::Red => led.set(true, false),
            LedState::Off => led.off(),
        }
        buzzer.set_on(false);
        Ok(())
    }

    /// Alarm sub-loop: flash, beep, and hold the panel until acknowledged
    ///
    /// Re-checks the same price and the button only; new serial data is
    /// not consumed while the alarm runs, so the only practical exit is
    /// the acknowledgement edge.
    #[allow(clippy::too_many_arguments)]
    fn run_alarm<D, L, B, BTN, C>(
        &mut self,
        price: f32,
        threshold: f32,
        display: &mut D,
        led: &mut L,
        buzzer: &mut B,
        button: &mut BTN,
        clock: &mut C,
    ) -> Result<(), DisplayError>
    where
        D: CharDisplay,
        L: BicolorLed,
        B: Buzzer,
        BTN: Button,
        C: Clock,
    {
        let price_row = format::price_label(price);
        while price < threshold && !button.was_pressed() {
            display.clear()?;
            display.text(0, 0, &price_row)?;
            display.text(1, 0, "BUY NOW")?;
            self.flash_on = !self.flash_on;
            led.set(self.flash_on, self.flash_on);
            buzzer.toggle();
            clock.delay_ms(ALARM_FLASH_MS);
        }
        self.acked = true;
        buzzer.set_on(false);
        Ok(())
    }

    /// Idle render for a malformed line: neutral text, everything off
    pub fn render_idle<D, L, B>(
        &mut self,
        display: &mut D,
        led: &mut L,
        buzzer: &mut B,
    ) -> Result<(), DisplayError>
    where
        D: CharDisplay,
        L: BicolorLed,
        B: Buzzer,
    {
        display.clear()?;
        display.text(0, 0, "Loading...")?;
        led.off();
        buzzer.set_on(false);
        Ok(())
    }
}
