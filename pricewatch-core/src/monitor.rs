//! Monitor control loop
//!
//! Owns all long-lived monitor state: the locked threshold, the feed
//! parser, and the alert engine. The firmware calls [`Monitor::on_byte`]
//! once per received serial byte; everything else follows from that.

use crate::alert::AlertEngine;
use crate::feed::{FeedError, FeedParser, PriceUpdate};
use crate::traits::{BicolorLed, Button, Buzzer, CharDisplay, Clock, DisplayError};

/// What feeding one byte to the monitor did
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOutcome {
    /// Mid-line; nothing rendered
    Pending,
    /// A complete line parsed and was processed
    Update(PriceUpdate),
    /// A complete line failed to parse; the idle screen was rendered
    Malformed,
}

/// The monitor state machine
///
/// The threshold is set exactly once at construction (from the selection
/// phase) and never mutated afterwards.
#[derive(Debug)]
pub struct Monitor {
    threshold: f32,
    parser: FeedParser,
    engine: AlertEngine,
}

impl Monitor {
    /// Create a monitor around the locked threshold
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold as f32,
            parser: FeedParser::new(),
            engine: AlertEngine::new(),
        }
    }

    /// The locked threshold in dollars
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Consume one serial byte
    ///
    /// Mid-line bytes return without touching the panel. A completed line
    /// either runs the alert engine or, if malformed, renders the idle
    /// screen with all indicators forced off. Malformed lines are
    /// discarded, never re-parsed.
    pub fn on_byte<D, L, B, BTN, C>(
        &mut self,
        byte: u8,
        display: &mut D,
        led: &mut L,
        buzzer: &mut B,
        button: &mut BTN,
        clock: &mut C,
    ) -> Result<ByteOutcome, DisplayError>
    where
        D: CharDisplay,
        L: BicolorLed,
        B: Buzzer,
        BTN: Button,
        C: Clock,
    {
        match self.parser.feed(byte) {
            Ok(None) => Ok(ByteOutcome::Pending),
            Ok(Some(update)) => {
                self.engine
                    .process(update, self.threshold, display, led, buzzer, button, clock)?;
                Ok(ByteOutcome::Update(update))
            }
            Err(FeedError::Malformed) => {
                self.engine.render_idle(display, led, buzzer)?;
                Ok(ByteOutcome::Malformed)
            }
        }
    }
}
