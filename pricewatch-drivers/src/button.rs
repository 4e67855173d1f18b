//! Push button input
//!
//! The button shorts the line to ground, so the pin reads low while held
//! (internal pull-up). `was_pressed` reports one edge per press: the
//! high-to-low transition. Contact bounce is suppressed by the caller's
//! hold-off delay after an observed edge.

use embedded_hal::digital::InputPin;

use pricewatch_core::traits::Button;

/// Edge-detecting active-low push button
pub struct EdgeButton<P> {
    pin: P,
    last_low: bool,
}

impl<P: InputPin> EdgeButton<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_low: false,
        }
    }
}

impl<P: InputPin> Button for EdgeButton<P> {
    fn was_pressed(&mut self) -> bool {
        let low = self.pin.is_low().unwrap_or(false);
        let edge = low && !self.last_low;
        self.last_low = low;
        edge
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use std::vec::Vec;

    use super::*;

    /// Input pin replaying a fixed level sequence (true = high)
    struct LevelPin {
        levels: Vec<bool>,
        cursor: usize,
    }

    impl LevelPin {
        fn new(levels: &[bool]) -> Self {
            Self {
                levels: levels.to_vec(),
                cursor: 0,
            }
        }
    }

    impl embedded_hal::digital::ErrorType for LevelPin {
        type Error = Infallible;
    }

    impl InputPin for LevelPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            let level = self.levels.get(self.cursor).copied().unwrap_or(true);
            self.cursor += 1;
            Ok(level)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            self.is_high().map(|h| !h)
        }
    }

    #[test]
    fn test_press_edge_reported_once() {
        // Released, held for three polls, released
        let pin = LevelPin::new(&[true, false, false, false, true]);
        let mut button = EdgeButton::new(pin);

        assert!(!button.was_pressed());
        assert!(button.was_pressed());
        // Still held: no new edge
        assert!(!button.was_pressed());
        assert!(!button.was_pressed());
        assert!(!button.was_pressed());
    }

    #[test]
    fn test_each_press_yields_a_new_edge() {
        let pin = LevelPin::new(&[false, true, false]);
        let mut button = EdgeButton::new(pin);

        assert!(button.was_pressed());
        assert!(!button.was_pressed());
        assert!(button.was_pressed());
    }
}
