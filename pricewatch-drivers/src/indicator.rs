//! GPIO indicator outputs
//!
//! Bi-color LED (common cathode, one pin per channel) and a buzzer that
//! can be wired active-high (direct drive) or active-low (via PNP/SSR).

use embedded_hal::digital::OutputPin;

use pricewatch_core::traits::{BicolorLed, Buzzer};

/// Bi-color LED on two push-pull pins
pub struct GpioBicolorLed<R, G> {
    red: R,
    green: G,
}

impl<R: OutputPin, G: OutputPin> GpioBicolorLed<R, G> {
    /// Create the LED driver with both channels off
    pub fn new(red: R, green: G) -> Self {
        let mut led = Self { red, green };
        led.set(false, false);
        led
    }
}

impl<R: OutputPin, G: OutputPin> BicolorLed for GpioBicolorLed<R, G> {
    fn set(&mut self, red: bool, green: bool) {
        let _ = self.red.set_state(red.into());
        let _ = self.green.set_state(green.into());
    }
}

/// GPIO buzzer output
///
/// Controls a buzzer via a GPIO pin. The pin can be configured as
/// active-high (default) or active-low.
pub struct GpioBuzzer<P> {
    pin: P,
    /// If true, buzzer ON = pin LOW
    inverted: bool,
    /// Current logical state (true = sounding)
    on: bool,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Create a new buzzer output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the buzzer sounds when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut buzzer = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure the buzzer starts silent
        buzzer.set_on(false);
        buzzer
    }

    /// Create a buzzer with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a buzzer with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> Buzzer for GpioBuzzer<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        let _ = self.pin.set_state((on != self.inverted).into());
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
