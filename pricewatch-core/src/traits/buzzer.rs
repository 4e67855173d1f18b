//! Buzzer output trait

/// Trait for a simple on/off buzzer
pub trait Buzzer {
    /// Set the buzzer state
    fn set_on(&mut self, on: bool);

    /// Check the current buzzer state
    fn is_on(&self) -> bool;

    /// Flip the buzzer state
    fn toggle(&mut self) {
        let on = !self.is_on();
        self.set_on(on);
    }
}
