//! Bi-color status LED trait

/// Trait for a two-channel (red + green) indicator LED
///
/// Driving both channels together reads as amber; that composite is the
/// alarm flash color.
pub trait BicolorLed {
    /// Drive the two channels directly
    fn set(&mut self, red: bool, green: bool);

    /// Turn both channels off
    fn off(&mut self) {
        self.set(false, false);
    }
}
