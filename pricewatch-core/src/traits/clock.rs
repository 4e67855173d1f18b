//! Blocking timebase trait

/// Trait for the board's millisecond timebase
///
/// All pacing in the monitor is built from blocking delays; elapsed-time
/// accumulation is done by callers in fixed ticks. Injecting the clock
/// lets tests substitute a fake instead of sleeping.
pub trait Clock {
    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}
