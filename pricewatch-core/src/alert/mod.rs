//! Alert policy and rendering
//!
//! Decides what the panel and indicators show for each parsed update.

pub mod engine;
pub mod format;

pub use engine::{led_for_change, AlertEngine, LedState};
pub use format::{price_label, ticker_line, Row};
