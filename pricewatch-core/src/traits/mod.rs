//! Hardware abstraction traits
//!
//! These traits define the interface between the monitor logic and
//! hardware-specific implementations.

pub mod button;
pub mod buzzer;
pub mod clock;
pub mod display;
pub mod led;

pub use button::Button;
pub use buzzer::Buzzer;
pub use clock::Clock;
pub use display::{CharDisplay, DisplayError};
pub use led::BicolorLed;
