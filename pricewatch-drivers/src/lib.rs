//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in pricewatch-core for the monitor's peripherals:
//!
//! - HD44780 16x2 character LCD (4-bit GPIO mode)
//! - Bi-color LED and buzzer on GPIO pins
//! - Edge-detecting push button
//!
//! All drivers are generic over `embedded-hal` 1.0 pin and delay traits.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod hd44780;
pub mod indicator;

pub use button::EdgeButton;
pub use hd44780::Hd44780;
pub use indicator::{GpioBicolorLed, GpioBuzzer};
