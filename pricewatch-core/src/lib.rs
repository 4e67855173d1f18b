//! Board-agnostic core logic for the Pricewatch monitor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, LED, buzzer, button, clock)
//! - Serial feed line framing and price extraction
//! - Threshold alarm policy with acknowledgement latch
//! - Boot-time threshold selection
//! - The monitor control loop tying it all together

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod alert;
pub mod config;
pub mod feed;
pub mod monitor;
pub mod threshold;
pub mod traits;

#[cfg(test)]
mod testutil;
