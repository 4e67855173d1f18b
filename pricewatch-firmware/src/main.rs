//! Pricewatch - BTC price alert firmware
//!
//! RP2040 firmware that watches a UART price feed and drives a 16x2
//! character LCD, a bi-color LED, and a buzzer against an operator-set
//! price threshold.
//!
//! The whole system is a single blocking control flow, matching the
//! polled, single-writer design of the core: the boot-time threshold
//! selector runs to completion, then the main loop reads one serial byte
//! at a time and hands it to the monitor.
//!
//! Wiring (Pico pin numbers):
//! - LCD (HD44780, 4-bit, RW grounded): RS=GP2, E=GP3, D4-D7=GP4-GP7
//! - Bi-color LED (common cathode): red=GP10, green=GP11
//! - Buzzer (active high): GP12
//! - Push button to ground (internal pull-up): GP16
//! - Feed UART: peer TX -> GP9 (UART1 RX), 115200 8N1

#![no_std]
#![no_main]

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::{Config as UartConfig, UartRx};
use embassy_time::{block_for, Delay, Duration};
use {defmt_rtt as _, panic_probe as _};

use pricewatch_core::config::THRESHOLD_MENU;
use pricewatch_core::monitor::{ByteOutcome, Monitor};
use pricewatch_core::threshold::ThresholdSelector;
use pricewatch_core::traits::Clock;
use pricewatch_drivers::{EdgeButton, GpioBicolorLed, GpioBuzzer, Hd44780};

/// Millisecond clock over the embassy time driver
struct BoardClock;

impl Clock for BoardClock {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("pricewatch starting");

    let p = embassy_rp::init(Default::default());

    // 16x2 LCD in 4-bit mode: RS, E, D4-D7
    let mut lcd = Hd44780::new(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Delay,
    );
    if let Err(e) = lcd.init() {
        warn!("lcd init failed: {}", e);
    }

    // Indicators: bi-color LED and buzzer start dark and silent
    let mut led = GpioBicolorLed::new(
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
    );
    let mut buzzer = GpioBuzzer::new_active_high(Output::new(p.PIN_12, Level::Low));

    // Push button to ground, internal pull-up
    let mut button = EdgeButton::new(Input::new(p.PIN_16, Pull::Up));

    let mut clock = BoardClock;

    // Feed UART: receive only, default 115200 8N1
    let mut rx = UartRx::new_blocking(p.UART1, p.PIN_9, UartConfig::default());
    info!("peripherals initialized");

    // Threshold selection phase: blocks until the operator locks a value
    let threshold = ThresholdSelector::new()
        .run(&mut lcd, &mut button, &mut clock)
        .unwrap_or_else(|e| {
            warn!("selector display error: {}, using default", e);
            THRESHOLD_MENU[0]
        });
    info!("threshold locked: ${}", threshold);

    let mut monitor = Monitor::new(threshold);
    let mut byte = [0u8; 1];

    loop {
        match rx.blocking_read(&mut byte) {
            Ok(()) => {
                match monitor.on_byte(
                    byte[0],
                    &mut lcd,
                    &mut led,
                    &mut buzzer,
                    &mut button,
                    &mut clock,
                ) {
                    Ok(ByteOutcome::Pending) => {}
                    Ok(ByteOutcome::Update(update)) => {
                        debug!(
                            "update: price={} change={}",
                            update.price, update.change_pct
                        );
                    }
                    Ok(ByteOutcome::Malformed) => {
                        warn!("malformed feed line, showing idle screen");
                    }
                    Err(e) => warn!("display error: {}", e),
                }
            }
            // Framing/overrun noise on the feed line; drop and resync on
            // the next terminator
            Err(_) => {}
        }
    }
}
