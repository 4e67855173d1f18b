//! HD44780 character LCD driver
//!
//! Drives a 16x2 panel in 4-bit mode over six GPIO lines (RS, E, D4-D7).
//! Write-only: RW is tied to ground, so instruction timing uses
//! worst-case delays instead of polling the busy flag.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use pricewatch_core::config::{DISPLAY_COLS, DISPLAY_ROWS};
use pricewatch_core::traits::{CharDisplay, DisplayError};

/// HD44780 command set
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_ON: u8 = 0x0C;
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// DDRAM address of the start of each row
const ROW_OFFSETS: [u8; DISPLAY_ROWS as usize] = [0x00, 0x40];

/// HD44780 16x2 panel in 4-bit mode
pub struct Hd44780<RS, EN, D4, D5, D6, D7, DLY> {
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: DLY,
}

impl<RS, EN, D4, D5, D6, D7, DLY> Hd44780<RS, EN, D4, D5, D6, D7, DLY>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DLY: DelayNs,
{
    /// Create the driver; call [`init`](Self::init) before first use
    #[allow(clippy::too_many_arguments)]
    pub fn new(rs: RS, en: EN, d4: D4, d5: D5, d6: D6, d7: D7, delay: DLY) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        }
    }

    /// Power-on initialization
    ///
    /// The 0x33/0x32 dance forces the controller into 4-bit mode from any
    /// of the three interface states it can wake up in, then configures
    /// 2-line mode, display on, left-to-right entry, and clears.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Controller needs time after VCC rise before accepting commands
        self.delay.delay_ms(40);
        self.command(0x33)?;
        self.command(0x32)?;
        self.command(cmd::FUNCTION_4BIT_2LINE)?;
        self.command(cmd::DISPLAY_ON)?;
        self.command(cmd::ENTRY_MODE_INCREMENT)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Send an instruction byte
    fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.rs.set_low().map_err(|_| DisplayError::Bus)?;
        self.write_byte(byte)
    }

    /// Send a character byte
    fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.rs.set_high().map_err(|_| DisplayError::Bus)?;
        self.write_byte(byte)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)?;
        // Worst-case instruction time without busy-flag polling
        self.delay.delay_us(50);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        set_level(&mut self.d4, nibble & 0x01 != 0)?;
        set_level(&mut self.d5, nibble & 0x02 != 0)?;
        set_level(&mut self.d6, nibble & 0x04 != 0)?;
        set_level(&mut self.d7, nibble & 0x08 != 0)?;
        self.pulse_enable()
    }

    /// Latch the data lines with an E pulse
    fn pulse_enable(&mut self) -> Result<(), DisplayError> {
        self.en.set_high().map_err(|_| DisplayError::Bus)?;
        self.delay.delay_us(1);
        self.en.set_low().map_err(|_| DisplayError::Bus)?;
        self.delay.delay_us(1);
        Ok(())
    }
}

fn set_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), DisplayError> {
    pin.set_state(high.into()).map_err(|_| DisplayError::Bus)
}

impl<RS, EN, D4, D5, D6, D7, DLY> CharDisplay for Hd44780<RS, EN, D4, D5, D6, D7, DLY>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DLY: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR)?;
        // Clear needs far more than the standard instruction time
        self.delay.delay_ms(2);
        Ok(())
    }

    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row >= DISPLAY_ROWS || col >= DISPLAY_COLS {
            return Err(DisplayError::OutOfBounds);
        }
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))?;
        for byte in text.bytes().take((DISPLAY_COLS - col) as usize) {
            self.write_data(byte)?;
        }
        Ok(())
    }
}
