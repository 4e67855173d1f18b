//! Build-time configuration constants
//!
//! The monitor has no persistent configuration; everything an operator
//! cannot change at the boot prompt is fixed here.

/// Candidate alarm thresholds in dollars, cycled by the push button at boot.
pub const THRESHOLD_MENU: [u32; 12] = [
    10_000, 20_000, 30_000, 40_000, 50_000, 60_000, 70_000, 80_000, 90_000, 100_000, 110_000,
    120_000,
];

/// Total selection window; every press re-arms the full window.
pub const SELECT_WINDOW_MS: u32 = 4_000;

/// Poll granularity during the selection window.
pub const SELECT_TICK_MS: u32 = 100;

/// Hold-off after an observed press edge.
pub const PRESS_DEBOUNCE_MS: u32 = 300;

/// How long the confirmation screen stays up before the main loop starts.
pub const CONFIRM_HOLD_MS: u32 = 3_000;

/// Alarm flash/beep half-period.
pub const ALARM_FLASH_MS: u32 = 150;

/// Dead band around a zero 24h change where both LED channels stay off.
/// Zero keeps an exact 0.00% as the only off case.
pub const CHANGE_EPSILON: f32 = 0.0;

/// Serial line buffer capacity; a line is force-flushed at capacity - 1.
pub const LINE_CAPACITY: usize = 64;

/// Character display rows.
pub const DISPLAY_ROWS: u8 = 2;

/// Character display columns.
pub const DISPLAY_COLS: u8 = 16;
