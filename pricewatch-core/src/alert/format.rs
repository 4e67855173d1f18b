//! Fixed-width text formatting for the 16-column panel
//!
//! Prices render as whole dollars grouped into a thousands/remainder
//! pair; changes carry a forced sign and exactly two decimals.

use core::fmt::Write;

use heapless::String;

use crate::config::DISPLAY_COLS;

/// One rendered display row; content past the last column is dropped at
/// format time, matching the physical panel width.
pub type Row = String<{ DISPLAY_COLS as usize }>;

/// Split a price into whole thousands and a remainder
fn split_thousands(price: f32) -> (i32, i32) {
    let whole = price as i32;
    (whole / 1000, whole % 1000)
}

/// Format a price alone, e.g. `$8,713`
pub fn price_label(price: f32) -> Row {
    let (thousands, remainder) = split_thousands(price);
    let mut row = Row::new();
    let _ = write!(row, "${},{:03}", thousands, remainder);
    row
}

/// Format the price-and-change row, e.g. `$63,250  -1.25%`
pub fn ticker_line(price: f32, change_pct: f32) -> Row {
    let (thousands, remainder) = split_thousands(price);
    let mut row = Row::new();
    let _ = write!(row, "${},{:03}  {:+.2}%", thousands, remainder, change_pct);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label_groups_thousands() {
        assert_eq!(price_label(8713.45).as_str(), "$8,713");
        assert_eq!(price_label(63250.50).as_str(), "$63,250");
    }

    #[test]
    fn test_price_label_pads_remainder() {
        assert_eq!(price_label(63007.0).as_str(), "$63,007");
        assert_eq!(price_label(1000.0).as_str(), "$1,000");
    }

    #[test]
    fn test_ticker_line_round_trip() {
        assert_eq!(ticker_line(63250.50, -1.25).as_str(), "$63,250  -1.25%");
    }

    #[test]
    fn test_ticker_line_forces_positive_sign() {
        assert_eq!(ticker_line(8713.0, 0.75).as_str(), "$8,713  +0.75%");
    }

    #[test]
    fn test_ticker_line_zero_change() {
        assert_eq!(ticker_line(50000.0, 0.0).as_str(), "$50,000  +0.00%");
    }

    #[test]
    fn test_ticker_line_truncates_at_panel_width() {
        // 17 characters of content; the trailing % falls off the panel
        assert_eq!(ticker_line(120000.0, 10.0).as_str(), "$120,000  +10.00");
    }
}
