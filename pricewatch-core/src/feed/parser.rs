//! Price update extraction
//!
//! A feed line is ASCII of the exact form
//! `BTC Price: $<price>, 24h Change: <change>%`.
//! Anything else - partial lines, garbled content, invalid UTF-8,
//! unparseable numbers - is malformed.

use super::line::LineAssembler;

/// Literal label preceding the dollar-prefixed price
const PRICE_LABEL: &str = "BTC Price: $";

/// Literal separator preceding the percent-suffixed change
const CHANGE_LABEL: &str = ", 24h Change: ";

/// Errors produced by the feed parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedError {
    /// A completed line does not match the feed format
    Malformed,
}

/// A parsed (price, 24h change) pair
///
/// Produced once per complete line and consumed immediately; never
/// retained across lines.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PriceUpdate {
    /// Price in dollars
    pub price: f32,
    /// 24-hour change in percent, signed
    pub change_pct: f32,
}

/// Extract a price update from a completed line
pub fn parse_line(line: &[u8]) -> Result<PriceUpdate, FeedError> {
    let text = core::str::from_utf8(line).map_err(|_| FeedError::Malformed)?;

    let rest = text.strip_prefix(PRICE_LABEL).ok_or(FeedError::Malformed)?;
    let (price, rest) = rest.split_once(CHANGE_LABEL).ok_or(FeedError::Malformed)?;
    let change = rest.strip_suffix('%').ok_or(FeedError::Malformed)?;

    let price: f32 = price.parse().map_err(|_| FeedError::Malformed)?;
    let change_pct: f32 = change.parse().map_err(|_| FeedError::Malformed)?;

    Ok(PriceUpdate { price, change_pct })
}

/// Byte-fed feed parser
///
/// Combines line framing with field extraction. Returns `Ok(None)` while
/// a line is still assembling, `Ok(Some(update))` when a completed line
/// parses, and `Err(Malformed)` when it does not. The line buffer resets
/// after every completed line, success or not.
#[derive(Debug, Clone, Default)]
pub struct FeedParser {
    line: LineAssembler,
}

impl FeedParser {
    /// Create a new feed parser
    pub fn new() -> Self {
        Self {
            line: LineAssembler::new(),
        }
    }

    /// Feed a single byte from the serial link
    pub fn feed(&mut self, byte: u8) -> Result<Option<PriceUpdate>, FeedError> {
        match self.line.feed(byte) {
            Some(completed) => parse_line(&completed).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::LINE_CAPACITY;

    #[test]
    fn test_parse_well_formed_line() {
        let update = parse_line(b"BTC Price: $63250.50, 24h Change: -1.25%").unwrap();
        assert_eq!(update.price, 63250.50);
        assert_eq!(update.change_pct, -1.25);
    }

    #[test]
    fn test_parse_positive_change() {
        let update = parse_line(b"BTC Price: $8713.00, 24h Change: +2.40%").unwrap();
        assert_eq!(update.price, 8713.00);
        assert_eq!(update.change_pct, 2.40);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_line(b"garbage"), Err(FeedError::Malformed));
    }

    #[test]
    fn test_parse_rejects_empty_line() {
        assert_eq!(parse_line(b""), Err(FeedError::Malformed));
    }

    #[test]
    fn test_parse_rejects_missing_percent() {
        assert_eq!(
            parse_line(b"BTC Price: $63250.50, 24h Change: -1.25"),
            Err(FeedError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_truncated_line() {
        assert_eq!(
            parse_line(b"BTC Price: $63250.5"),
            Err(FeedError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_fields() {
        assert_eq!(
            parse_line(b"BTC Price: $lots, 24h Change: much%"),
            Err(FeedError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        assert_eq!(parse_line(&[0xFF, 0xFE, 0xFD]), Err(FeedError::Malformed));
    }

    #[test]
    fn test_feed_byte_at_a_time() {
        let mut parser = FeedParser::new();
        let mut result = None;
        for &b in b"BTC Price: $63250.50, 24h Change: -1.25%\n" {
            match parser.feed(b) {
                Ok(Some(update)) => result = Some(update),
                Ok(None) => {}
                Err(e) => panic!("unexpected parse failure: {:?}", e),
            }
        }
        let update = result.unwrap();
        assert_eq!(update.price, 63250.50);
        assert_eq!(update.change_pct, -1.25);
    }

    #[test]
    fn test_feed_recovers_after_malformed_line() {
        let mut parser = FeedParser::new();
        for &b in b"garbage" {
            assert_eq!(parser.feed(b), Ok(None));
        }
        assert_eq!(parser.feed(b'\n'), Err(FeedError::Malformed));

        // The buffer reset; the next line parses cleanly
        let mut result = None;
        for &b in b"BTC Price: $100.00, 24h Change: 0.00%\n" {
            if let Ok(Some(update)) = parser.feed(b) {
                result = Some(update);
            }
        }
        assert_eq!(result.unwrap().price, 100.00);
    }

    #[test]
    fn test_overlong_line_is_flushed_and_rejected() {
        let mut parser = FeedParser::new();
        for i in 0..LINE_CAPACITY - 1 {
            assert_eq!(parser.feed(b'A' + (i % 26) as u8), Ok(None));
        }
        // Forced flush: a parse attempt happens without a terminator
        assert_eq!(parser.feed(b'Z'), Err(FeedError::Malformed));
    }

    proptest! {
        /// Arbitrary byte streams never panic and never break the
        /// capacity invariant.
        #[test]
        fn feed_handles_arbitrary_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let mut asm = LineAssembler::new();
            let mut parser = FeedParser::new();
            for b in bytes {
                if let Some(line) = asm.feed(b) {
                    prop_assert!(line.len() <= LINE_CAPACITY - 1);
                }
                prop_assert!(asm.len() <= LINE_CAPACITY - 1);
                let _ = parser.feed(b);
            }
        }
    }
}
