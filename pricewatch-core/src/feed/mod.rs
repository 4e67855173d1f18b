//! Serial feed ingestion
//!
//! Reassembles lines from the raw byte stream and extracts
//! (price, 24h change) pairs from them.

pub mod line;
pub mod parser;

pub use line::{LineAssembler, RawLine};
pub use parser::{parse_line, FeedError, FeedParser, PriceUpdate};
