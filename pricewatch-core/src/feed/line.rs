//! Line framing
//!
//! Delimits the continuous byte stream into discrete lines via terminator
//! bytes, with a forced flush when the buffer fills so a feed that never
//! sends a terminator can never overrun it.

use heapless::Vec;

use crate::config::LINE_CAPACITY;

/// A completed, unvalidated line (terminator stripped)
pub type RawLine = Vec<u8, LINE_CAPACITY>;

/// Byte-at-a-time line assembler
///
/// A line completes on line feed, carriage return, or when the buffer
/// reaches capacity - 1. The completing byte itself is not stored; on a
/// forced flush it is dropped, since the flush already claimed the
/// terminating condition.
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    buf: Vec<u8, LINE_CAPACITY>,
}

impl LineAssembler {
    /// Create an empty assembler
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Number of bytes currently buffered
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check whether no line is partially assembled
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discard any partially assembled line
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Feed one byte; returns the completed line, if any
    pub fn feed(&mut self, byte: u8) -> Option<RawLine> {
        if byte == b'\n' || byte == b'\r' || self.buf.len() >= LINE_CAPACITY - 1 {
            let completed = self.buf.clone();
            self.buf.clear();
            return Some(completed);
        }
        // Cannot fail: the forced flush above keeps len below capacity - 1
        let _ = self.buf.push(byte);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_feed_terminates() {
        let mut asm = LineAssembler::new();
        for &b in b"hello" {
            assert!(asm.feed(b).is_none());
        }
        let line = asm.feed(b'\n').unwrap();
        assert_eq!(&line[..], b"hello");
        assert!(asm.is_empty());
    }

    #[test]
    fn test_carriage_return_terminates() {
        let mut asm = LineAssembler::new();
        for &b in b"abc" {
            asm.feed(b);
        }
        let line = asm.feed(b'\r').unwrap();
        assert_eq!(&line[..], b"abc");
    }

    #[test]
    fn test_crlf_yields_empty_second_line() {
        let mut asm = LineAssembler::new();
        for &b in b"abc" {
            asm.feed(b);
        }
        assert_eq!(&asm.feed(b'\r').unwrap()[..], b"abc");
        // The trailing \n completes an empty line
        let empty = asm.feed(b'\n').unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_forced_flush_at_capacity() {
        let mut asm = LineAssembler::new();
        for _ in 0..LINE_CAPACITY - 1 {
            assert!(asm.feed(b'x').is_none());
            assert!(asm.len() <= LINE_CAPACITY - 1);
        }
        // Buffer is full; the next byte forces a flush and is dropped
        let line = asm.feed(b'y').unwrap();
        assert_eq!(line.len(), LINE_CAPACITY - 1);
        assert!(line.iter().all(|&b| b == b'x'));
        assert!(asm.is_empty());
    }

    #[test]
    fn test_buffer_resets_after_every_line() {
        let mut asm = LineAssembler::new();
        asm.feed(b'a');
        asm.feed(b'\n');
        for &b in b"next" {
            asm.feed(b);
        }
        let line = asm.feed(b'\n').unwrap();
        assert_eq!(&line[..], b"next");
    }

    #[test]
    fn test_reset_discards_partial_line() {
        let mut asm = LineAssembler::new();
        for &b in b"partial" {
            asm.feed(b);
        }
        asm.reset();
        assert!(asm.is_empty());
        let line = asm.feed(b'\n').unwrap();
        assert!(line.is_empty());
    }
}
