//! Shared byte-pump for the column scanners

use crate::error::{ExtractError, Result};
use std::io::{BufRead, ErrorKind};

/// Field delimiter
pub(crate) const DELIMITER: u8 = b',';
/// Quote character
pub(crate) const QUOTE: u8 = b'"';
/// Record terminator
pub(crate) const NEWLINE: u8 = b'\n';

/// A byte-at-a-time state machine over CSV input
pub(crate) trait ByteScan {
    /// Whether the row budget is exhausted and scanning can stop
    fn is_full(&self) -> bool;

    /// Advance the state machine by one input byte
    fn feed(&mut self, byte: u8) -> Result<()>;
}

/// Pump every byte of `reader` through `scan`, stopping early once the scan
/// reports its row budget exhausted
///
/// Input is consumed in the reader's own buffer-sized chunks.
pub(crate) fn drive<R: BufRead, S: ByteScan>(reader: &mut R, scan: &mut S) -> Result<()> {
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                log::error!("failed to read input: {}", e);
                return Err(ExtractError::Io(e));
            }
        };
        if chunk.is_empty() {
            return Ok(());
        }

        let len = chunk.len();
        for &byte in chunk {
            if scan.is_full() {
                return Ok(());
            }
            scan.feed(byte)?;
        }
        reader.consume(len);
    }
}

/// Allocate a zero-filled output column of exactly `len` values
///
/// Refuses a zero length, and reports allocator refusal instead of aborting.
pub(crate) fn zeroed_column(len: usize) -> Result<Vec<f64>> {
    if len == 0 {
        return Err(ExtractError::ZeroRowBudget);
    }
    let mut values = Vec::new();
    values.try_reserve_exact(len).map_err(|source| {
        log::error!("failed to allocate memory for {} values: {}", len, source);
        ExtractError::Allocation { len, source }
    })?;
    values.resize(len, 0.0);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    /// Counts bytes until `limit` newlines were seen
    struct LineCounter {
        lines: usize,
        limit: usize,
        bytes: usize,
    }

    impl ByteScan for LineCounter {
        fn is_full(&self) -> bool {
            self.lines == self.limit
        }

        fn feed(&mut self, byte: u8) -> Result<()> {
            self.bytes += 1;
            if byte == NEWLINE {
                self.lines += 1;
            }
            Ok(())
        }
    }

    #[test]
    fn test_drive_stops_when_full() {
        let mut reader = BufReader::with_capacity(3, Cursor::new(b"a\nb\nc\nd\n".to_vec()));
        let mut scan = LineCounter {
            lines: 0,
            limit: 2,
            bytes: 0,
        };
        drive(&mut reader, &mut scan).unwrap();
        assert_eq!(scan.lines, 2);
        assert_eq!(scan.bytes, 4);
    }

    #[test]
    fn test_drive_reads_to_end_across_chunks() {
        let mut reader = BufReader::with_capacity(2, Cursor::new(b"1\n2\n3".to_vec()));
        let mut scan = LineCounter {
            lines: 0,
            limit: usize::MAX,
            bytes: 0,
        };
        drive(&mut reader, &mut scan).unwrap();
        assert_eq!(scan.bytes, 5);
        assert_eq!(scan.lines, 2);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_drive_propagates_io_error() {
        let mut reader = BufReader::new(FailingReader);
        let mut scan = LineCounter {
            lines: 0,
            limit: 1,
            bytes: 0,
        };
        let err = drive(&mut reader, &mut scan).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    #[test]
    fn test_zeroed_column() {
        assert_eq!(zeroed_column(3).unwrap(), vec![0.0, 0.0, 0.0]);
        assert!(matches!(zeroed_column(0), Err(ExtractError::ZeroRowBudget)));
        assert!(matches!(
            zeroed_column(usize::MAX),
            Err(ExtractError::Allocation { .. })
        ));
    }
}
