//! Bounded per-field byte buffer

use super::number::parse_decimal;
use crate::options::{FieldOverflow, ScanOptions};

/// Returned by [`FieldBuffer::push`] when a byte does not fit and the
/// policy is [`FieldOverflow::Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Overflowed;

/// Growable buffer holding the text of the field currently being scanned
///
/// Capacity grows on demand up to `limit` bytes; what happens past the limit
/// depends on the overflow policy.
#[derive(Debug)]
pub(crate) struct FieldBuffer {
    bytes: Vec<u8>,
    limit: usize,
    policy: FieldOverflow,
    truncated: bool,
}

impl FieldBuffer {
    /// Create an empty buffer configured from scan options
    pub(crate) fn new(options: &ScanOptions) -> Self {
        FieldBuffer {
            bytes: Vec::new(),
            limit: options.max_field_len,
            policy: options.overflow,
            truncated: false,
        }
    }

    /// Append one byte of field text
    pub(crate) fn push(&mut self, byte: u8) -> Result<(), Overflowed> {
        if self.bytes.len() < self.limit {
            self.bytes.push(byte);
            return Ok(());
        }
        match self.policy {
            FieldOverflow::Error => Err(Overflowed),
            FieldOverflow::Truncate => {
                self.truncated = true;
                Ok(())
            }
        }
    }

    /// Configured maximum length
    pub(crate) fn limit(&self) -> usize {
        self.limit
    }

    /// Whether bytes were dropped since the last reset
    pub(crate) fn is_truncated(&self) -> bool {
        self.truncated
    }

    #[cfg(test)]
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert the current text and reset the buffer for the next field
    pub(crate) fn take_value(&mut self) -> f64 {
        let value = parse_decimal(&self.bytes);
        self.clear();
        value
    }

    /// Drop the current text without converting it
    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
        self.truncated = false;
    }
}
