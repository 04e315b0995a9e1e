//! Single-column scanner
//!
//! Tracks only the delimiter count and the record boundary. Quote bytes are
//! stripped from the field text but carry no state, so a delimiter inside a
//! quoted field still starts a new column:
//!
//! ```text
//! id,amount
//! 1,"1,234"     -> column 1 reads `1`, column 2 reads `234`
//! ```
//!
//! Use the multi-column scanner when quoted delimiters must be respected.

use super::field::FieldBuffer;
use super::scan::{zeroed_column, ByteScan, DELIMITER, NEWLINE, QUOTE};
use crate::error::{ExtractError, Result};
use crate::options::ScanOptions;

/// State of one single-column extraction
#[derive(Debug)]
pub(crate) struct SingleColumnScan {
    target: usize,
    values: Vec<f64>,
    field: FieldBuffer,
    current_col: usize,
    row: usize,
    header_seen: bool,
    // Bytes of an unterminated data record are pending conversion
    pending: bool,
}

impl SingleColumnScan {
    /// Allocate the zero-filled output and an empty scan state
    pub(crate) fn new(target: usize, row_budget: usize, options: &ScanOptions) -> Result<Self> {
        Ok(SingleColumnScan {
            target,
            values: zeroed_column(row_budget)?,
            field: FieldBuffer::new(options),
            current_col: 0,
            row: 0,
            header_seen: false,
            pending: false,
        })
    }

    /// Convert a trailing unterminated record and hand out the values
    pub(crate) fn finish(mut self) -> Vec<f64> {
        if self.pending && !self.is_full() {
            self.store();
        }
        log::debug!(
            "single-column scan of column {} filled {}/{} rows",
            self.target,
            self.row,
            self.values.len()
        );
        self.values
    }

    fn store(&mut self) {
        if self.field.is_truncated() {
            log::warn!(
                "field at data row {}, column {} truncated to {} bytes",
                self.row,
                self.target,
                self.field.limit()
            );
        }
        self.values[self.row] = self.field.take_value();
        self.row += 1;
    }

    fn end_record(&mut self) {
        if self.header_seen {
            self.store();
        } else {
            self.header_seen = true;
        }
        self.field.clear();
        self.current_col = 0;
        self.pending = false;
    }
}

impl ByteScan for SingleColumnScan {
    fn is_full(&self) -> bool {
        self.row == self.values.len()
    }

    fn feed(&mut self, byte: u8) -> Result<()> {
        match byte {
            NEWLINE => self.end_record(),
            DELIMITER => {
                self.pending = self.header_seen;
                self.current_col += 1;
            }
            _ => {
                if !self.header_seen {
                    return Ok(());
                }
                self.pending = true;
                if self.current_col == self.target && byte != QUOTE {
                    self.field
                        .push(byte)
                        .map_err(|_| ExtractError::FieldOverflow {
                            row: self.row,
                            column: self.target,
                            limit: self.field.limit(),
                        })?;
                }
            }
        }
        Ok(())
    }
}
