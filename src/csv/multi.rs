//! Multi-column scanner
//!
//! Extracts several columns in one pass. Quote bytes toggle a quote-open
//! flag, and delimiters or newlines seen while it is set belong to the field
//! text instead of ending the field. Quote bytes themselves are never part
//! of the field text.
//!
//! Requested columns are matched with a two-pointer walk: the physical
//! column index only grows within a record, so a cursor into the ascending
//! column list only ever moves forward and each field costs one comparison.

use super::field::FieldBuffer;
use super::scan::{zeroed_column, ByteScan, DELIMITER, NEWLINE, QUOTE};
use crate::error::{ExtractError, Result};
use crate::options::ScanOptions;

/// State of one multi-column extraction
///
/// Outputs are indexed by sorted slot; [`ColumnRequest::unsort`] restores
/// the caller's order.
///
/// [`ColumnRequest::unsort`]: crate::request::ColumnRequest::unsort
#[derive(Debug)]
pub(crate) struct MultiColumnScan<'a> {
    sorted: &'a [usize],
    outputs: Vec<Vec<f64>>,
    row_budget: usize,
    field: FieldBuffer,
    current_col: usize,
    col_ptr: usize,
    row: usize,
    in_quotes: bool,
    header_seen: bool,
    pending: bool,
}

impl<'a> MultiColumnScan<'a> {
    /// Allocate one zero-filled output per sorted column
    ///
    /// On failure every column allocated so far is released before the
    /// error is returned.
    pub(crate) fn new(sorted: &'a [usize], row_budget: usize, options: &ScanOptions) -> Result<Self> {
        if row_budget == 0 {
            return Err(ExtractError::ZeroRowBudget);
        }

        let mut outputs = Vec::new();
        outputs.try_reserve_exact(sorted.len()).map_err(|source| {
            log::error!("failed to allocate column table for {} columns: {}", sorted.len(), source);
            ExtractError::Allocation {
                len: sorted.len(),
                source,
            }
        })?;
        for _ in sorted {
            outputs.push(zeroed_column(row_budget)?);
        }

        Ok(MultiColumnScan {
            sorted,
            outputs,
            row_budget,
            field: FieldBuffer::new(options),
            current_col: 0,
            col_ptr: 0,
            row: 0,
            in_quotes: false,
            header_seen: false,
            pending: false,
        })
    }

    /// Convert a trailing unterminated record and hand out the outputs in
    /// sorted order, with the count of rows filled
    pub(crate) fn finish(mut self) -> (Vec<Vec<f64>>, usize) {
        if self.pending && !self.is_full() {
            self.end_field();
            self.row += 1;
        }
        log::debug!(
            "multi-column scan of columns {:?} filled {}/{} rows",
            self.sorted,
            self.row,
            self.row_budget
        );
        (self.outputs, self.row)
    }

    fn selected(&self) -> bool {
        self.sorted.get(self.col_ptr) == Some(&self.current_col)
    }

    fn end_field(&mut self) {
        if self.header_seen && self.selected() {
            if self.field.is_truncated() {
                log::warn!(
                    "field at data row {}, column {} truncated to {} bytes",
                    self.row,
                    self.current_col,
                    self.field.limit()
                );
            }
            self.outputs[self.col_ptr][self.row] = self.field.take_value();
            self.col_ptr += 1;
        }
        self.field.clear();
        self.current_col += 1;
    }

    fn end_record(&mut self) {
        if self.header_seen {
            self.end_field();
            self.row += 1;
        } else {
            self.header_seen = true;
            self.field.clear();
        }
        self.current_col = 0;
        self.col_ptr = 0;
        self.pending = false;
    }
}

impl ByteScan for MultiColumnScan<'_> {
    fn is_full(&self) -> bool {
        self.row == self.row_budget
    }

    fn feed(&mut self, byte: u8) -> Result<()> {
        match byte {
            QUOTE => {
                self.in_quotes = !self.in_quotes;
                self.pending |= self.header_seen;
            }
            DELIMITER if !self.in_quotes => {
                self.end_field();
                self.pending = self.header_seen;
            }
            NEWLINE if !self.in_quotes => self.end_record(),
            _ => {
                if !self.header_seen {
                    return Ok(());
                }
                self.pending = true;
                if self.selected() {
                    self.field
                        .push(byte)
                        .map_err(|_| ExtractError::FieldOverflow {
                            row: self.row,
                            column: self.current_col,
                            limit: self.field.limit(),
                        })?;
                }
            }
        }
        Ok(())
    }
}
