//! # csvcolumns
//!
//! Extract numeric columns from CSV files straight into `Vec<f64>`, without
//! building rows, records or a string table.
//!
//! - **Single column**: one pass, tracks only the delimiter count. Quote
//!   bytes are stripped from the field but do not protect delimiters.
//! - **Several columns**: one pass, tracks quote state so quoted fields may
//!   contain delimiters, matches requested columns with a two-pointer walk
//!   and returns them in the order they were asked for.
//!
//! The first record is always a header. Every output vector has exactly
//! `row_budget` entries; scanning stops once that many data rows were read,
//! and rows the file does not have are `0.0`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use csvcolumns::{extract_columns, extract_single_column};
//!
//! // a,b,c
//! // 1,2,3
//! // 4,5,6
//! let b = extract_single_column("data.csv", 1, 2)?;
//! assert_eq!(b, vec![2.0, 5.0]);
//!
//! let cols = extract_columns("data.csv", &[2, 0], 2)?;
//! assert_eq!(&cols[0], &[3.0, 6.0]);
//! assert_eq!(&cols[1], &[1.0, 4.0]);
//! # Ok::<(), csvcolumns::ExtractError>(())
//! ```
//!
//! ## Field Length
//!
//! Field text is bounded by [`ScanOptions::max_field_len`] (256 bytes by
//! default). Longer fields fail with [`ExtractError::FieldOverflow`] unless
//! the [`FieldOverflow::Truncate`] policy is chosen.
//!
//! ## Numeric Text
//!
//! Field text is not validated. Conversion follows [`csv::parse_decimal`]:
//! surrounding whitespace is ignored and non-numeric text yields its longest
//! numeric prefix, or `0.0`.

pub mod column_reader;
pub mod csv;
pub mod error;
pub mod options;
pub mod request;
pub mod types;

pub use column_reader::ColumnReader;
pub use error::{ExtractError, Result};
pub use options::{FieldOverflow, ScanOptions, DEFAULT_MAX_FIELD_LEN};
pub use request::ColumnRequest;
pub use types::Columns;

use std::path::Path;

/// Extract one column of a CSV file as exactly `row_budget` values
///
/// Shorthand for [`ColumnReader::open`] followed by
/// [`ColumnReader::single_column`] with default options.
pub fn extract_single_column<P: AsRef<Path>>(
    path: P,
    column: usize,
    row_budget: usize,
) -> Result<Vec<f64>> {
    ColumnReader::open(path)?.single_column(column, row_budget)
}

/// Extract several distinct columns of a CSV file in one pass
///
/// Shorthand for [`ColumnReader::open`] followed by
/// [`ColumnReader::columns`] with default options.
pub fn extract_columns<P: AsRef<Path>>(
    path: P,
    columns: &[usize],
    row_budget: usize,
) -> Result<Columns> {
    ColumnReader::open(path)?.columns(columns, row_budget)
}

/// Release a multi-column result
///
/// Takes ownership, so a result cannot be released twice. Dropping the
/// value has the same effect.
pub fn release_columns(columns: Columns) {
    drop(columns);
}
