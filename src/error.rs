//! Error types for column extraction

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting columns from a CSV file
///
/// Malformed numeric text is not represented here: it converts to a
/// defined value (see [`parse_decimal`](crate::csv::parse_decimal)) and is
/// never reported.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The source file could not be opened
    #[error("failed to open file {}: {source}", .path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Reading from the source failed mid-scan
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Output storage could not be reserved
    #[error("failed to allocate memory for {len} values: {source}")]
    Allocation {
        /// Number of values requested
        len: usize,
        /// Allocator refusal
        #[source]
        source: TryReserveError,
    },

    /// A row budget of zero was requested
    #[error("row budget must be at least 1")]
    ZeroRowBudget,

    /// A multi-column request named no columns
    #[error("column request is empty")]
    EmptyRequest,

    /// A column index appears more than once in a request
    #[error("column {column} requested more than once")]
    DuplicateColumn {
        /// The repeated column index
        column: usize,
    },

    /// A selected field is longer than the configured maximum
    #[error("field at data row {row}, column {column} exceeds {limit} bytes")]
    FieldOverflow {
        /// 0-based data row (header excluded)
        row: usize,
        /// 0-based column index
        column: usize,
        /// Configured maximum field length
        limit: usize,
    },
}

impl ExtractError {
    /// Whether the error comes from acquiring a resource (file or memory)
    /// rather than from the request or the data
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            ExtractError::Open { .. } | ExtractError::Io(_) | ExtractError::Allocation { .. }
        )
    }
}
