//! Column extraction from CSV files

use crate::csv::{drive, MultiColumnScan, SingleColumnScan};
use crate::error::{ExtractError, Result};
use crate::options::{FieldOverflow, ScanOptions};
use crate::request::ColumnRequest;
use crate::types::Columns;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads numeric columns from CSV input
///
/// The first record is always treated as a header and skipped. Each
/// extraction consumes the reader, so a file handle lives exactly as long as
/// one scan.
///
/// # Examples
///
/// ```no_run
/// use csvcolumns::ColumnReader;
///
/// let prices = ColumnReader::open("prices.csv")
///     .unwrap()
///     .single_column(1, 1000)
///     .unwrap();
/// ```
///
/// # Several Columns
///
/// ```no_run
/// use csvcolumns::ColumnReader;
///
/// let cols = ColumnReader::open("prices.csv")
///     .unwrap()
///     .max_field_len(64)
///     .columns(&[3, 1], 1000)
///     .unwrap();
///
/// let (high, low) = (&cols[0], &cols[1]);
/// ```
pub struct ColumnReader<R> {
    reader: R,
    options: ScanOptions,
}

impl ColumnReader<BufReader<File>> {
    /// Open a CSV file for extraction
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            log::error!("failed to open file {}: {}", path.display(), source);
            ExtractError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(ColumnReader::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> ColumnReader<R> {
    /// Extract from any buffered reader
    ///
    /// ```
    /// use csvcolumns::ColumnReader;
    /// use std::io::Cursor;
    ///
    /// let input = Cursor::new("a,b,c\n1,2,3\n4,5,6\n");
    /// let values = ColumnReader::from_reader(input).single_column(1, 2).unwrap();
    /// assert_eq!(values, vec![2.0, 5.0]);
    /// ```
    pub fn from_reader(reader: R) -> Self {
        ColumnReader {
            reader,
            options: ScanOptions::default(),
        }
    }

    /// Replace all scan options (builder pattern)
    pub fn options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the maximum bytes kept per field (builder pattern)
    pub fn max_field_len(mut self, len: usize) -> Self {
        self.options.max_field_len = len;
        self
    }

    /// Set the policy for fields longer than the maximum (builder pattern)
    pub fn overflow(mut self, policy: FieldOverflow) -> Self {
        self.options.overflow = policy;
        self
    }

    /// Current scan options
    pub fn scan_options(&self) -> &ScanOptions {
        &self.options
    }

    /// Extract one column as exactly `row_budget` values
    ///
    /// Quote bytes are stripped but not tracked: a delimiter inside quotes
    /// still starts a new column. Rows the input does not have are `0.0`.
    pub fn single_column(mut self, column: usize, row_budget: usize) -> Result<Vec<f64>> {
        let mut scan = SingleColumnScan::new(column, row_budget, &self.options)?;
        drive(&mut self.reader, &mut scan)?;
        Ok(scan.finish())
    }

    /// Extract several columns in one pass
    ///
    /// Results come back in the order of `columns`, each exactly
    /// `row_budget` long. Quoted fields may contain delimiters.
    pub fn columns(mut self, columns: &[usize], row_budget: usize) -> Result<Columns> {
        let request = ColumnRequest::new(columns)?;
        let mut scan = MultiColumnScan::new(request.sorted(), row_budget, &self.options)?;
        drive(&mut self.reader, &mut scan)?;

        let (by_sorted, rows_filled) = scan.finish();
        let data = request.unsort(by_sorted)?;
        Ok(Columns::new(
            request.columns().to_vec(),
            data,
            row_budget,
            rows_filled,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "a,b,c\n1,2,3\n4,5,6\n";

    fn reader(input: &str) -> ColumnReader<Cursor<&[u8]>> {
        ColumnReader::from_reader(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_single_column() {
        assert_eq!(reader(SAMPLE).single_column(1, 2).unwrap(), vec![2.0, 5.0]);
    }

    #[test]
    fn test_columns_in_request_order() {
        let cols = reader(SAMPLE).columns(&[2, 0], 2).unwrap();
        assert_eq!(cols.into_vecs(), vec![vec![3.0, 6.0], vec![1.0, 4.0]]);
    }

    #[test]
    fn test_every_permutation_matches_single_column() {
        let perms: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for perm in perms {
            let cols = reader(SAMPLE).columns(&perm, 2).unwrap();
            assert_eq!(cols.columns(), &perm);
            for (slot, &col) in perm.iter().enumerate() {
                let single = reader(SAMPLE).single_column(col, 2).unwrap();
                assert_eq!(&cols[slot], single.as_slice(), "column {}", col);
            }
        }
    }

    #[test]
    fn test_builder_options() {
        let r = reader(SAMPLE)
            .max_field_len(8)
            .overflow(FieldOverflow::Truncate);
        assert_eq!(
            *r.scan_options(),
            ScanOptions {
                max_field_len: 8,
                overflow: FieldOverflow::Truncate
            }
        );
    }

    #[test]
    fn test_duplicate_request_rejected() {
        let err = reader(SAMPLE).columns(&[1, 0, 1], 2).unwrap_err();
        assert!(matches!(err, ExtractError::DuplicateColumn { column: 1 }));
    }

    #[test]
    fn test_rows_filled() {
        let cols = reader(SAMPLE).columns(&[0], 5).unwrap();
        assert_eq!(cols.rows_filled(), 2);
        assert_eq!(cols.row_budget(), 5);
        assert_eq!(&cols[0], &[1.0, 4.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_open_missing_file() {
        let err = ColumnReader::open("definitely/not/here.csv").err().unwrap();
        assert!(matches!(err, ExtractError::Open { .. }));
    }
}
