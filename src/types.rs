//! Output types for multi-column extraction

/// Numeric columns extracted from one CSV file
///
/// Holds one vector per requested column, in the order the columns were
/// requested. Every vector is exactly `row_budget` long; entries past
/// [`rows_filled`](Columns::rows_filled) are zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawColumns"))]
pub struct Columns {
    columns: Vec<usize>,
    data: Vec<Vec<f64>>,
    row_budget: usize,
    rows_filled: usize,
}

impl Columns {
    pub(crate) fn new(
        columns: Vec<usize>,
        data: Vec<Vec<f64>>,
        row_budget: usize,
        rows_filled: usize,
    ) -> Self {
        debug_assert_eq!(columns.len(), data.len());
        Columns {
            columns,
            data,
            row_budget,
            rows_filled,
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if no columns are held
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of every column vector
    pub fn row_budget(&self) -> usize {
        self.row_budget
    }

    /// Number of data rows actually read from the file
    pub fn rows_filled(&self) -> usize {
        self.rows_filled
    }

    /// File column indices, in request order
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Values at request slot `slot`
    pub fn get(&self, slot: usize) -> Option<&[f64]> {
        self.data.get(slot).map(Vec::as_slice)
    }

    /// Values of file column `index`, if it was requested
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        let slot = self.columns.iter().position(|&c| c == index)?;
        self.get(slot)
    }

    /// Iterate `(file column index, values)` in request order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f64])> {
        self.columns
            .iter()
            .copied()
            .zip(self.data.iter().map(Vec::as_slice))
    }

    /// Take the column vectors, in request order
    pub fn into_vecs(self) -> Vec<Vec<f64>> {
        self.data
    }
}

/// Unchecked shape of [`Columns`], validated on deserialization
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawColumns {
    columns: Vec<usize>,
    data: Vec<Vec<f64>>,
    row_budget: usize,
    rows_filled: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawColumns> for Columns {
    type Error = String;

    fn try_from(raw: RawColumns) -> Result<Self, Self::Error> {
        if raw.columns.len() != raw.data.len() {
            return Err(format!(
                "{} column indices for {} data vectors",
                raw.columns.len(),
                raw.data.len()
            ));
        }
        if let Some(values) = raw.data.iter().find(|v| v.len() != raw.row_budget) {
            return Err(format!(
                "column of {} values, expected row budget {}",
                values.len(),
                raw.row_budget
            ));
        }
        if raw.rows_filled > raw.row_budget {
            return Err(format!(
                "rows_filled {} exceeds row budget {}",
                raw.rows_filled, raw.row_budget
            ));
        }
        Ok(Columns::new(
            raw.columns,
            raw.data,
            raw.row_budget,
            raw.rows_filled,
        ))
    }
}

impl std::ops::Index<usize> for Columns {
    type Output = [f64];

    fn index(&self, slot: usize) -> &[f64] {
        &self.data[slot]
    }
}
