//! Column requests: validation, sorting and restoring caller order

use crate::error::{ExtractError, Result};

/// A validated set of column indices
///
/// Keeps the caller's order, an ascending copy that drives the two-pointer
/// scan, and for every sorted slot the caller slot it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRequest {
    columns: Vec<usize>,
    sorted: Vec<usize>,
    // positions[sorted_slot] = caller slot
    positions: Vec<usize>,
}

impl ColumnRequest {
    /// Validate a request
    ///
    /// Fails with [`ExtractError::EmptyRequest`] when no column is named and
    /// with [`ExtractError::DuplicateColumn`] when an index repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvcolumns::ColumnRequest;
    ///
    /// let request = ColumnRequest::new(&[2, 0, 1]).unwrap();
    /// assert_eq!(request.sorted(), &[0, 1, 2]);
    /// assert!(ColumnRequest::new(&[1, 1]).is_err());
    /// ```
    pub fn new(columns: &[usize]) -> Result<Self> {
        if columns.is_empty() {
            return Err(ExtractError::EmptyRequest);
        }

        let mut positions: Vec<usize> = (0..columns.len()).collect();
        positions.sort_unstable_by_key(|&slot| columns[slot]);
        let sorted: Vec<usize> = positions.iter().map(|&slot| columns[slot]).collect();

        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ExtractError::DuplicateColumn { column: pair[0] });
        }

        Ok(ColumnRequest {
            columns: columns.to_vec(),
            sorted,
            positions,
        })
    }

    /// Column indices in caller order
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Column indices in ascending order
    pub fn sorted(&self) -> &[usize] {
        &self.sorted
    }

    /// Number of requested columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a validated request
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Move per-sorted-slot items into caller order
    ///
    /// Items are moved, not copied. `by_sorted` must hold one item per
    /// requested column.
    pub fn unsort<T>(&self, by_sorted: Vec<T>) -> Result<Vec<T>> {
        debug_assert_eq!(by_sorted.len(), self.len());

        let mut slots: Vec<Option<T>> = Vec::new();
        slots.try_reserve_exact(self.len()).map_err(|source| {
            log::error!("failed to allocate result table for {} columns: {}", self.len(), source);
            ExtractError::Allocation {
                len: self.len(),
                source,
            }
        })?;
        slots.resize_with(self.len(), || None);

        for (item, &slot) in by_sorted.into_iter().zip(&self.positions) {
            slots[slot] = Some(item);
        }
        Ok(slots.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_positions() {
        let request = ColumnRequest::new(&[5, 1, 3]).unwrap();
        assert_eq!(request.columns(), &[5, 1, 3]);
        assert_eq!(request.sorted(), &[1, 3, 5]);
        assert_eq!(request.positions, vec![1, 2, 0]);
    }

    #[test]
    fn test_unsort_restores_caller_order() {
        let request = ColumnRequest::new(&[2, 0, 1]).unwrap();
        let by_sorted = vec!["col0", "col1", "col2"];
        assert_eq!(
            request.unsort(by_sorted).unwrap(),
            vec!["col2", "col0", "col1"]
        );
    }

    #[test]
    fn test_already_sorted_is_identity() {
        let request = ColumnRequest::new(&[0, 4, 9]).unwrap();
        assert_eq!(request.unsort(vec![1, 2, 3]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            ColumnRequest::new(&[]),
            Err(ExtractError::EmptyRequest)
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        assert!(matches!(
            ColumnRequest::new(&[3, 1, 3]),
            Err(ExtractError::DuplicateColumn { column: 3 })
        ));
    }
}
