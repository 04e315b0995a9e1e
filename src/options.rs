//! Scan configuration

/// Default upper bound on the length of a single field, in bytes
pub const DEFAULT_MAX_FIELD_LEN: usize = 256;

/// What to do when a selected field grows past [`ScanOptions::max_field_len`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldOverflow {
    /// Abort the scan with [`ExtractError::FieldOverflow`](crate::ExtractError::FieldOverflow)
    #[default]
    Error,
    /// Keep the first `max_field_len` bytes and drop the rest
    Truncate,
}

/// Options shared by both scanners
///
/// # Examples
///
/// ```
/// use csvcolumns::{FieldOverflow, ScanOptions};
///
/// let opts = ScanOptions::default()
///     .max_field_len(64)
///     .overflow(FieldOverflow::Truncate);
/// assert_eq!(opts.max_field_len, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOptions {
    /// Maximum bytes kept for one field
    pub max_field_len: usize,
    /// Overflow policy for fields longer than `max_field_len`
    pub overflow: FieldOverflow,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            overflow: FieldOverflow::Error,
        }
    }
}

impl ScanOptions {
    /// Set the maximum field length (builder pattern)
    pub fn max_field_len(mut self, len: usize) -> Self {
        self.max_field_len = len;
        self
    }

    /// Set the overflow policy (builder pattern)
    pub fn overflow(mut self, policy: FieldOverflow) -> Self {
        self.overflow = policy;
        self
    }
}
