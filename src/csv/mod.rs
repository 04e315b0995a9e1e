//! Byte-level CSV scanning for numeric columns

mod field;
mod multi;
mod number;
mod scan;
mod single;

pub use number::parse_decimal;

pub(crate) use multi::MultiColumnScan;
pub(crate) use scan::drive;
pub(crate) use single::SingleColumnScan;
