//! Heap accounting for extraction and release paths
//!
//! Run with `--features dhat-heap`. dhat allows one testing profiler per
//! process, so every scenario lives in a single test.

use csvcolumns::{extract_columns, extract_single_column, release_columns, ExtractError};
use std::io::Write;
use tempfile::NamedTempFile;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// Stats must be read outside dhat's assert macros, which already ignore
// allocations while they run
fn live_blocks() -> usize {
    dhat::HeapStats::get().curr_blocks
}

#[test]
fn test_no_blocks_outlive_any_call() {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(b"a,b,c\n1,2,3\n4,5,6\n").unwrap();
    temp.flush().unwrap();
    let path = temp.path().to_path_buf();

    let _profiler = dhat::Profiler::builder().testing().build();
    let baseline = live_blocks();

    // Allocation refused for a zero budget
    assert!(matches!(
        extract_columns(&path, &[2, 0, 1], 0),
        Err(ExtractError::ZeroRowBudget)
    ));
    let blocks = live_blocks();
    dhat::assert_eq!(blocks, baseline);

    // Allocation failure after the file was opened
    assert!(matches!(
        extract_columns(&path, &[2, 0, 1], usize::MAX),
        Err(ExtractError::Allocation { .. })
    ));
    let blocks = live_blocks();
    dhat::assert_eq!(blocks, baseline);

    // Request rejected
    assert!(extract_columns(&path, &[1, 1], 2).is_err());
    let blocks = live_blocks();
    dhat::assert_eq!(blocks, baseline);

    // Successful extraction, then release
    let cols = extract_columns(&path, &[2, 0], 2).unwrap();
    assert_eq!(cols.column(2), Some(&[3.0, 6.0][..]));
    release_columns(cols);
    let blocks = live_blocks();
    dhat::assert_eq!(blocks, baseline);

    let values = extract_single_column(&path, 1, 8).unwrap();
    assert_eq!(values[..2], [2.0, 5.0]);
    drop(values);
    let blocks = live_blocks();
    dhat::assert_eq!(blocks, baseline);
}
