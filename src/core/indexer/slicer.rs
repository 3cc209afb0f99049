//! Fixed-size partitioning of item sequences.
//!
//! Batch-writes to the store are bounded by slicing the input into
//! consecutive chunks; the final chunk may be shorter than the
//! requested size.

use crate::core::error::{Result, SearchError};

/// Partition `items` into consecutive chunks of at most `size`.
///
/// Chunks are non-overlapping and preserve input order; an empty
/// input produces an empty output. A zero size is rejected rather
/// than looping forever.
pub fn slices<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(SearchError::InvalidArgument(
            "slice size must be positive".to_string(),
        ));
    }

    Ok(items.chunks(size).map(|chunk| chunk.to_vec()).collect())
}
