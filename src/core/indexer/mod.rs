//! Bulk indexing module.
//!
//! Converts media items into search documents and writes them to
//! the store in bounded-concurrency batches:
//!
//! - Fixed-size slicing of the input set
//! - Per-item document building with a name-based exclusion filter
//! - Two-level bounded worker pools (chunks, items within a chunk)
//! - Serialized, monotonic progress reporting

pub mod document;
pub mod pipeline;
pub mod slicer;

pub use document::{build_document, is_excluded};
pub use pipeline::{BatchIndexer, ProgressCallback};
pub use slicer::slices;
