//! Media Search - Bulk Indexing and Query Compilation
//!
//! Indexes media-item records into a document search store and
//! compiles structured search options into the store's native
//! boolean query form, returning paginated identifier results.
//!
//! # Architecture
//!
//! All logic lives under `core` and is transport-agnostic:
//!
//! - **config**: TOML + environment configuration
//! - **error**: error types and Result alias
//! - **types**: domain data structures
//! - **domain**: `MediaRepository` collaborator trait
//! - **store**: `SearchStore` collaborator trait
//! - **indexer**: slicing, document building, batch pipeline
//! - **search**: query compilation and execution
//! - **services**: unified service container
//!
//! # Key Features
//!
//! - Two-level bounded concurrency (chunk pool + per-item pool)
//! - Serialized, monotonic progress reporting during bulk indexing
//! - Deterministic seeded shuffle ordering
//! - Cancellation honored at chunk boundaries

pub mod core;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::domain::MediaRepository;
pub use core::error::{Result, SearchError};
pub use core::services::Services;
pub use core::store::{SearchStore, StoreHits};
pub use core::types::*;
