//! Document store collaborator trait.
//!
//! The backing store (OpenSearch, Elasticsearch, or a test fake)
//! is injected behind this trait. Writes are idempotent upserts
//! keyed by document identifier, which is what makes re-running a
//! failed indexing run safe.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::search::CompiledQuery;
use crate::core::types::SearchDocument;

/// Ranked hits plus an exact total count from a query execution
#[derive(Debug, Clone)]
pub struct StoreHits {
    /// Matched documents in ranked order for the requested page
    pub hits: Vec<SearchDocument>,

    /// Exact total hit count across all pages
    pub total: usize,
}

/// Abstracts the underlying document store implementation.
///
/// Implementations must be safe for concurrent use up to the
/// configured indexing concurrency bounds.
#[async_trait]
pub trait SearchStore: Send + Sync {
    /// Upsert a batch of documents into the named index
    async fn bulk_write(&self, index: &str, docs: Vec<SearchDocument>) -> Result<()>;

    /// Execute a compiled boolean query against the named index
    async fn search(&self, index: &str, query: &CompiledQuery) -> Result<StoreHits>;
}
