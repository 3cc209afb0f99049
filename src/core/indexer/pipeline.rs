//! Batch indexing pipeline.
//!
//! Drives the end-to-end indexing workflow:
//! 1. Slice the item set into fixed-size chunks
//! 2. Build documents per item, skipping excluded variants
//! 3. Submit each completed chunk as one batch-write
//! 4. Report cumulative progress after every chunk
//!
//! Concurrency is bounded at two levels: an outer pool caps the
//! number of chunks in flight (and therefore simultaneous
//! batch-writes), an inner pool caps concurrent per-item
//! association fetches within each chunk.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::core::config::IndexingConfig;
use crate::core::domain::MediaRepository;
use crate::core::error::{Result, SearchError};
use crate::core::indexer::document::{build_document, is_excluded};
use crate::core::indexer::slicer::slices;
use crate::core::store::SearchStore;
use crate::core::types::{IndexStats, MediaItem, ProgressReport, SearchDocument};

/// Callback invoked at most once per completed chunk
pub type ProgressCallback = Arc<dyn Fn(ProgressReport) + Send + Sync>;

/// Shared progress accumulator.
///
/// A single mutex serializes both the count update and the
/// callback invocation, so observed percents are non-decreasing
/// no matter in which order chunks complete.
struct ProgressState {
    processed: usize,
    total: usize,
    callback: Option<ProgressCallback>,
}

impl ProgressState {
    fn advance(&mut self, count: usize) {
        self.processed += count;
        if let Some(callback) = &self.callback {
            let percent = self.processed as f64 / self.total as f64 * 100.0;
            callback(ProgressReport { percent });
        }
    }
}

/// Orchestrates bounded-concurrency bulk indexing
pub struct BatchIndexer {
    repo: Arc<dyn MediaRepository>,
    store: Arc<dyn SearchStore>,
    index_name: String,
    config: IndexingConfig,
}

impl BatchIndexer {
    /// Create a new batch indexer writing to `index_name`
    pub fn new(
        repo: Arc<dyn MediaRepository>,
        store: Arc<dyn SearchStore>,
        index_name: impl Into<String>,
        config: IndexingConfig,
    ) -> Self {
        Self {
            repo,
            store,
            index_name: index_name.into(),
            config,
        }
    }

    /// Index a set of media items.
    ///
    /// Returns statistics once every chunk has been written. Any
    /// failure aborts in-flight work and surfaces as
    /// [`SearchError::IndexingAborted`] carrying the number of
    /// items already committed; chunks written before the failure
    /// stay committed (writes are idempotent upserts, a re-run is
    /// safe). Cancellation is honored at chunk boundaries.
    pub async fn index_items(
        &self,
        items: Vec<MediaItem>,
        progress: Option<ProgressCallback>,
        cancel: CancellationToken,
    ) -> Result<IndexStats> {
        if items.is_empty() {
            return Ok(IndexStats::default());
        }

        let start = Instant::now();
        let total = items.len();
        let chunks = slices(&items, self.config.chunk_size)?;

        tracing::info!(
            "Indexing {} items in {} chunks of up to {}",
            total,
            chunks.len(),
            self.config.chunk_size
        );

        let outer = Arc::new(Semaphore::new(self.config.outer_concurrency));
        let state = Arc::new(Mutex::new(ProgressState {
            processed: 0,
            total,
            callback: progress,
        }));

        let mut tasks: JoinSet<Result<(usize, usize)>> = JoinSet::new();

        for chunk in chunks {
            let outer = Arc::clone(&outer);
            let repo = Arc::clone(&self.repo);
            let store = Arc::clone(&self.store);
            let state = Arc::clone(&state);
            let cancel = cancel.clone();
            let index_name = self.index_name.clone();
            let inner_concurrency = self.config.inner_concurrency;

            tasks.spawn(async move {
                let _permit = outer
                    .acquire_owned()
                    .await
                    .map_err(|_| SearchError::Cancelled)?;

                if cancel.is_cancelled() {
                    return Err(SearchError::Cancelled);
                }

                let docs = build_chunk(repo, &chunk, inner_concurrency).await?;
                let written = docs.len();

                if !docs.is_empty() {
                    store.bulk_write(&index_name, docs).await?;
                }

                tracing::debug!(
                    "Chunk complete: {} processed, {} written",
                    chunk.len(),
                    written
                );

                let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
                state.advance(chunk.len());

                Ok((chunk.len(), written))
            });
        }

        let mut stats = IndexStats::default();

        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_err) => Err(SearchError::StoreWrite(format!(
                    "chunk task failed: {join_err}"
                ))),
            };

            match outcome {
                Ok((processed, written)) => {
                    stats.items_processed += processed;
                    stats.documents_indexed += written;
                }
                Err(e) => {
                    tasks.abort_all();
                    let indexed = state.lock().unwrap_or_else(|p| p.into_inner()).processed;
                    tracing::error!("Indexing aborted after {} items: {}", indexed, e);
                    return Err(SearchError::aborted(indexed, e));
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Indexing complete: {} items processed, {} documents written in {}ms",
            stats.items_processed,
            stats.documents_indexed,
            stats.duration_ms
        );

        Ok(stats)
    }
}

/// Build the documents for one chunk under the inner pool bound.
///
/// Excluded variants are skipped without building; the first
/// failure aborts the chunk's remaining in-flight items.
async fn build_chunk(
    repo: Arc<dyn MediaRepository>,
    chunk: &[MediaItem],
    inner_concurrency: usize,
) -> Result<Vec<SearchDocument>> {
    let inner = Arc::new(Semaphore::new(inner_concurrency));
    let mut tasks: JoinSet<Result<SearchDocument>> = JoinSet::new();

    for item in chunk {
        if is_excluded(&item.name) {
            continue;
        }

        let inner = Arc::clone(&inner);
        let repo = Arc::clone(&repo);
        let item = item.clone();

        tasks.spawn(async move {
            let _permit = inner
                .acquire_owned()
                .await
                .map_err(|_| SearchError::Cancelled)?;
            build_document(repo.as_ref(), &item).await
        });
    }

    let mut docs = Vec::with_capacity(chunk.len());

    while let Some(joined) = tasks.join_next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(join_err) => Err(SearchError::AssociationFetch(format!(
                "document task failed: {join_err}"
            ))),
        };

        match outcome {
            Ok(doc) => docs.push(doc),
            Err(e) => {
                tasks.abort_all();
                return Err(e);
            }
        }
    }

    Ok(docs)
}
