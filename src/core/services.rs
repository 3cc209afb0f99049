//! Unified service container.
//!
//! Wires configuration together with the injected repository and
//! store collaborators, exposing the crate's three operations:
//! full rebuild, subset indexing with progress, and search.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::domain::MediaRepository;
use crate::core::error::Result;
use crate::core::indexer::{BatchIndexer, ProgressCallback};
use crate::core::search::SearchService;
use crate::core::store::SearchStore;
use crate::core::types::{IndexStats, MediaItem, SearchQueryOptions, SearchResults};

/// Seed used when a search does not supply one
pub const DEFAULT_SHUFFLE_SEED: &str = "default";

/// Unified services container
pub struct Services {
    repo: Arc<dyn MediaRepository>,
    indexer: BatchIndexer,
    searcher: SearchService,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration and collaborators
    pub fn new(
        repo: Arc<dyn MediaRepository>,
        store: Arc<dyn SearchStore>,
        config: Config,
    ) -> Self {
        let indexer = BatchIndexer::new(
            Arc::clone(&repo),
            Arc::clone(&store),
            config.store.index_name.clone(),
            config.indexing.clone(),
        );
        let searcher = SearchService::new(Arc::clone(&store), config.store.index_name.clone());

        Self {
            repo,
            indexer,
            searcher,
            config: Arc::new(config),
        }
    }

    /// Full rebuild: fetch all entities and index them end-to-end
    pub async fn build_index(&self) -> Result<IndexStats> {
        let items = self.repo.get_all().await?;
        self.index_items(items, None).await
    }

    /// Index a specific subset, with optional progress reporting
    pub async fn index_items(
        &self,
        items: Vec<MediaItem>,
        progress: Option<ProgressCallback>,
    ) -> Result<IndexStats> {
        self.indexer
            .index_items(items, progress, CancellationToken::new())
            .await
    }

    /// Index a subset under a caller-held cancellation token.
    ///
    /// Cancellation takes effect at chunk boundaries; already
    /// written chunks stay committed.
    pub async fn index_items_with_cancel(
        &self,
        items: Vec<MediaItem>,
        progress: Option<ProgressCallback>,
        cancel: CancellationToken,
    ) -> Result<IndexStats> {
        self.indexer.index_items(items, progress, cancel).await
    }

    /// Compile and execute a search; the shuffle seed defaults to
    /// [`DEFAULT_SHUFFLE_SEED`]
    pub async fn search(
        &self,
        options: &SearchQueryOptions,
        shuffle_seed: Option<&str>,
    ) -> Result<SearchResults> {
        self.searcher
            .search(options, shuffle_seed.unwrap_or(DEFAULT_SHUFFLE_SEED))
            .await
    }
}
