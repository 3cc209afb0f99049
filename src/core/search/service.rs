//! Search execution and result shaping.

use std::sync::Arc;

use crate::core::error::Result;
use crate::core::search::compile::compile;
use crate::core::store::SearchStore;
use crate::core::types::{SearchQueryOptions, SearchResults, PAGE_SIZE};

/// Executes compiled queries against the store and shapes results
pub struct SearchService {
    store: Arc<dyn SearchStore>,
    index_name: String,
}

impl SearchService {
    /// Create a new search service querying `index_name`
    pub fn new(store: Arc<dyn SearchStore>, index_name: impl Into<String>) -> Self {
        Self {
            store,
            index_name: index_name.into(),
        }
    }

    /// Compile and execute a search, returning one identifier page.
    ///
    /// Store failures surface directly; there are no partial
    /// results.
    pub async fn search(
        &self,
        options: &SearchQueryOptions,
        shuffle_seed: &str,
    ) -> Result<SearchResults> {
        tracing::info!(
            "Searching '{}' for '{}'",
            self.index_name,
            options.query.as_deref().unwrap_or("<no query>")
        );

        let compiled = compile(options, shuffle_seed);
        let hits = self.store.search(&self.index_name, &compiled).await?;

        Ok(SearchResults {
            items: hits.hits.into_iter().map(|doc| doc.id).collect(),
            total: hits.total,
            num_pages: hits.total.div_ceil(PAGE_SIZE),
        })
    }
}
