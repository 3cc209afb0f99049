//! Error types and error handling for the media search service.
//!
//! This module defines the error types used throughout the
//! crate. Collaborator implementations (repository, store) are
//! expected to surface their failures through these variants.

use thiserror::Error;

/// Result type alias for media search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for the media search service
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Association fetch failed: {0}")]
    AssociationFetch(String),

    #[error("Store write failed: {0}")]
    StoreWrite(String),

    #[error("Store query failed: {0}")]
    StoreQuery(String),

    #[error("Indexing cancelled")]
    Cancelled,

    #[error("Indexing aborted after {indexed} items: {source}")]
    IndexingAborted {
        /// Items already committed to the store when the run failed
        indexed: usize,
        #[source]
        source: Box<SearchError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SearchError {
    /// Wrap a pipeline failure with the last-known indexed count
    pub fn aborted(indexed: usize, source: SearchError) -> Self {
        SearchError::IndexingAborted {
            indexed,
            source: Box::new(source),
        }
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidArgument(_) | SearchError::Config(_)
        )
    }

    /// Items committed before the failure, when known
    pub fn indexed_count(&self) -> Option<usize> {
        match self {
            SearchError::IndexingAborted { indexed, .. } => Some(*indexed),
            _ => None,
        }
    }
}
