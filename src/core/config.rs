//! Configuration management for the media search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Items per batch-write chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Maximum chunks in flight at once
    #[serde(default = "default_outer_concurrency")]
    pub outer_concurrency: usize,

    /// Maximum documents built concurrently within one chunk
    #[serde(default = "default_inner_concurrency")]
    pub inner_concurrency: usize,
}

/// Store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Name of the index documents are written to and queried from
    #[serde(default = "default_index_name")]
    pub index_name: String,
}

// Default value functions
fn default_chunk_size() -> usize {
    2500
}

fn default_outer_concurrency() -> usize {
    4
}

fn default_inner_concurrency() -> usize {
    16
}

fn default_index_name() -> String {
    "media-items".to_string()
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            outer_concurrency: default_outer_concurrency(),
            inner_concurrency: default_inner_concurrency(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            index_name: default_index_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SearchError::Config(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// The file location comes from `MEDIA_SEARCH_CONFIG` when set,
    /// falling back to `./media-search.toml` when present.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MEDIA_SEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("media-search.toml").exists() {
            Self::from_file("media-search.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(chunk_size) = env::var("MEDIA_SEARCH_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.indexing.chunk_size = size;
            }
        }
        if let Ok(outer) = env::var("MEDIA_SEARCH_OUTER_CONCURRENCY") {
            if let Ok(n) = outer.parse() {
                self.indexing.outer_concurrency = n;
            }
        }
        if let Ok(inner) = env::var("MEDIA_SEARCH_INNER_CONCURRENCY") {
            if let Ok(n) = inner.parse() {
                self.indexing.inner_concurrency = n;
            }
        }
        if let Ok(index_name) = env::var("MEDIA_SEARCH_INDEX_NAME") {
            self.store.index_name = index_name;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.chunk_size == 0 {
            return Err(SearchError::Config(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.indexing.outer_concurrency == 0 {
            return Err(SearchError::Config(
                "Outer concurrency must be non-zero".to_string(),
            ));
        }

        if self.indexing.inner_concurrency == 0 {
            return Err(SearchError::Config(
                "Inner concurrency must be non-zero".to_string(),
            ));
        }

        if self.store.index_name.is_empty() {
            return Err(SearchError::Config(
                "Index name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
