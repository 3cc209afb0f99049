// Helper functions shared by the integration suites

use std::sync::Arc;

use media_search::{Config, MediaItem, Services};

use crate::common::fixtures::{InMemoryRepository, InMemoryStore};

/// Config with test-sized chunks; concurrency stays at defaults
#[allow(dead_code)]
pub fn test_config(chunk_size: usize) -> Config {
    let mut config = Config::default();
    config.indexing.chunk_size = chunk_size;
    config.store.index_name = "test-media".to_string();
    config
}

/// Wire services around shared fakes so tests can inspect them
#[allow(dead_code)]
pub fn create_test_services(
    repo: Arc<InMemoryRepository>,
    store: Arc<InMemoryStore>,
    chunk_size: usize,
) -> Services {
    Services::new(repo, store, test_config(chunk_size))
}

/// Plain media item with a generated timestamp
#[allow(dead_code)]
pub fn item(id: &str, name: &str) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        name: name.to_string(),
        added_on: 1700000000000,
        rating: None,
        bookmark: None,
        favorite: false,
        scene: None,
    }
}

/// Media item with explicit rating/bookmark/favorite state
#[allow(dead_code)]
pub fn item_with(
    id: &str,
    name: &str,
    added_on: i64,
    rating: Option<u8>,
    bookmark: Option<i64>,
    favorite: bool,
) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        name: name.to_string(),
        added_on,
        rating,
        bookmark,
        favorite,
        scene: None,
    }
}
