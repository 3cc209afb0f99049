//! Search document construction.
//!
//! Converts one media item into its flat, store-writable document
//! and filters out derivative image variants that must never show
//! up as primary search results.

use crate::core::domain::MediaRepository;
use crate::core::error::Result;
use crate::core::types::{MediaItem, SearchDocument};

/// Name suffixes marking derivative/auxiliary image variants.
///
/// Matched case-sensitively against the unmodified item name.
pub const EXCLUDED_NAME_SUFFIXES: [&str; 8] = [
    "(alt. thumbnail)",
    "(thumbnail)",
    "(preview)",
    "(front cover)",
    "(back cover)",
    "(spine cover)",
    "(hero image)",
    "(avatar)",
];

/// Check whether an item name denotes a derivative variant
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_NAME_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// Build the search document for one media item.
///
/// Fields map directly; `rating` defaults to 0 when the item has
/// none. Actor names are flattened together with their aliases for
/// full-text matching; label names carry the primary name only.
/// Association fetch failures propagate to the caller.
pub async fn build_document(
    repo: &dyn MediaRepository,
    item: &MediaItem,
) -> Result<SearchDocument> {
    let labels = repo.get_labels(item).await?;
    let actors = repo.get_actors(item).await?;

    let actor_names = actors
        .iter()
        .flat_map(|a| std::iter::once(a.name.clone()).chain(a.aliases.iter().cloned()))
        .collect();

    Ok(SearchDocument {
        id: item.id.clone(),
        name: item.name.clone(),
        added_on: item.added_on,
        actors: actors.iter().map(|a| a.id.clone()).collect(),
        labels: labels.iter().map(|l| l.id.clone()).collect(),
        actor_names,
        label_names: labels.iter().map(|l| l.name.clone()).collect(),
        bookmark: item.bookmark,
        favorite: item.favorite,
        rating: item.rating.unwrap_or(0),
        scene: item.scene.clone(),
        scene_name: None,
        studio_name: None,
    })
}
