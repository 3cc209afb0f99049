//! Core data types for the media search service.
//!
//! This module defines all data structures used throughout the
//! crate: domain entities, search documents, query options,
//! results, and indexing statistics.

use serde::{Deserialize, Serialize};

/// Fixed page size shared by query compilation and result shaping
pub const PAGE_SIZE: usize = 24;

/// Sort mode that replaces field sorting with seeded pseudo-random ordering
pub const SHUFFLE_SORT: &str = "$shuffle";

/// Sort mode that defers to backend relevance scoring
pub const RELEVANCE_SORT: &str = "relevance";

/// A label associated with a media item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Unique label identifier
    pub id: String,

    /// Primary display name
    pub name: String,

    /// Alternative names
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// An actor associated with a media item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique actor identifier
    pub id: String,

    /// Primary display name
    pub name: String,

    /// Alternative names
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// A media-item record as exposed by the domain collaborator.
///
/// Associated labels and actors are reached through
/// [`MediaRepository`](crate::core::domain::MediaRepository),
/// not embedded here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique item identifier (stable across re-indexing runs)
    pub id: String,

    /// Display name
    pub name: String,

    /// Creation timestamp (epoch milliseconds)
    pub added_on: i64,

    /// Rating, unset when never rated
    pub rating: Option<u8>,

    /// Bookmark marker, unset when not bookmarked
    pub bookmark: Option<i64>,

    /// Favorite flag
    pub favorite: bool,

    /// Associated scene identifier
    pub scene: Option<String>,
}

/// Flattened, store-writable projection of a [`MediaItem`].
///
/// Field names serialize in the store's camelCase form; the
/// document identifier equals the source entity identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    pub id: String,
    pub name: String,
    pub added_on: i64,

    /// Associated actor identifiers
    pub actors: Vec<String>,

    /// Associated label identifiers
    pub labels: Vec<String>,

    /// Actor names and aliases, flattened for full-text matching
    pub actor_names: Vec<String>,

    /// Label names for full-text matching
    pub label_names: Vec<String>,

    pub bookmark: Option<i64>,
    pub favorite: bool,

    /// Rating, 0 when the source item has none
    pub rating: u8,

    /// Associated scene identifier
    pub scene: Option<String>,

    /// Denormalized scene name; populated by a future denormalization step
    pub scene_name: Option<String>,

    /// Denormalized studio name; populated by a future denormalization step
    pub studio_name: Option<String>,
}

/// Sparse, all-optional filter/sort specification for a search.
///
/// Constructed per invocation; every unset field simply omits its
/// clause from the compiled query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQueryOptions {
    /// Free-text query string
    pub query: Option<String>,

    /// Only match favorites when true
    pub favorite: Option<bool>,

    /// Only match bookmarked items when true
    pub bookmark: Option<bool>,

    /// Minimum rating threshold
    pub rating: Option<u8>,

    /// Label identifiers that must ALL match
    #[serde(default)]
    pub include: Vec<String>,

    /// Actor identifiers that must ALL match
    #[serde(default)]
    pub actors: Vec<String>,

    /// Studio identifiers of which ANY may match
    #[serde(default)]
    pub studios: Vec<String>,

    /// Scene identifiers; accepted but not yet compiled into a clause
    #[serde(default)]
    pub scenes: Vec<String>,

    /// Sort field, [`SHUFFLE_SORT`], or [`RELEVANCE_SORT`]
    pub sort_by: Option<String>,

    /// Sort direction, "asc" or "desc" (default "desc")
    pub sort_dir: Option<String>,

    /// Page index; negative values clamp to the first page
    pub page: Option<i64>,
}

/// Ordered identifier results for one page of a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matched document identifiers for the requested page
    pub items: Vec<String>,

    /// Exact total hit count
    pub total: usize,

    /// `ceil(total / PAGE_SIZE)`
    pub num_pages: usize,
}

/// Progress notification emitted once per completed chunk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Percent complete in `[0, 100]`
    pub percent: f64,
}

/// Statistics from a bulk indexing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Items processed, excluded variants included (sum of chunk lengths)
    pub items_processed: usize,

    /// Documents actually written to the store
    pub documents_indexed: usize,

    /// Indexing duration in milliseconds
    pub duration_ms: u64,
}
