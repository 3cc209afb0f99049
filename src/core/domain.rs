//! Domain collaborator trait.
//!
//! The media items being indexed live in an external domain layer.
//! The indexer and document builder depend only on this narrow
//! repository contract, so any concrete backing can be injected,
//! including in-memory fakes for testing.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::{Actor, Label, MediaItem};

/// Abstracts access to media items and their associations.
///
/// All methods may suspend on I/O. Failures surface as
/// [`SearchError::AssociationFetch`](crate::core::error::SearchError)
/// or pass through the implementation's own mapping.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Fetch the full entity set for an orchestrated rebuild
    async fn get_all(&self) -> Result<Vec<MediaItem>>;

    /// Fetch the labels associated with an item
    async fn get_labels(&self, item: &MediaItem) -> Result<Vec<Label>>;

    /// Fetch the actors associated with an item
    async fn get_actors(&self, item: &MediaItem) -> Result<Vec<Actor>>;
}
