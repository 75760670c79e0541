use async_trait::async_trait;

use super::StoreError;
use crate::domain::id::Id;
use crate::domain::playlist::Playlist;

/// Repository trait for Playlist aggregates
///
/// Defines the contract for persisting and retrieving playlists.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// Persist a new playlist
    async fn create(&self, playlist: &Playlist) -> Result<(), StoreError>;

    /// Find a playlist by its ID
    async fn find_by_id(&self, id: &Id) -> Result<Option<Playlist>, StoreError>;

    /// Find all playlists owned by a user
    async fn find_by_owner(&self, owner_id: &Id) -> Result<Vec<Playlist>, StoreError>;

    /// Write back a modified playlist
    async fn update(&self, playlist: &Playlist) -> Result<(), StoreError>;

    /// Delete a playlist by ID, returning whether one existed
    async fn delete(&self, id: &Id) -> Result<bool, StoreError>;
}
