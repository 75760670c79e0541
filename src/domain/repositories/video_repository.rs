use async_trait::async_trait;

use super::StoreError;
use crate::domain::id::Id;

/// Repository trait for the video catalog
///
/// This service only checks whether a video exists; video records are
/// managed elsewhere.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Whether a video with this ID exists
    async fn exists(&self, id: &Id) -> Result<bool, StoreError>;
}
