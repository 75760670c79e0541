use async_trait::async_trait;

use super::StoreError;
use crate::domain::id::Id;

/// Repository trait for user records
///
/// This service only checks whether a user exists; user records are
/// managed elsewhere.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether a user with this ID exists
    async fn exists(&self, id: &Id) -> Result<bool, StoreError>;
}
