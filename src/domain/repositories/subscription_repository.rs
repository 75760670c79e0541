use async_trait::async_trait;

use super::StoreError;
use crate::domain::id::Id;
use crate::domain::subscription::Subscription;

/// Repository trait for Subscription records
///
/// Defines the contract for persisting and querying subscriptions.
/// Implementations should handle database-specific details and must keep
/// at most one record per (channel, subscriber) pair.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Find the subscription for a (channel, subscriber) pair
    async fn find(
        &self,
        channel_id: &Id,
        subscriber_id: &Id,
    ) -> Result<Option<Subscription>, StoreError>;

    /// Create a subscription
    async fn create(&self, subscription: &Subscription) -> Result<(), StoreError>;

    /// Delete the subscription for a pair, returning whether one existed
    async fn delete(&self, channel_id: &Id, subscriber_id: &Id) -> Result<bool, StoreError>;

    /// All subscriber ids of a channel
    async fn subscribers_of(&self, channel_id: &Id) -> Result<Vec<Id>, StoreError>;

    /// All channel ids a subscriber follows
    async fn channels_of(&self, subscriber_id: &Id) -> Result<Vec<Id>, StoreError>;
}
