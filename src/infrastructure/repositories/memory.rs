//! In-memory repository implementations
//!
//! Back the integration tests and local runs without a database. Each
//! store guards its map with an async mutex; the per-store lock gives the
//! same single-operation atomicity the database adapters rely on.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::id::Id;
use crate::domain::playlist::Playlist;
use crate::domain::repositories::{
    PlaylistRepository, StoreError, SubscriptionRepository, UserRepository, VideoRepository,
};
use crate::domain::subscription::Subscription;

/// In-memory implementation of SubscriptionRepository
#[derive(Default, Clone)]
pub struct InMemorySubscriptionRepository {
    // Keyed by (channel, subscriber); the map key enforces the pair invariant
    records: Arc<Mutex<BTreeSet<(Id, Id)>>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn find(
        &self,
        channel_id: &Id,
        subscriber_id: &Id,
    ) -> Result<Option<Subscription>, StoreError> {
        let records = self.records.lock().await;
        let key = (channel_id.clone(), subscriber_id.clone());
        Ok(records
            .contains(&key)
            .then(|| Subscription::new(channel_id.clone(), subscriber_id.clone())))
    }

    async fn create(&self, subscription: &Subscription) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        records.insert((
            subscription.channel_id.clone(),
            subscription.subscriber_id.clone(),
        ));
        Ok(())
    }

    async fn delete(&self, channel_id: &Id, subscriber_id: &Id) -> Result<bool, StoreError> {
        let mut records = self.records.lock().await;
        Ok(records.remove(&(channel_id.clone(), subscriber_id.clone())))
    }

    async fn subscribers_of(&self, channel_id: &Id) -> Result<Vec<Id>, StoreError> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .filter(|(channel, _)| channel == channel_id)
            .map(|(_, subscriber)| subscriber.clone())
            .collect())
    }

    async fn channels_of(&self, subscriber_id: &Id) -> Result<Vec<Id>, StoreError> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .filter(|(_, subscriber)| subscriber == subscriber_id)
            .map(|(channel, _)| channel.clone())
            .collect())
    }
}

/// In-memory implementation of PlaylistRepository
#[derive(Default, Clone)]
pub struct InMemoryPlaylistRepository {
    records: Arc<Mutex<BTreeMap<Id, Playlist>>>,
}

impl InMemoryPlaylistRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaylistRepository for InMemoryPlaylistRepository {
    async fn create(&self, playlist: &Playlist) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        records.insert(playlist.id().clone(), playlist.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<Playlist>, StoreError> {
        let records = self.records.lock().await;
        Ok(records.get(id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &Id) -> Result<Vec<Playlist>, StoreError> {
        let records = self.records.lock().await;
        Ok(records
            .values()
            .filter(|p| p.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn update(&self, playlist: &Playlist) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        records.insert(playlist.id().clone(), playlist.clone());
        Ok(())
    }

    async fn delete(&self, id: &Id) -> Result<bool, StoreError> {
        let mut records = self.records.lock().await;
        Ok(records.remove(id).is_some())
    }
}

/// In-memory implementation of VideoRepository
#[derive(Default, Clone)]
pub struct InMemoryVideoRepository {
    known: Arc<Mutex<BTreeSet<Id>>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a video id, standing in for the upload service
    pub async fn insert(&self, id: Id) {
        self.known.lock().await.insert(id);
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn exists(&self, id: &Id) -> Result<bool, StoreError> {
        Ok(self.known.lock().await.contains(id))
    }
}

/// In-memory implementation of UserRepository
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    known: Arc<Mutex<BTreeSet<Id>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user id, standing in for the account service
    pub async fn insert(&self, id: Id) {
        self.known.lock().await.insert(id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists(&self, id: &Id) -> Result<bool, StoreError> {
        Ok(self.known.lock().await.contains(id))
    }
}
