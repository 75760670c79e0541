//! Repository contract tests
//!
//! Exercise the in-memory adapters against the repository trait contracts:
//! pair uniqueness for subscriptions, playlist CRUD, and the existence
//! checks for the read-only collections.

use videotube_api::domain::repositories::{
    PlaylistRepository, SubscriptionRepository, UserRepository, VideoRepository,
};
use videotube_api::domain::{Id, Playlist, Subscription};
use videotube_api::infrastructure::repositories::{
    InMemoryPlaylistRepository, InMemorySubscriptionRepository, InMemoryUserRepository,
    InMemoryVideoRepository,
};

fn id(raw: &str) -> Id {
    Id::parse(raw).expect("valid fixture id")
}

#[tokio::test]
async fn subscription_create_find_delete() {
    let repo = InMemorySubscriptionRepository::new();
    let channel = id("validChannelId");
    let subscriber = id("validSubscriberId");

    assert!(repo.find(&channel, &subscriber).await.unwrap().is_none());

    repo.create(&Subscription::new(channel.clone(), subscriber.clone()))
        .await
        .unwrap();

    let found = repo.find(&channel, &subscriber).await.unwrap();
    assert_eq!(
        found,
        Some(Subscription::new(channel.clone(), subscriber.clone()))
    );

    assert!(repo.delete(&channel, &subscriber).await.unwrap());
    assert!(repo.find(&channel, &subscriber).await.unwrap().is_none());

    // Deleting an absent pair reports false rather than failing
    assert!(!repo.delete(&channel, &subscriber).await.unwrap());
}

#[tokio::test]
async fn subscription_pair_is_unique() {
    let repo = InMemorySubscriptionRepository::new();
    let channel = id("validChannelId");
    let subscriber = id("validSubscriberId");
    let subscription = Subscription::new(channel.clone(), subscriber.clone());

    repo.create(&subscription).await.unwrap();
    repo.create(&subscription).await.unwrap();

    let subscribers = repo.subscribers_of(&channel).await.unwrap();
    assert_eq!(subscribers.len(), 1);
}

#[tokio::test]
async fn subscription_listings_filter_by_key() {
    let repo = InMemorySubscriptionRepository::new();

    repo.create(&Subscription::new(id("channelA"), id("alice")))
        .await
        .unwrap();
    repo.create(&Subscription::new(id("channelA"), id("bob")))
        .await
        .unwrap();
    repo.create(&Subscription::new(id("channelB"), id("alice")))
        .await
        .unwrap();

    let subscribers = repo.subscribers_of(&id("channelA")).await.unwrap();
    assert_eq!(subscribers, vec![id("alice"), id("bob")]);

    let channels = repo.channels_of(&id("alice")).await.unwrap();
    assert_eq!(channels, vec![id("channelA"), id("channelB")]);

    let none = repo.subscribers_of(&id("channelC")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn playlist_crud_round_trip() {
    let repo = InMemoryPlaylistRepository::new();
    let owner = id("ownerId");

    let mut playlist =
        Playlist::new("Favorites".to_string(), String::new(), owner.clone()).unwrap();
    repo.create(&playlist).await.unwrap();

    let found = repo.find_by_id(playlist.id()).await.unwrap();
    assert_eq!(found.as_ref().map(|p| p.name()), Some("Favorites"));

    playlist.rename("Renamed".to_string()).unwrap();
    playlist.add_video(id("video1"));
    repo.update(&playlist).await.unwrap();

    let found = repo.find_by_id(playlist.id()).await.unwrap().unwrap();
    assert_eq!(found.name(), "Renamed");
    assert_eq!(found.videos().to_vec(), vec![id("video1")]);

    assert!(repo.delete(playlist.id()).await.unwrap());
    assert!(repo.find_by_id(playlist.id()).await.unwrap().is_none());
    assert!(!repo.delete(playlist.id()).await.unwrap());
}

#[tokio::test]
async fn playlists_list_by_owner() {
    let repo = InMemoryPlaylistRepository::new();
    let alice = id("alice");
    let bob = id("bob");

    let first = Playlist::new("First".to_string(), String::new(), alice.clone()).unwrap();
    let second = Playlist::new("Second".to_string(), String::new(), alice.clone()).unwrap();
    let other = Playlist::new("Other".to_string(), String::new(), bob.clone()).unwrap();
    repo.create(&first).await.unwrap();
    repo.create(&second).await.unwrap();
    repo.create(&other).await.unwrap();

    let owned = repo.find_by_owner(&alice).await.unwrap();
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|p| p.owner_id() == &alice));

    let none = repo.find_by_owner(&id("carol")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn video_existence_check() {
    let repo = InMemoryVideoRepository::new();

    assert!(!repo.exists(&id("video1")).await.unwrap());

    repo.insert(id("video1")).await;
    assert!(repo.exists(&id("video1")).await.unwrap());
    assert!(!repo.exists(&id("video2")).await.unwrap());
}

#[tokio::test]
async fn user_existence_check() {
    let repo = InMemoryUserRepository::new();

    assert!(!repo.exists(&id("alice")).await.unwrap());

    repo.insert(id("alice")).await;
    assert!(repo.exists(&id("alice")).await.unwrap());
}
