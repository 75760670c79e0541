// Repository ports (data access contracts)
// Implementations live in the infrastructure layer

pub mod playlist_repository;
pub mod subscription_repository;
pub mod user_repository;
pub mod video_repository;

pub use playlist_repository::PlaylistRepository;
pub use subscription_repository::SubscriptionRepository;
pub use user_repository::UserRepository;
pub use video_repository::VideoRepository;

/// Error surfaced by a repository operation
///
/// Storage failures are passed through to the caller; handlers translate
/// them into the HTTP error envelope without retrying.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),
}
