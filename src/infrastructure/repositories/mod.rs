// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod memory;
pub mod postgres_playlist_repository;
pub mod postgres_subscription_repository;
pub mod postgres_user_repository;
pub mod postgres_video_repository;

pub use memory::{
    InMemoryPlaylistRepository, InMemorySubscriptionRepository, InMemoryUserRepository,
    InMemoryVideoRepository,
};
pub use postgres_playlist_repository::PostgresPlaylistRepository;
pub use postgres_subscription_repository::PostgresSubscriptionRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use postgres_video_repository::PostgresVideoRepository;
