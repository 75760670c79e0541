use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::jwt::{JwtVerifier, TokenVerifier};
use crate::domain::repositories::{
    PlaylistRepository, SubscriptionRepository, UserRepository, VideoRepository,
};
use crate::infrastructure::repositories::{
    PostgresPlaylistRepository, PostgresSubscriptionRepository, PostgresUserRepository,
    PostgresVideoRepository,
};

/// Shared application state injected into handlers
///
/// Holds the repository ports and the token verifier as trait objects so
/// the HTTP layer never depends on a concrete storage backend.
#[derive(Clone)]
pub struct AppState {
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub playlists: Arc<dyn PlaylistRepository>,
    pub videos: Arc<dyn VideoRepository>,
    pub users: Arc<dyn UserRepository>,
    pub verifier: Arc<dyn TokenVerifier>,
    /// Whether the subscription routes sit behind the auth gate
    pub protect_subscriptions: bool,
}

impl AppState {
    /// Wires the production state: PostgreSQL repositories and an HS256
    /// verifier over the configured secret
    pub fn postgres(pool: PgPool, jwt_secret: &str, protect_subscriptions: bool) -> Self {
        Self {
            subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
            playlists: Arc::new(PostgresPlaylistRepository::new(pool.clone())),
            videos: Arc::new(PostgresVideoRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool)),
            verifier: Arc::new(JwtVerifier::new(jwt_secret)),
            protect_subscriptions,
        }
    }
}
