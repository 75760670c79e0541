// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod id;
pub mod playlist;
pub mod repositories;
pub mod subscription;

pub use id::Id;
pub use playlist::Playlist;
pub use subscription::Subscription;
