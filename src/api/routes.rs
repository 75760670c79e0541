use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{self, playlists, subscriptions};
use super::middleware::auth::require_auth;
use super::state::AppState;

/// Builds the full application router
///
/// Playlist routes always sit behind the JWT gate; subscription routes
/// join them when `protect_subscriptions` is set.
pub fn router(state: AppState) -> Router {
    let playlist_routes = Router::new()
        .route("/", post(playlists::create_playlist))
        .route(
            "/:playlistId",
            get(playlists::get_playlist)
                .patch(playlists::update_playlist)
                .delete(playlists::delete_playlist),
        )
        .route(
            "/add/:videoId/:playlistId",
            patch(playlists::add_video_to_playlist),
        )
        .route(
            "/remove/:videoId/:playlistId",
            patch(playlists::remove_video_from_playlist),
        )
        .route("/user/:userId", get(playlists::get_user_playlists))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    let mut subscription_routes = Router::new()
        .route(
            "/c/:channelId",
            get(subscriptions::get_channel_subscribers)
                .post(subscriptions::toggle_subscription),
        )
        .route(
            "/u/:subscriberId",
            get(subscriptions::get_subscribed_channels),
        );

    if state.protect_subscriptions {
        subscription_routes = subscription_routes.route_layer(
            middleware::from_fn_with_state(state.clone(), require_auth),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/playlists", playlist_routes)
        .nest("/api/subscriptions", subscription_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
