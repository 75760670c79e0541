use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use super::parse_id;
use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthenticatedUser;
use crate::api::state::AppState;
use crate::domain::id::Id;
use crate::domain::subscription::{Subscription, ToggleAction};

/// Response from a subscription toggle
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub status: &'static str,
    pub message: &'static str,
    /// Whether the subscription exists after the toggle
    pub subscribed: bool,
}

/// Response listing a channel's subscribers
#[derive(Debug, Serialize)]
pub struct SubscribersResponse {
    pub status: &'static str,
    pub subscribers: Vec<Id>,
}

/// Response listing the channels a subscriber follows
#[derive(Debug, Serialize)]
pub struct ChannelsResponse {
    pub status: &'static str,
    pub channels: Vec<Id>,
}

/// Toggle the caller's subscription to a channel
///
/// POST /api/subscriptions/c/:channelId
///
/// Subscribes when no subscription exists for the pair, unsubscribes when
/// one does. Requests on the unauthenticated surface are keyed to the
/// shared anonymous identity.
pub async fn toggle_subscription(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(channel_id): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let channel_id = parse_id(&channel_id, "channel id")?;
    let subscriber_id = match user {
        Some(Extension(AuthenticatedUser(id))) => id,
        None => Id::anonymous(),
    };

    let existing = state.subscriptions.find(&channel_id, &subscriber_id).await?;

    let action = ToggleAction::for_existing(existing.is_some());
    match action {
        ToggleAction::Subscribe => {
            let subscription = Subscription::new(channel_id, subscriber_id);
            state.subscriptions.create(&subscription).await?;
        }
        ToggleAction::Unsubscribe => {
            state
                .subscriptions
                .delete(&channel_id, &subscriber_id)
                .await?;
        }
    }

    Ok(Json(ToggleResponse {
        status: "success",
        message: "Subscription toggled successfully",
        subscribed: action.resulting_state(),
    }))
}

/// List the subscribers of a channel
///
/// GET /api/subscriptions/c/:channelId
///
/// A channel nobody subscribes to yields an empty list, not an error.
pub async fn get_channel_subscribers(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> Result<Json<SubscribersResponse>, ApiError> {
    let channel_id = parse_id(&channel_id, "channel id")?;

    let subscribers = state.subscriptions.subscribers_of(&channel_id).await?;

    Ok(Json(SubscribersResponse {
        status: "success",
        subscribers,
    }))
}

/// List the channels a subscriber follows
///
/// GET /api/subscriptions/u/:subscriberId
pub async fn get_subscribed_channels(
    State(state): State<AppState>,
    Path(subscriber_id): Path<String>,
) -> Result<Json<ChannelsResponse>, ApiError> {
    let subscriber_id = parse_id(&subscriber_id, "subscriber id")?;

    let channels = state.subscriptions.channels_of(&subscriber_id).await?;

    Ok(Json(ChannelsResponse {
        status: "success",
        channels,
    }))
}
