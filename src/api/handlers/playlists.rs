use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use super::parse_id;
use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthenticatedUser;
use crate::api::state::AppState;
use crate::domain::id::Id;
use crate::domain::playlist::Playlist;

/// Request body for creating a playlist
#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Response from playlist creation
#[derive(Debug, Serialize)]
pub struct CreatePlaylistResponse {
    pub status: &'static str,
    pub playlist_id: Id,
    pub message: &'static str,
}

/// Request body for updating a playlist
#[derive(Debug, Deserialize)]
pub struct UpdatePlaylistRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A playlist as returned to clients
#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub owner_id: Id,
    pub videos: Vec<Id>,
}

impl From<&Playlist> for PlaylistResponse {
    fn from(playlist: &Playlist) -> Self {
        Self {
            id: playlist.id().clone(),
            name: playlist.name().to_string(),
            description: playlist.description().to_string(),
            owner_id: playlist.owner_id().clone(),
            videos: playlist.videos().to_vec(),
        }
    }
}

/// Response listing a user's playlists
#[derive(Debug, Serialize)]
pub struct UserPlaylistsResponse {
    pub status: &'static str,
    pub playlists: Vec<PlaylistResponse>,
}

/// Confirmation envelope for mutations
#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub status: &'static str,
    pub message: &'static str,
}

fn confirmation(message: &'static str) -> Json<ConfirmationResponse> {
    Json(ConfirmationResponse {
        status: "success",
        message,
    })
}

/// Create a new playlist owned by the caller
///
/// POST /api/playlists/
pub async fn create_playlist(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(owner_id)): Extension<AuthenticatedUser>,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<CreatePlaylistResponse>), ApiError> {
    let name = req.name.unwrap_or_default();
    let description = req.description.unwrap_or_default();

    let playlist =
        Playlist::new(name, description, owner_id).map_err(ApiError::bad_request)?;

    state.playlists.create(&playlist).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePlaylistResponse {
            status: "success",
            playlist_id: playlist.id().clone(),
            message: "Playlist created successfully",
        }),
    ))
}

/// Get a playlist by ID
///
/// GET /api/playlists/:playlistId
pub async fn get_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> Result<Json<PlaylistResponse>, ApiError> {
    let playlist_id = parse_id(&playlist_id, "playlist id")?;

    let playlist = state
        .playlists
        .find_by_id(&playlist_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Playlist not found"))?;

    Ok(Json(PlaylistResponse::from(&playlist)))
}

/// Update a playlist's name and/or description
///
/// PATCH /api/playlists/:playlistId
pub async fn update_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
    Json(req): Json<UpdatePlaylistRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let playlist_id = parse_id(&playlist_id, "playlist id")?;

    let mut playlist = state
        .playlists
        .find_by_id(&playlist_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Playlist not found"))?;

    if let Some(name) = req.name {
        playlist.rename(name).map_err(ApiError::bad_request)?;
    }
    if let Some(description) = req.description {
        playlist.set_description(description);
    }

    state.playlists.update(&playlist).await?;

    Ok(confirmation("Playlist updated successfully"))
}

/// Delete a playlist
///
/// DELETE /api/playlists/:playlistId
pub async fn delete_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let playlist_id = parse_id(&playlist_id, "playlist id")?;

    let deleted = state.playlists.delete(&playlist_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Playlist not found"));
    }

    Ok(confirmation("Playlist deleted successfully"))
}

/// Add a video to a playlist
///
/// PATCH /api/playlists/add/:videoId/:playlistId
///
/// Set semantics: adding a video already in the playlist is a no-op.
pub async fn add_video_to_playlist(
    State(state): State<AppState>,
    Path((video_id, playlist_id)): Path<(String, String)>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let video_id = parse_id(&video_id, "video id")?;
    let playlist_id = parse_id(&playlist_id, "playlist id")?;

    if !state.videos.exists(&video_id).await? {
        return Err(ApiError::not_found("Video not found"));
    }

    let mut playlist = state
        .playlists
        .find_by_id(&playlist_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Playlist not found"))?;

    if playlist.add_video(video_id) {
        state.playlists.update(&playlist).await?;
    }

    Ok(confirmation("Video added to playlist successfully"))
}

/// Remove a video from a playlist
///
/// PATCH /api/playlists/remove/:videoId/:playlistId
pub async fn remove_video_from_playlist(
    State(state): State<AppState>,
    Path((video_id, playlist_id)): Path<(String, String)>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let video_id = parse_id(&video_id, "video id")?;
    let playlist_id = parse_id(&playlist_id, "playlist id")?;

    if !state.videos.exists(&video_id).await? {
        return Err(ApiError::not_found("Video not found"));
    }

    let mut playlist = state
        .playlists
        .find_by_id(&playlist_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Playlist not found"))?;

    if playlist.remove_video(&video_id) {
        state.playlists.update(&playlist).await?;
    }

    Ok(confirmation("Video removed from playlist successfully"))
}

/// Get all playlists owned by a user
///
/// GET /api/playlists/user/:userId
pub async fn get_user_playlists(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserPlaylistsResponse>, ApiError> {
    let user_id = parse_id(&user_id, "user id")?;

    if !state.users.exists(&user_id).await? {
        return Err(ApiError::not_found("User not found"));
    }

    let playlists = state.playlists.find_by_owner(&user_id).await?;

    Ok(Json(UserPlaylistsResponse {
        status: "success",
        playlists: playlists.iter().map(PlaylistResponse::from).collect(),
    }))
}
