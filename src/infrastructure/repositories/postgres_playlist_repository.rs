use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::id::Id;
use crate::domain::playlist::Playlist;
use crate::domain::repositories::{PlaylistRepository, StoreError};

/// PostgreSQL implementation of PlaylistRepository
///
/// Expects a `playlists (id text primary key, name text, description text,
/// owner_id text)` table and a `playlist_videos (playlist_id text,
/// video_id text, position int)` table holding the video list.
pub struct PostgresPlaylistRepository {
    pool: PgPool,
}

impl PostgresPlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn videos_of(&self, playlist_id: &Id) -> Result<Vec<Id>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT video_id
            FROM playlist_videos
            WHERE playlist_id = $1
            ORDER BY position
            "#,
        )
        .bind(playlist_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to list playlist videos: {}", e)))?;

        rows.into_iter()
            .map(|r| {
                let video_id: String = r
                    .try_get("video_id")
                    .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
                Ok(Id::from_persistence(video_id))
            })
            .collect()
    }

    async fn write_videos(&self, playlist: &Playlist) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM playlist_videos WHERE playlist_id = $1")
            .bind(playlist.id().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                StoreError::Backend(format!("Failed to clear playlist videos: {}", e))
            })?;

        for (position, video_id) in playlist.videos().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO playlist_videos (playlist_id, video_id, position)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(playlist.id().as_str())
            .bind(video_id.as_str())
            .bind(position as i32)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                StoreError::Backend(format!("Failed to save playlist video: {}", e))
            })?;
        }

        Ok(())
    }

    fn row_fields(row: &PgRow) -> Result<(Id, String, String, Id), StoreError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
        let description: String = row
            .try_get("description")
            .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
        Ok((
            Id::from_persistence(id),
            name,
            description,
            Id::from_persistence(owner_id),
        ))
    }
}

#[async_trait]
impl PlaylistRepository for PostgresPlaylistRepository {
    async fn create(&self, playlist: &Playlist) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO playlists (id, name, description, owner_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(playlist.id().as_str())
        .bind(playlist.name())
        .bind(playlist.description())
        .bind(playlist.owner_id().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to save playlist: {}", e)))?;

        self.write_videos(playlist).await
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<Playlist>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, owner_id
            FROM playlists
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to find playlist: {}", e)))?;

        match row {
            Some(row) => {
                let (id, name, description, owner_id) = Self::row_fields(&row)?;
                let videos = self.videos_of(&id).await?;
                Ok(Some(Playlist::from_persistence(
                    id,
                    name,
                    description,
                    owner_id,
                    videos,
                )))
            }
            None => Ok(None),
        }
    }

    async fn find_by_owner(&self, owner_id: &Id) -> Result<Vec<Playlist>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, owner_id
            FROM playlists
            WHERE owner_id = $1
            ORDER BY name
            "#,
        )
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to list playlists: {}", e)))?;

        let mut playlists = Vec::with_capacity(rows.len());
        for row in rows {
            let (id, name, description, owner_id) = Self::row_fields(&row)?;
            let videos = self.videos_of(&id).await?;
            playlists.push(Playlist::from_persistence(
                id,
                name,
                description,
                owner_id,
                videos,
            ));
        }

        Ok(playlists)
    }

    async fn update(&self, playlist: &Playlist) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE playlists
            SET name = $2, description = $3
            WHERE id = $1
            "#,
        )
        .bind(playlist.id().as_str())
        .bind(playlist.name())
        .bind(playlist.description())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to update playlist: {}", e)))?;

        self.write_videos(playlist).await
    }

    async fn delete(&self, id: &Id) -> Result<bool, StoreError> {
        sqlx::query("DELETE FROM playlist_videos WHERE playlist_id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                StoreError::Backend(format!("Failed to clear playlist videos: {}", e))
            })?;

        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to delete playlist: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
