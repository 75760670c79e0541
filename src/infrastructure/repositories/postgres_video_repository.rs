use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::id::Id;
use crate::domain::repositories::{StoreError, VideoRepository};

/// PostgreSQL implementation of VideoRepository
///
/// Reads the `videos (id text primary key, …)` table owned by the video
/// upload service.
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn exists(&self, id: &Id) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM videos WHERE id = $1) AS present")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to check video: {}", e)))?;

        row.try_get("present")
            .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))
    }
}
