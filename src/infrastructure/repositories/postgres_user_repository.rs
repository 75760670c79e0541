use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::id::Id;
use crate::domain::repositories::{StoreError, UserRepository};

/// PostgreSQL implementation of UserRepository
///
/// Reads the `users (id text primary key, …)` table owned by the account
/// service.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn exists(&self, id: &Id) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1) AS present")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to check user: {}", e)))?;

        row.try_get("present")
            .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))
    }
}
