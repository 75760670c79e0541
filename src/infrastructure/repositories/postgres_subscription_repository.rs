use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::id::Id;
use crate::domain::repositories::{StoreError, SubscriptionRepository};
use crate::domain::subscription::Subscription;

/// PostgreSQL implementation of SubscriptionRepository
///
/// Expects a `subscriptions (channel_id text, subscriber_id text)` table
/// with a unique constraint on the pair, which backs the one-record-per-pair
/// invariant.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn find(
        &self,
        channel_id: &Id,
        subscriber_id: &Id,
    ) -> Result<Option<Subscription>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT channel_id, subscriber_id
            FROM subscriptions
            WHERE channel_id = $1 AND subscriber_id = $2
            "#,
        )
        .bind(channel_id.as_str())
        .bind(subscriber_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to find subscription: {}", e)))?;

        row.map(|r| {
            let channel_id: String = r
                .try_get("channel_id")
                .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
            let subscriber_id: String = r
                .try_get("subscriber_id")
                .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
            Ok(Subscription::new(
                Id::from_persistence(channel_id),
                Id::from_persistence(subscriber_id),
            ))
        })
        .transpose()
    }

    async fn create(&self, subscription: &Subscription) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (channel_id, subscriber_id)
            VALUES ($1, $2)
            ON CONFLICT (channel_id, subscriber_id) DO NOTHING
            "#,
        )
        .bind(subscription.channel_id.as_str())
        .bind(subscription.subscriber_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to create subscription: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, channel_id: &Id, subscriber_id: &Id) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM subscriptions
            WHERE channel_id = $1 AND subscriber_id = $2
            "#,
        )
        .bind(channel_id.as_str())
        .bind(subscriber_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to delete subscription: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn subscribers_of(&self, channel_id: &Id) -> Result<Vec<Id>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT subscriber_id
            FROM subscriptions
            WHERE channel_id = $1
            ORDER BY subscriber_id
            "#,
        )
        .bind(channel_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to list subscribers: {}", e)))?;

        rows.into_iter()
            .map(|r| {
                let subscriber_id: String = r
                    .try_get("subscriber_id")
                    .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
                Ok(Id::from_persistence(subscriber_id))
            })
            .collect()
    }

    async fn channels_of(&self, subscriber_id: &Id) -> Result<Vec<Id>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT channel_id
            FROM subscriptions
            WHERE subscriber_id = $1
            ORDER BY channel_id
            "#,
        )
        .bind(subscriber_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to list channels: {}", e)))?;

        rows.into_iter()
            .map(|r| {
                let channel_id: String = r
                    .try_get("channel_id")
                    .map_err(|e| StoreError::Backend(format!("Failed to read row: {}", e)))?;
                Ok(Id::from_persistence(channel_id))
            })
            .collect()
    }
}
