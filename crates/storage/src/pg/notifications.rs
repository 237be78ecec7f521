//! NotificationStore implementation for PgStorage.

use async_trait::async_trait;
use eduroute_core::{Notification, NotificationKind};

use super::{row_to_notification, PgStorage};
use crate::error::StorageError;
use crate::traits::NotificationStore;

#[async_trait]
impl NotificationStore for PgStorage {
    async fn insert_notification(
        &self,
        user_id: i64,
        kind: NotificationKind,
        title: &str,
        body: &str,
    ) -> Result<Notification, StorageError> {
        let row = sqlx::query(
            "INSERT INTO notifications (user_id, kind, title, body)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, kind, title, body, is_read, created_at",
        )
        .bind(user_id)
        .bind(kind.to_string())
        .bind(title)
        .bind(body)
        .fetch_one(self.pool())
        .await?;
        row_to_notification(&row)
    }

    async fn list_notifications(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<Notification>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, user_id, kind, title, body, is_read, created_at
             FROM notifications WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(row_to_notification).collect()
    }

    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
