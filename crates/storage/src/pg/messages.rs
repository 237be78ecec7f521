//! ChatStore implementation for PgStorage.

use async_trait::async_trait;
use eduroute_core::{ChatMessage, SenderRole};

use super::{row_to_message, PgStorage};
use crate::error::StorageError;
use crate::traits::ChatStore;

#[async_trait]
impl ChatStore for PgStorage {
    async fn append_message(
        &self,
        user_id: i64,
        sender: SenderRole,
        message: &str,
    ) -> Result<ChatMessage, StorageError> {
        let row = sqlx::query(
            "INSERT INTO messages (user_id, sender, message)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, sender, message, created_at",
        )
        .bind(user_id)
        .bind(sender.to_string())
        .bind(message)
        .fetch_one(self.pool())
        .await?;
        row_to_message(&row)
    }

    async fn list_messages(&self, user_id: i64) -> Result<Vec<ChatMessage>, StorageError> {
        // Ties on created_at are broken by id, so the total order is stable.
        let rows = sqlx::query(
            "SELECT id, user_id, sender, message, created_at
             FROM messages WHERE user_id = $1
             ORDER BY created_at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(row_to_message).collect()
    }

    async fn clear_messages(&self, user_id: i64) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM messages WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
