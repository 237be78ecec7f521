use async_trait::async_trait;
use eduroute_core::{ChatMessage, SenderRole};

use crate::error::StorageError;

/// Append-only chat log operations.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Append one message. Rows are immutable once created.
    async fn append_message(
        &self,
        user_id: i64,
        sender: SenderRole,
        message: &str,
    ) -> Result<ChatMessage, StorageError>;

    /// Full history for an account, ascending by `(created_at, id)`.
    async fn list_messages(&self, user_id: i64) -> Result<Vec<ChatMessage>, StorageError>;

    /// Delete all messages for an account. Returns the number removed.
    async fn clear_messages(&self, user_id: i64) -> Result<u64, StorageError>;
}
