use async_trait::async_trait;
use eduroute_core::{Notification, NotificationKind};

use crate::error::StorageError;

/// Persisted in-app notification records.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert_notification(
        &self,
        user_id: i64,
        kind: NotificationKind,
        title: &str,
        body: &str,
    ) -> Result<Notification, StorageError>;

    /// Most recent first, capped at `limit`.
    async fn list_notifications(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<Notification>, StorageError>;

    /// Mark one notification read, scoped to the owning account.
    /// Returns `true` if a row was updated.
    async fn mark_notification_read(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<bool, StorageError>;
}
