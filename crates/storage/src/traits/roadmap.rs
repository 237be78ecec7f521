use async_trait::async_trait;
use eduroute_core::Roadmap;

use crate::error::StorageError;

/// Roadmap and progress operations.
#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Insert a new roadmap row with status `active` and progress 0.
    /// Prior active rows are left untouched.
    async fn insert_roadmap(&self, user_id: i64, content: &str) -> Result<Roadmap, StorageError>;

    /// The most-recently-created `active` roadmap for the account.
    async fn get_active_roadmap(&self, user_id: i64) -> Result<Option<Roadmap>, StorageError>;

    /// Overwrite percentage and completed-task set on the most recent
    /// active roadmap. Returns the number of rows updated (0 when the
    /// account has no active roadmap).
    async fn update_progress(
        &self,
        user_id: i64,
        percentage: f64,
        completed_tasks: &[String],
    ) -> Result<u64, StorageError>;
}
