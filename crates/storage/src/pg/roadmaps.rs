//! RoadmapStore implementation for PgStorage.

use async_trait::async_trait;
use eduroute_core::Roadmap;

use super::{row_to_roadmap, PgStorage};
use crate::error::StorageError;
use crate::traits::RoadmapStore;

const ROADMAP_COLUMNS: &str = "id, user_id, roadmap_content, status, progress_percentage, \
     completed_tasks, created_at, updated_at";

#[async_trait]
impl RoadmapStore for PgStorage {
    async fn insert_roadmap(&self, user_id: i64, content: &str) -> Result<Roadmap, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO user_roadmaps (user_id, roadmap_content)
             VALUES ($1, $2)
             RETURNING {ROADMAP_COLUMNS}"
        ))
        .bind(user_id)
        .bind(content)
        .fetch_one(self.pool())
        .await?;
        row_to_roadmap(&row)
    }

    async fn get_active_roadmap(&self, user_id: i64) -> Result<Option<Roadmap>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {ROADMAP_COLUMNS} FROM user_roadmaps
             WHERE user_id = $1 AND status = 'active'
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        ))
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;
        row.as_ref().map(row_to_roadmap).transpose()
    }

    async fn update_progress(
        &self,
        user_id: i64,
        percentage: f64,
        completed_tasks: &[String],
    ) -> Result<u64, StorageError> {
        // Only the most recent active row takes progress updates; older
        // active rows left behind by repeated saves are ignored.
        let result = sqlx::query(
            "UPDATE user_roadmaps
             SET progress_percentage = $1, completed_tasks = $2, updated_at = NOW()
             WHERE id = (
                 SELECT id FROM user_roadmaps
                 WHERE user_id = $3 AND status = 'active'
                 ORDER BY created_at DESC, id DESC
                 LIMIT 1
             )",
        )
        .bind(percentage)
        .bind(serde_json::to_value(completed_tasks)?)
        .bind(user_id)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected())
    }
}
