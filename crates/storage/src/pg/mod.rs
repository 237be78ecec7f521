//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod accounts;
mod messages;
mod notifications;
mod profiles;
mod roadmaps;

use chrono::{DateTime, Utc};
use eduroute_core::{
    Account, ChatMessage, Notification, NotificationKind, Profile, Roadmap, RoadmapStatus,
    SenderRole,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::migrations::run_migrations;

const POOL_MAX_CONNECTIONS: u32 = 10;
const POOL_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Shared handle over the connection pool. Cloning is cheap; the pool
/// itself is the only process-wide shared resource.
#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, bound the pool, and run migrations.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(POOL_ACQUIRE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    pub(crate) const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Parse-or-default for JSONB array columns: malformed stored data decodes
/// to an empty set instead of failing the read.
pub(crate) fn parse_string_array(val: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(val.clone()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "malformed JSON array column, defaulting to empty");
        Vec::new()
    })
}

pub(crate) fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<Account, StorageError> {
    let interests: serde_json::Value = row.try_get("interests")?;
    let strengths: serde_json::Value = row.try_get("strengths")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Account {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        google_id: row.try_get("google_id")?,
        profile_picture: row.try_get("profile_picture")?,
        interests: parse_string_array(&interests),
        strengths: parse_string_array(&strengths),
        created_at,
    })
}

pub(crate) fn row_to_message(row: &sqlx::postgres::PgRow) -> Result<ChatMessage, StorageError> {
    let sender_str: String = row.try_get("sender")?;
    let sender = sender_str.parse::<SenderRole>().unwrap_or_else(|_| {
        tracing::warn!(invalid_sender = %sender_str, "corrupt sender role in DB, defaulting to user");
        SenderRole::User
    });
    Ok(ChatMessage {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        sender,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(crate) fn row_to_profile(row: &sqlx::postgres::PgRow) -> Result<Profile, StorageError> {
    let interests: serde_json::Value = row.try_get("interests")?;
    let skills_learned: serde_json::Value = row.try_get("skills_learned")?;
    let skills_to_learn: serde_json::Value = row.try_get("skills_to_learn")?;
    Ok(Profile {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        education_grade: row.try_get("education_grade")?,
        education_department: row.try_get("education_department")?,
        education_year: row.try_get("education_year")?,
        interests: parse_string_array(&interests),
        skills_learned: parse_string_array(&skills_learned),
        skills_to_learn: parse_string_array(&skills_to_learn),
        planning_days: row.try_get("planning_days")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_roadmap(row: &sqlx::postgres::PgRow) -> Result<Roadmap, StorageError> {
    let status_str: String = row.try_get("status")?;
    let status = status_str.parse::<RoadmapStatus>().unwrap_or_else(|_| {
        tracing::warn!(invalid_status = %status_str, "corrupt roadmap status in DB, defaulting to active");
        RoadmapStatus::Active
    });
    let completed_tasks: serde_json::Value = row.try_get("completed_tasks")?;
    Ok(Roadmap {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        roadmap_content: row.try_get("roadmap_content")?,
        status,
        progress_percentage: row.try_get("progress_percentage")?,
        completed_tasks: parse_string_array(&completed_tasks),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_notification(
    row: &sqlx::postgres::PgRow,
) -> Result<Notification, StorageError> {
    let kind_str: String = row.try_get("kind")?;
    let kind = kind_str.parse::<NotificationKind>().unwrap_or_else(|_| {
        tracing::warn!(invalid_kind = %kind_str, "corrupt notification kind in DB, defaulting to daily_reminder");
        NotificationKind::DailyReminder
    });
    Ok(Notification {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        kind,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        is_read: row.try_get("is_read")?,
        created_at: row.try_get("created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_string_array_defaults_on_malformed_data() {
        assert_eq!(
            parse_string_array(&serde_json::json!(["a", "b"])),
            vec!["a".to_owned(), "b".to_owned()]
        );
        assert!(parse_string_array(&serde_json::json!({"not": "an array"})).is_empty());
        assert!(parse_string_array(&serde_json::json!(42)).is_empty());
        assert!(parse_string_array(&serde_json::Value::Null).is_empty());
    }
}
