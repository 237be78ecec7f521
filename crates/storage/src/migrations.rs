//! Schema migrations, run at startup.

use sqlx::PgPool;

use crate::StorageError;

/// Create all tables and indexes if they do not exist.
///
/// Every child table foreign-keys `users.id` with `ON DELETE CASCADE`:
/// deleting an account removes its messages, profile, roadmaps, and
/// notifications in one statement.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT,
            google_id TEXT UNIQUE,
            profile_picture TEXT,
            interests JSONB NOT NULL DEFAULT '[]',
            strengths JSONB NOT NULL DEFAULT '[]',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(wrap)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            sender TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(wrap)?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_messages_user_created \
         ON messages (user_id, created_at, id)",
    )
    .execute(pool)
    .await
    .map_err(wrap)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_profiles (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            education_grade TEXT,
            education_department TEXT,
            education_year TEXT,
            interests JSONB NOT NULL DEFAULT '[]',
            skills_learned JSONB NOT NULL DEFAULT '[]',
            skills_to_learn JSONB NOT NULL DEFAULT '[]',
            planning_days INTEGER NOT NULL DEFAULT 30,
            email TEXT,
            phone TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(wrap)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_roadmaps (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            roadmap_content TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'active',
            progress_percentage DOUBLE PRECISION NOT NULL DEFAULT 0,
            completed_tasks JSONB NOT NULL DEFAULT '[]',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(wrap)?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_roadmaps_user_status \
         ON user_roadmaps (user_id, status, created_at DESC)",
    )
    .execute(pool)
    .await
    .map_err(wrap)?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            kind TEXT NOT NULL,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            is_read BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(wrap)?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_notifications_user_created \
         ON notifications (user_id, created_at DESC)",
    )
    .execute(pool)
    .await
    .map_err(wrap)?;

    tracing::info!("migrations complete");
    Ok(())
}

fn wrap(err: sqlx::Error) -> StorageError {
    StorageError::Migration(err.to_string())
}
