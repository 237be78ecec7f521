//! AccountStore implementation for PgStorage.

use async_trait::async_trait;
use eduroute_core::{Account, NewAccount};

use super::{row_to_account, PgStorage};
use crate::error::StorageError;
use crate::traits::AccountStore;

#[async_trait]
impl AccountStore for PgStorage {
    async fn create_account(&self, account: &NewAccount) -> Result<Account, StorageError> {
        let row = sqlx::query(
            "INSERT INTO users (name, email, password_hash, google_id, profile_picture)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, email, password_hash, google_id, profile_picture,
                       interests, strengths, created_at",
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.google_id)
        .bind(&account.profile_picture)
        .fetch_one(self.pool())
        .await?;
        row_to_account(&row)
    }

    async fn get_account(&self, id: i64) -> Result<Option<Account>, StorageError> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, google_id, profile_picture,
                    interests, strengths, created_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        row.as_ref().map(row_to_account).transpose()
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>, StorageError> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, google_id, profile_picture,
                    interests, strengths, created_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;
        row.as_ref().map(row_to_account).transpose()
    }

    async fn link_google_id(&self, id: i64, google_id: &str) -> Result<(), StorageError> {
        sqlx::query("UPDATE users SET google_id = $1 WHERE id = $2 AND google_id IS NULL")
            .bind(google_id)
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn update_account_fields(
        &self,
        id: i64,
        name: &str,
        interests: &[String],
        strengths: &[String],
    ) -> Result<Option<Account>, StorageError> {
        let row = sqlx::query(
            "UPDATE users SET name = $1, interests = $2, strengths = $3
             WHERE id = $4
             RETURNING id, name, email, password_hash, google_id, profile_picture,
                       interests, strengths, created_at",
        )
        .bind(name)
        .bind(serde_json::to_value(interests)?)
        .bind(serde_json::to_value(strengths)?)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        row.as_ref().map(row_to_account).transpose()
    }

    async fn delete_account(&self, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
