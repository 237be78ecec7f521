use async_trait::async_trait;
use eduroute_core::{Account, NewAccount};

use crate::error::StorageError;

/// Account identity operations.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account. A duplicate email surfaces as
    /// [`StorageError::Duplicate`] from the unique constraint, which is
    /// what resolves concurrent signups with the same email.
    async fn create_account(&self, account: &NewAccount) -> Result<Account, StorageError>;

    /// Fetch by id.
    async fn get_account(&self, id: i64) -> Result<Option<Account>, StorageError>;

    /// Fetch by normalized email.
    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>, StorageError>;

    /// Back-fill the federated-identity reference after account linking.
    /// Only ever sets the column when it is currently NULL.
    async fn link_google_id(&self, id: i64, google_id: &str) -> Result<(), StorageError>;

    /// Update the account-level display name and string sets, returning
    /// the updated row.
    async fn update_account_fields(
        &self,
        id: i64,
        name: &str,
        interests: &[String],
        strengths: &[String],
    ) -> Result<Option<Account>, StorageError>;

    /// Delete the account and (via cascade) everything it owns.
    /// Returns `true` if a row was deleted.
    async fn delete_account(&self, id: i64) -> Result<bool, StorageError>;
}
