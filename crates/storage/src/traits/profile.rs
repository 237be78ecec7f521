use async_trait::async_trait;
use eduroute_core::{Profile, ProfileFields};

use crate::error::StorageError;

/// Extended profile operations, one row per account.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `None` means "not yet created" and is a valid result, not an error.
    async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>, StorageError>;

    /// Insert-or-update keyed on `user_id`; `updated_at` is refreshed on
    /// every call.
    async fn upsert_profile(
        &self,
        user_id: i64,
        fields: &ProfileFields,
    ) -> Result<Profile, StorageError>;
}
