use std::sync::Arc;

use eduroute_core::{canonicalize_tags, Profile, ProfileFields};
use eduroute_storage::traits::ProfileStore;

use crate::error::ServiceError;

/// Extended-profile operations (the `user_profiles` row).
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    #[must_use]
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// `None` means the account has not filled in a profile yet.
    pub async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>, ServiceError> {
        Ok(self.store.get_profile(user_id).await?)
    }

    /// Insert-or-update. String sets are canonicalized before storage so
    /// a later read returns the same sets modulo order and duplicates.
    pub async fn save_profile(
        &self,
        user_id: i64,
        mut fields: ProfileFields,
    ) -> Result<Profile, ServiceError> {
        if fields.planning_days <= 0 {
            return Err(ServiceError::InvalidInput(
                "planning_days must be positive".to_owned(),
            ));
        }
        fields.interests = canonicalize_tags(fields.interests);
        fields.skills_learned = canonicalize_tags(fields.skills_learned);
        fields.skills_to_learn = canonicalize_tags(fields.skills_to_learn);
        Ok(self.store.upsert_profile(user_id, &fields).await?)
    }
}
