//! ProfileStore implementation for PgStorage.

use async_trait::async_trait;
use eduroute_core::{Profile, ProfileFields};

use super::{row_to_profile, PgStorage};
use crate::error::StorageError;
use crate::traits::ProfileStore;

const PROFILE_COLUMNS: &str = "id, user_id, education_grade, education_department, \
     education_year, interests, skills_learned, skills_to_learn, planning_days, \
     email, phone, created_at, updated_at";

#[async_trait]
impl ProfileStore for PgStorage {
    async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;
        row.as_ref().map(row_to_profile).transpose()
    }

    async fn upsert_profile(
        &self,
        user_id: i64,
        fields: &ProfileFields,
    ) -> Result<Profile, StorageError> {
        // Single statement keyed on the user_id unique constraint, so two
        // concurrent saves cannot create a second row. updated_at is
        // refreshed on every conflict-update.
        let row = sqlx::query(&format!(
            "INSERT INTO user_profiles
                 (user_id, education_grade, education_department, education_year,
                  interests, skills_learned, skills_to_learn, planning_days, email, phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (user_id) DO UPDATE SET
                 education_grade = EXCLUDED.education_grade,
                 education_department = EXCLUDED.education_department,
                 education_year = EXCLUDED.education_year,
                 interests = EXCLUDED.interests,
                 skills_learned = EXCLUDED.skills_learned,
                 skills_to_learn = EXCLUDED.skills_to_learn,
                 planning_days = EXCLUDED.planning_days,
                 email = EXCLUDED.email,
                 phone = EXCLUDED.phone,
                 updated_at = NOW()
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&fields.education_grade)
        .bind(&fields.education_department)
        .bind(&fields.education_year)
        .bind(serde_json::to_value(&fields.interests)?)
        .bind(serde_json::to_value(&fields.skills_learned)?)
        .bind(serde_json::to_value(&fields.skills_to_learn)?)
        .bind(fields.planning_days)
        .bind(&fields.email)
        .bind(&fields.phone)
        .fetch_one(self.pool())
        .await?;
        row_to_profile(&row)
    }
}
