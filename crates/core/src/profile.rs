use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default planning horizon in days when the caller supplies none.
pub const DEFAULT_PLANNING_DAYS: i32 = 30;

/// Extended per-account attributes, one row per account (upsert semantics).
///
/// The `interests` set here is independent of the account-level
/// `interests`/`strengths` columns; both are kept, neither supersedes
/// the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub education_grade: Option<String>,
    pub education_department: Option<String>,
    pub education_year: Option<String>,
    pub interests: Vec<String>,
    pub skills_learned: Vec<String>,
    pub skills_to_learn: Vec<String>,
    pub planning_days: i32,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted by the profile upsert. Everything is optional except
/// the string sets, which default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFields {
    pub education_grade: Option<String>,
    pub education_department: Option<String>,
    pub education_year: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills_learned: Vec<String>,
    #[serde(default)]
    pub skills_to_learn: Vec<String>,
    #[serde(default = "default_planning_days")]
    pub planning_days: i32,
    pub email: Option<String>,
    pub phone: Option<String>,
}

const fn default_planning_days() -> i32 {
    DEFAULT_PLANNING_DAYS
}

/// Canonicalizes a string set: trims entries, drops empties, and removes
/// duplicates while preserving first-occurrence order.
#[must_use]
pub fn canonicalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_drops_blanks_and_duplicates() {
        let tags = vec![
            " AI ".to_owned(),
            String::new(),
            "AI".to_owned(),
            "robotics".to_owned(),
            "  ".to_owned(),
        ];
        assert_eq!(canonicalize_tags(tags), vec!["AI".to_owned(), "robotics".to_owned()]);
    }

    #[test]
    fn profile_fields_default_planning_days() {
        let fields: ProfileFields = serde_json::from_str("{}").unwrap();
        assert_eq!(fields.planning_days, DEFAULT_PLANNING_DAYS);
        assert!(fields.interests.is_empty());
    }
}
