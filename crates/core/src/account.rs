use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root identity entity. Every other entity is owned by exactly one account
/// and is cascade-deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Bcrypt hash. Absent for accounts created through federated login only.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// Federated-identity subject id (unique when present).
    pub google_id: Option<String>,
    pub profile_picture: Option<String>,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// True when the account can authenticate with a password.
    #[must_use]
    pub const fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// True when the account is linked to a federated identity.
    #[must_use]
    pub const fn has_federated_identity(&self) -> bool {
        self.google_id.is_some()
    }
}

/// Fields for creating an account. At least one of `password_hash` /
/// `google_id` must be set so the account has a usable authentication
/// path.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
    pub profile_picture: Option<String>,
}

/// Normalizes an email for storage and lookup: trimmed and lowercased.
///
/// The original schema relied on a case-insensitive collation for the
/// unique email column; normalizing at the boundary gives the same
/// uniqueness semantics on a case-sensitive store.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Derives a display name from an email when the identity provider
/// returns none: the local part before `@`.
#[must_use]
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_owned()
}
