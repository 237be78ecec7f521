//! Typed error enum for the service layer.
//!
//! Unifies storage, auth, and AI-client failures so HTTP handlers can
//! match on specific failure modes for status mapping.

use eduroute_ai::AiError;
use eduroute_auth::AuthError;
use eduroute_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Authentication failed (credentials, tokens, provider).
    #[error("auth: {0}")]
    Auth(#[from] AuthError),

    /// The AI microservice call failed.
    #[error("ai service: {0}")]
    Ai(#[from] AiError),

    /// Caller provided invalid input (missing field, out-of-range value).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The email is already registered. Kept separate from the generic
    /// duplicate so the HTTP layer can answer 409 with the original's
    /// wording.
    #[error("email already registered")]
    EmailTaken,

    /// A required entity is absent where `null` is not an acceptable
    /// answer (e.g. progress update with no active roadmap).
    #[error("not found: {0}")]
    NotFound(&'static str),
}

impl ServiceError {
    /// Whether this error should surface as 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Auth(e) if e.is_unauthorized())
    }

    /// Maps a storage duplicate from the users.email unique constraint
    /// (the losing side of a concurrent signup race) to `EmailTaken`.
    #[must_use]
    pub fn from_account_insert(err: StorageError) -> Self {
        if err.is_duplicate() {
            Self::EmailTaken
        } else {
            Self::Storage(err)
        }
    }
}
