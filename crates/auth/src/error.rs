//! Typed error enum for the auth crate.

use thiserror::Error;

/// Authentication failures. `InvalidCredentials` deliberately carries no
/// detail: unknown email and wrong password must be indistinguishable to
/// the caller.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Signature valid but the token is past its expiry.
    #[error("token expired")]
    TokenExpired,

    /// Malformed token, bad signature, or wrong claims shape.
    #[error("invalid token")]
    TokenInvalid,

    /// The identity provider rejected the external token.
    #[error("invalid external token: {0}")]
    ExternalToken(String),

    /// Could not reach the identity provider.
    #[error("identity provider request failed: {0}")]
    Provider(#[from] reqwest::Error),

    /// Bcrypt hashing failed (cost out of range, malformed stored hash).
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token could not be signed.
    #[error("token encoding failed: {0}")]
    Encode(String),
}

impl AuthError {
    /// True for the failure modes a client should see as 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::TokenExpired
                | Self::TokenInvalid
                | Self::ExternalToken(_)
        )
    }
}
