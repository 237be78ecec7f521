//! Signed session tokens bound to account id and email.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Session lifetime when `EDUROUTE_TOKEN_TTL_DAYS` is unset.
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims: account id, email, expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id.
    pub sub: i64,
    pub email: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issues and verifies session tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner").field("secret", &"***").field("ttl", &self.ttl).finish()
    }
}

impl TokenSigner {
    #[must_use]
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issue a token for an authenticated account.
    pub fn issue(&self, account_id: i64, email: &str) -> Result<String, AuthError> {
        let exp = Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AuthError::Encode("expiry overflow".to_owned()))?
            .timestamp();
        let claims = Claims { sub: account_id, email: email.to_owned(), exp };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Encode(e.to_string()))
    }

    /// Verify signature and expiry, distinguishing "expired" from
    /// "malformed/invalid" for client messaging. Both are unauthorized.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })
    }
}
