//! One-way salted password hashing over bcrypt.

use crate::AuthError;

/// Bcrypt work factor used by the original deployment.
const DEFAULT_COST: u32 = 10;

/// Hashes and verifies password credentials.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password. The salt is embedded in the output.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Verify a plaintext password against an optional stored hash.
    ///
    /// `None` (federated-only account) and a non-matching password both
    /// return `false`; callers map either to the same uniform
    /// `InvalidCredentials` so nothing leaks about which half failed.
    #[must_use]
    pub fn verify(&self, password: &str, stored_hash: Option<&str>) -> bool {
        match stored_hash {
            Some(hash) => bcrypt::verify(password, hash).unwrap_or(false),
            None => false,
        }
    }
}
