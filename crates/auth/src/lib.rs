//! Authentication building blocks: signed session tokens, salted password
//! hashes, and federated-identity verification.
//!
//! The two credential paths (password, federated token) are the only
//! variants; a deployment picks exactly one [`FederatedVerifier`]
//! implementation rather than carrying several provider integrations.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod password;
mod token;
mod verifier;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use token::{Claims, TokenSigner, DEFAULT_TOKEN_TTL_DAYS};
pub use verifier::{FederatedIdentity, FederatedVerifier, GoogleTokenVerifier};
