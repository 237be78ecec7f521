use std::sync::Arc;

use eduroute_auth::{AuthError, FederatedVerifier, PasswordHasher, TokenSigner};
use eduroute_core::{
    canonicalize_tags, display_name_from_email, normalize_email, Account, NewAccount,
};
use eduroute_storage::traits::AccountStore;

use crate::error::ServiceError;

/// Result of a successful authentication: the account plus a freshly
/// issued session token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub account: Account,
    pub token: String,
}

/// Creates and authenticates account identities.
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    hasher: PasswordHasher,
    signer: TokenSigner,
    federated: Arc<dyn FederatedVerifier>,
}

impl AccountService {
    #[must_use]
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: PasswordHasher,
        signer: TokenSigner,
        federated: Arc<dyn FederatedVerifier>,
    ) -> Self {
        Self { store, hasher, signer, federated }
    }

    /// Email/password signup. Duplicate emails fail with `EmailTaken`,
    /// whether caught by the pre-check or by the unique constraint when
    /// two signups race.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ServiceError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(ServiceError::InvalidInput(
                "name, email, and password are required".to_owned(),
            ));
        }
        let email = normalize_email(email);

        if self.store.get_account_by_email(&email).await?.is_some() {
            return Err(ServiceError::EmailTaken);
        }

        let password_hash = self.hasher.hash(password)?;
        let account = self
            .store
            .create_account(&NewAccount {
                name: name.trim().to_owned(),
                email: email.clone(),
                password_hash: Some(password_hash),
                google_id: None,
                profile_picture: None,
            })
            .await
            .map_err(ServiceError::from_account_insert)?;

        let token = self.signer.issue(account.id, &account.email)?;
        Ok(AuthSession { account, token })
    }

    /// Email/password login. Unknown email, wrong password, and
    /// federated-only accounts all fail with the same error.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ServiceError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ServiceError::InvalidInput("email and password are required".to_owned()));
        }
        let email = normalize_email(email);
        let account = self
            .store
            .get_account_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, account.password_hash.as_deref()) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.signer.issue(account.id, &account.email)?;
        Ok(AuthSession { account, token })
    }

    /// Federated login: verify the external token, then link or create.
    ///
    /// An existing account with the same email gets its federated
    /// reference back-filled when absent (capabilities are only ever
    /// gained). A new account is created without a password otherwise.
    pub async fn authenticate_federated(
        &self,
        external_token: &str,
    ) -> Result<AuthSession, ServiceError> {
        if external_token.trim().is_empty() {
            return Err(ServiceError::InvalidInput("missing ID token".to_owned()));
        }
        let identity = self.federated.verify(external_token).await?;
        let email = normalize_email(&identity.email);

        if let Some(existing) = self.store.get_account_by_email(&email).await? {
            if !existing.has_federated_identity() {
                self.store.link_google_id(existing.id, &identity.subject).await?;
            }
            let token = self.signer.issue(existing.id, &existing.email)?;
            return Ok(AuthSession { account: existing, token });
        }

        let name = identity
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| display_name_from_email(&email));
        let account = self
            .store
            .create_account(&NewAccount {
                name,
                email,
                password_hash: None,
                google_id: Some(identity.subject),
                profile_picture: identity.picture,
            })
            .await
            .map_err(ServiceError::from_account_insert)?;

        let token = self.signer.issue(account.id, &account.email)?;
        Ok(AuthSession { account, token })
    }

    /// Resolve a verified token's subject to the current stored account.
    /// A missing row means the account was deleted after issuance and the
    /// token no longer authorizes anything.
    pub async fn resolve_token(&self, token: &str) -> Result<Account, ServiceError> {
        let claims = self.signer.verify(token)?;
        self.store
            .get_account(claims.sub)
            .await?
            .ok_or_else(|| AuthError::TokenInvalid.into())
    }

    /// Account-level profile view (`GET /user/profile`).
    pub async fn get_account(&self, id: i64) -> Result<Option<Account>, ServiceError> {
        Ok(self.store.get_account(id).await?)
    }

    /// Account-level profile update: display name plus the two string
    /// sets kept on the users row.
    pub async fn update_account_fields(
        &self,
        id: i64,
        name: &str,
        interests: Vec<String>,
        strengths: Vec<String>,
    ) -> Result<Account, ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("name is required".to_owned()));
        }
        let interests = canonicalize_tags(interests);
        let strengths = canonicalize_tags(strengths);
        self.store
            .update_account_fields(id, name.trim(), &interests, &strengths)
            .await?
            .ok_or(ServiceError::NotFound("account"))
    }

    /// Delete the account; children go with it via cascade.
    pub async fn delete_account(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.store.delete_account(id).await?)
    }
}
