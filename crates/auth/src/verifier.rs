//! Federated-identity verification.
//!
//! One provider implementation per deployment; the trait is the seam the
//! account service depends on.

use async_trait::async_trait;
use serde::Deserialize;

use crate::AuthError;

/// Identity extracted from a successfully verified external token.
#[derive(Debug, Clone)]
pub struct FederatedIdentity {
    /// Provider subject id (stable per user).
    pub subject: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Verifies an externally-issued login token with the identity provider.
#[async_trait]
pub trait FederatedVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<FederatedIdentity, AuthError>;
}

/// Google ID-token verification via the tokeninfo endpoint.
pub struct GoogleTokenVerifier {
    client: reqwest::Client,
    tokeninfo_url: String,
    /// When set, the token's audience must match.
    client_id: Option<String>,
}

const GOOGLE_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

#[derive(Debug, Deserialize)]
struct TokenInfo {
    sub: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
    aud: Option<String>,
}

impl GoogleTokenVerifier {
    pub fn new(client_id: Option<String>) -> Result<Self, AuthError> {
        Self::with_endpoint(GOOGLE_TOKENINFO_URL.to_owned(), client_id)
    }

    /// Endpoint override for tests.
    pub fn with_endpoint(
        tokeninfo_url: String,
        client_id: Option<String>,
    ) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self { client, tokeninfo_url: tokeninfo_url.trim_end_matches('/').to_owned(), client_id })
    }
}

#[async_trait]
impl FederatedVerifier for GoogleTokenVerifier {
    async fn verify(&self, token: &str) -> Result<FederatedIdentity, AuthError> {
        let response = self
            .client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", token)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "tokeninfo rejected external token");
            return Err(AuthError::ExternalToken(format!("provider returned {status}")));
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|_| AuthError::ExternalToken("malformed tokeninfo response".to_owned()))?;

        if let Some(ref expected) = self.client_id {
            if info.aud.as_deref() != Some(expected.as_str()) {
                return Err(AuthError::ExternalToken("audience mismatch".to_owned()));
            }
        }

        Ok(FederatedIdentity {
            subject: info.sub,
            email: info.email,
            name: info.name,
            picture: info.picture,
        })
    }
}
