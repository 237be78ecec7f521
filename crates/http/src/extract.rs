//! Bearer-token authentication extractor.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use eduroute_core::Account;

use crate::api_error::ApiError;
use crate::AppState;

/// The authenticated account, resolved from `Authorization: Bearer`.
///
/// Verification re-fetches the account row, so a token issued before
/// the account was deleted stops working immediately.
pub struct CurrentUser(pub Account);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized("missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized("malformed authorization header"))?;

        let account = state.accounts.resolve_token(token).await?;
        Ok(Self(account))
    }
}
