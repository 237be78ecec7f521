//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into JSON responses with status codes so
//! handlers can return `Result<Json<T>, ApiError>` instead of losing
//! error context with bare `StatusCode`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use eduroute_auth::AuthError;
use eduroute_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to a JSON response: `{"error": "message"}`.
///
/// `Internal` and `Upstream` log the real error server-side and return
/// a static message to the client; no error detail leakage.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request, invalid input from the caller.
    BadRequest(String),
    /// 401 Unauthorized. The message distinguishes an expired session
    /// from a malformed one but never enumerates accounts.
    Unauthorized(&'static str),
    /// 404 Not Found.
    NotFound(String),
    /// 409 Conflict, currently only the duplicate-email signup.
    Conflict(String),
    /// 502 Bad Gateway, the AI service failed or is unreachable.
    Upstream(anyhow::Error),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.to_owned()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Upstream(err) => {
                tracing::error!(error = ?err, "upstream AI service error");
                (StatusCode::BAD_GATEWAY, "AI service unavailable".to_owned())
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<eduroute_ai::AiError> for ApiError {
    fn from(err: eduroute_ai::AiError) -> Self {
        Self::Upstream(err.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::EmailTaken => Self::Conflict("Email already registered".to_owned()),
            ServiceError::NotFound(entity) => Self::NotFound(format!("{entity} not found")),
            ServiceError::Auth(AuthError::TokenExpired) => {
                Self::Unauthorized("session expired, please log in again")
            },
            ServiceError::Auth(ref e) if e.is_unauthorized() => {
                Self::Unauthorized("invalid credentials")
            },
            ServiceError::Ai(e) => Self::Upstream(e.into()),
            other => Self::Internal(other.into()),
        }
    }
}
