use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api_error::ApiError;
use crate::api_types::{GoogleSigninRequest, LoginRequest, SignupRequest};
use crate::response_types::{AuthResponse, UserSummary};
use crate::AppState;

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let session = state.accounts.register(&req.name, &req.email, &req.password).await?;
    let user = UserSummary::from(&session.account);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new("User registered successfully", session.token, user)),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let session = state.accounts.authenticate(&req.email, &req.password).await?;
    let user = UserSummary::from(&session.account);
    Ok(Json(AuthResponse::new("Login successful", session.token, user)))
}

pub async fn google_signin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GoogleSigninRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let session = state.accounts.authenticate_federated(&req.token).await?;
    let user = UserSummary::from(&session.account);
    Ok(Json(AuthResponse::new("Login successful", session.token, user)))
}
