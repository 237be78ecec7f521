use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use eduroute_core::{Account, Profile, ProfileFields};

use crate::api_error::ApiError;
use crate::api_types::UpdateAccountRequest;
use crate::extract::CurrentUser;
use crate::AppState;

/// Combined profile view: the account row plus the extended
/// questionnaire profile. `profile` is `null` until the user has saved
/// one, which is a valid state and not an error.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub user: Account,
    pub profile: Option<Profile>,
}

pub async fn get_account_profile(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = state.profiles.get_profile(account.id).await?;
    Ok(Json(ProfileView { user: account, profile }))
}

/// `PUT /user/profile`: account-level fields (display name plus the
/// interest/strength sets kept on the users row).
pub async fn update_account_profile(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<Json<Account>, ApiError> {
    let updated = state
        .accounts
        .update_account_fields(account.id, &req.name, req.interests, req.strengths)
        .await?;
    Ok(Json(updated))
}

/// `POST /user/save-profile`: upsert of the extended questionnaire
/// profile.
pub async fn save_profile(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
    Json(fields): Json<ProfileFields>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state.profiles.save_profile(account.id, fields).await?;
    Ok(Json(profile))
}
