use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api_error::ApiError;
use crate::api_types::SuggestionRequest;
use crate::extract::CurrentUser;
use crate::AppState;

/// Thin authed proxies to the AI service's suggestion routes. The
/// response JSON passes through untouched.
pub async fn suggest_events(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let completion = resolve_completion(&state, account.id, req.completion_percentage).await?;
    let body = state.ai.suggest_events(account.id, &req.domain, completion).await?;
    Ok(Json(body))
}

pub async fn suggest_projects(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let completion = resolve_completion(&state, account.id, req.completion_percentage).await?;
    let body = state.ai.suggest_projects(account.id, &req.domain, completion).await?;
    Ok(Json(body))
}

/// Explicit completion wins; otherwise the active roadmap's stored
/// progress, or 0 when there is none.
async fn resolve_completion(
    state: &Arc<AppState>,
    user_id: i64,
    explicit: Option<f64>,
) -> Result<f64, ApiError> {
    if let Some(pct) = explicit {
        return Ok(pct);
    }
    let roadmap = state.roadmaps.get_active_roadmap(user_id).await?;
    Ok(roadmap.map_or(0.0, |r| r.progress_percentage))
}
