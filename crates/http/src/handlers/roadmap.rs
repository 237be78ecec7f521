use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use eduroute_core::Roadmap;

use crate::api_error::ApiError;
use crate::api_types::{SaveRoadmapRequest, UpdateProgressRequest};
use crate::extract::CurrentUser;
use crate::response_types::ProgressResponse;
use crate::AppState;

/// `POST /user/roadmap`: store a caller-supplied plan, or generate one
/// from the saved profile when the body carries none.
pub async fn save_or_generate(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
    Json(req): Json<SaveRoadmapRequest>,
) -> Result<(StatusCode, Json<Roadmap>), ApiError> {
    let roadmap = match req.roadmap {
        Some(plan) => state.roadmaps.save_roadmap(account.id, &plan.to_string()).await?,
        None => {
            let profile = state
                .profiles
                .get_profile(account.id)
                .await?
                .ok_or_else(|| ApiError::BadRequest("save a profile first".to_owned()))?;
            state
                .roadmaps
                .generate_roadmap(account.id, &profile.skills_to_learn, profile.planning_days)
                .await?
        },
    };
    Ok((StatusCode::CREATED, Json(roadmap)))
}

/// `GET /user/roadmap`: the active roadmap or `null`.
pub async fn get_active(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
) -> Result<Json<Option<Roadmap>>, ApiError> {
    Ok(Json(state.roadmaps.get_active_roadmap(account.id).await?))
}

pub async fn update_progress(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
    Json(req): Json<UpdateProgressRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let update = state
        .roadmaps
        .update_progress(account.id, req.progress_percentage, req.completed_tasks)
        .await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "progress_percentage": update.progress_percentage,
        "completed_tasks": update.completed_tasks,
        "milestone": update.milestone,
    })))
}

/// `GET /user/progress`: progress snapshot of the active roadmap or
/// `null`.
pub async fn get_progress(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
) -> Result<Json<Option<ProgressResponse>>, ApiError> {
    let snapshot = state.roadmaps.get_active_roadmap(account.id).await?.map(|r| {
        ProgressResponse {
            roadmap_id: r.id,
            progress_percentage: r.progress_percentage,
            completed_tasks: r.completed_tasks,
        }
    });
    Ok(Json(snapshot))
}
