use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use eduroute_core::Notification;

use crate::api_error::ApiError;
use crate::extract::CurrentUser;
use crate::response_types::MessageResponse;
use crate::AppState;

const NOTIFICATION_PAGE_SIZE: i64 = 50;

/// `GET /user/notifications`: newest first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let rows = state.roadmaps.list_notifications(account.id, NOTIFICATION_PAGE_SIZE).await?;
    Ok(Json(rows))
}

/// `PUT /user/notifications/{id}/read`, scoped to the owning account.
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.roadmaps.mark_notification_read(account.id, id).await?;
    Ok(Json(MessageResponse { message: "Notification marked as read", success: true }))
}
