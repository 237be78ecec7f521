use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use eduroute_core::ChatMessage;

use crate::api_error::ApiError;
use crate::api_types::ChatRequest;
use crate::extract::CurrentUser;
use crate::response_types::{ChatResponse, ClearedResponse};
use crate::AppState;

/// `POST /chat`: relay the question to the assistant and persist both
/// sides of the exchange.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let exchange = state.chat.exchange(account.id, &req.question, req.engine.as_deref()).await?;
    Ok(Json(ChatResponse { answer: exchange.answer.message }))
}

/// `GET /chat`: full history, oldest first.
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    Ok(Json(state.chat.history(account.id).await?))
}

pub async fn clear_history(
    State(state): State<Arc<AppState>>,
    CurrentUser(account): CurrentUser,
) -> Result<Json<ClearedResponse>, ApiError> {
    let deleted = state.chat.clear(account.id).await?;
    Ok(Json(ClearedResponse { deleted, success: true }))
}
