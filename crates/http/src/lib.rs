//! HTTP API server for the eduroute backend.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod api_types;
mod extract;
mod handlers;
mod response_types;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

use eduroute_ai::AiClient;
use eduroute_service::{AccountService, ChatService, ProfileService, RoadmapService};

pub use extract::CurrentUser;
pub use response_types::{AuthResponse, UserSummary};

/// Shared application state for all HTTP handlers.
///
/// Holds one instance of each service, wrapped in `Arc` for sharing
/// across request tasks.
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub profiles: Arc<ProfileService>,
    pub roadmaps: Arc<RoadmapService>,
    pub chat: Arc<ChatService>,
    pub ai: Arc<AiClient>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/google-signin", post(handlers::auth::google_signin))
        .route("/user/profile", get(handlers::user::get_account_profile))
        .route("/user/profile", put(handlers::user::update_account_profile))
        .route("/user/save-profile", post(handlers::user::save_profile))
        .route("/user/roadmap", post(handlers::roadmap::save_or_generate))
        .route("/user/roadmap", get(handlers::roadmap::get_active))
        .route("/user/roadmap/progress", put(handlers::roadmap::update_progress))
        .route("/user/progress", get(handlers::roadmap::get_progress))
        .route("/chat", post(handlers::chat::send_message))
        .route("/chat", get(handlers::chat::get_history))
        .route("/chat", delete(handlers::chat::clear_history))
        .route("/user/notifications", get(handlers::notifications::list))
        .route("/user/notifications/{id}/read", put(handlers::notifications::mark_read))
        .route("/ai/suggest-events", post(handlers::suggestions::suggest_events))
        .route("/ai/suggest-projects", post(handlers::suggestions::suggest_projects))
        .route("/questions", get(handlers::questions::list_questions))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
