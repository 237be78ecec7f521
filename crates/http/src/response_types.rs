//! Response bodies. Auth responses mirror the shape the frontend
//! already consumes: `{ message, token, success, user }`.

use eduroute_core::Account;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&Account> for UserSummary {
    fn from(account: &Account) -> Self {
        Self { id: account.id, name: account.name.clone(), email: account.email.clone() }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
    pub success: bool,
    pub user: UserSummary,
}

impl AuthResponse {
    pub fn new(message: &'static str, token: String, user: UserSummary) -> Self {
        Self { message, token, success: true, user }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    pub success: bool,
}

/// Progress snapshot of the active roadmap (`GET /user/progress`).
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub roadmap_id: i64,
    pub progress_percentage: f64,
    pub completed_tasks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ClearedResponse {
    pub deleted: u64,
    pub success: bool,
}
