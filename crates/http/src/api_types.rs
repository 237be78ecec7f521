//! Request bodies accepted by the API.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct GoogleSigninRequest {
    /// The provider-issued ID token, verified server-side.
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
}

/// Body for `POST /user/roadmap`. With `roadmap` present the supplied
/// plan is stored as-is; without it a plan is generated from the
/// caller's saved profile.
#[derive(Debug, Deserialize)]
pub struct SaveRoadmapRequest {
    pub roadmap: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub progress_percentage: f64,
    #[serde(default)]
    pub completed_tasks: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub engine: Option<String>,
}

/// Body for the suggestion proxies. When `completion_percentage` is
/// absent, the active roadmap's stored progress is used.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub domain: String,
    pub completion_percentage: Option<f64>,
}
