//! Wire types for the AI microservice contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct AskAiRequest<'a> {
    pub question: &'a str,
    pub engine: &'a str,
    pub uid: i64,
}

#[derive(Debug, Deserialize)]
pub struct AskAiResponse {
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateRoadmapRequest<'a> {
    pub uid: i64,
    pub skills_to_learn: &'a [String],
    pub planning_days: i32,
}

#[derive(Debug, Serialize)]
pub struct SuggestRequest<'a> {
    pub uid: i64,
    pub domain: &'a str,
    pub completion_percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct SendNotificationRequest<'a> {
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}
