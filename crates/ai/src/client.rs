use serde::Serialize;

use crate::error::AiError;
use crate::types::{
    AskAiRequest, AskAiResponse, GenerateRoadmapRequest, SendNotificationRequest, SuggestRequest,
};

/// Engine identifier forwarded when the caller names none.
pub const DEFAULT_ENGINE: &str = "gemini";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for the AI inference microservice.
pub struct AiClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for AiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiClient").field("base_url", &self.base_url).finish()
    }
}

impl AiClient {
    /// Build a client with a bounded request timeout.
    pub fn new(base_url: &str) -> Result<Self, AiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AiError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Ask the chatbot a question; returns the reply text.
    pub async fn ask_ai(&self, question: &str, engine: &str, uid: i64) -> Result<String, AiError> {
        let body = self
            .post_json("/ask_ai", &AskAiRequest { question, engine, uid })
            .await?;
        let response: AskAiResponse =
            serde_json::from_str(&body).map_err(|e| AiError::JsonParse {
                context: "ask_ai response",
                source: e,
            })?;
        response.answer.ok_or(AiError::MissingField("answer"))
    }

    /// Generate a learning roadmap. The plan structure is opaque to this
    /// core; callers persist it as-is.
    pub async fn generate_roadmap(
        &self,
        uid: i64,
        skills_to_learn: &[String],
        planning_days: i32,
    ) -> Result<serde_json::Value, AiError> {
        let body = self
            .post_json(
                "/generate_roadmap",
                &GenerateRoadmapRequest { uid, skills_to_learn, planning_days },
            )
            .await?;
        serde_json::from_str(&body).map_err(|e| AiError::JsonParse {
            context: "generate_roadmap response",
            source: e,
        })
    }

    /// Networking-event suggestions for a domain and completion level.
    pub async fn suggest_events(
        &self,
        uid: i64,
        domain: &str,
        completion_percentage: f64,
    ) -> Result<serde_json::Value, AiError> {
        let body = self
            .post_json("/suggest_event", &SuggestRequest { uid, domain, completion_percentage })
            .await?;
        serde_json::from_str(&body).map_err(|e| AiError::JsonParse {
            context: "suggest_event response",
            source: e,
        })
    }

    /// Hands-on project suggestions for a domain and completion level.
    pub async fn suggest_projects(
        &self,
        uid: i64,
        domain: &str,
        completion_percentage: f64,
    ) -> Result<serde_json::Value, AiError> {
        let body = self
            .post_json("/suggest_project", &SuggestRequest { uid, domain, completion_percentage })
            .await?;
        serde_json::from_str(&body).map_err(|e| AiError::JsonParse {
            context: "suggest_project response",
            source: e,
        })
    }

    /// Forward an email notification to the delivery side of the service.
    pub async fn send_notification(
        &self,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), AiError> {
        self.post_json("/send_notification", &SendNotificationRequest { email, subject, message })
            .await?;
        Ok(())
    }

    async fn post_json<T: Serialize>(&self, route: &str, request: &T) -> Result<String, AiError> {
        let response = self
            .client
            .post(format!("{}{route}", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AiError::HttpStatus { code: status.as_u16(), body });
        }
        Ok(body)
    }
}
