//! Typed error enum for the AI client.

use thiserror::Error;

/// Errors from calls to the AI microservice. Not retried here; a failed
/// outbound call fails the enclosing request (the service retries its own
/// upstream internally).
#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("AI service returned {code}: {body}")]
    HttpStatus { code: u16, body: String },

    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing field in AI response: {0}")]
    MissingField(&'static str),

    #[error("client initialization failed: {0}")]
    ClientInit(String),
}
