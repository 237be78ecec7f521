use std::sync::Arc;

use eduroute_ai::{AiClient, DEFAULT_ENGINE};
use eduroute_core::{ChatMessage, SenderRole};
use eduroute_storage::traits::ChatStore;

use crate::error::ServiceError;

/// One question/answer pair produced by [`ChatService::exchange`].
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub question: ChatMessage,
    pub answer: ChatMessage,
}

/// Chat log plus the relay to the AI assistant.
pub struct ChatService {
    messages: Arc<dyn ChatStore>,
    ai: Arc<AiClient>,
}

impl ChatService {
    #[must_use]
    pub fn new(messages: Arc<dyn ChatStore>, ai: Arc<AiClient>) -> Self {
        Self { messages, ai }
    }

    /// Relay a question to the assistant and persist both sides of the
    /// exchange. The user's message is written before the AI call, so a
    /// failed call still leaves the question in the history.
    pub async fn exchange(
        &self,
        user_id: i64,
        question: &str,
        engine: Option<&str>,
    ) -> Result<ChatExchange, ServiceError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ServiceError::InvalidInput("question is required".to_owned()));
        }

        let stored_question =
            self.messages.append_message(user_id, SenderRole::User, question).await?;

        let engine = engine.unwrap_or(DEFAULT_ENGINE);
        let answer = self.ai.ask_ai(question, engine, user_id).await?;

        let stored_answer =
            self.messages.append_message(user_id, SenderRole::Assistant, &answer).await?;

        Ok(ChatExchange { question: stored_question, answer: stored_answer })
    }

    pub async fn history(&self, user_id: i64) -> Result<Vec<ChatMessage>, ServiceError> {
        Ok(self.messages.list_messages(user_id).await?)
    }

    /// Wipe the account's chat log. Returns how many rows were removed.
    pub async fn clear(&self, user_id: i64) -> Result<u64, ServiceError> {
        Ok(self.messages.clear_messages(user_id).await?)
    }
}
