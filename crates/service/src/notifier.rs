use std::sync::Arc;

use async_trait::async_trait;
use eduroute_ai::{AiClient, AiError};

/// Outbound notification dispatch. Delivery mechanics (SMTP, templates)
/// live behind the AI service; this core only hands off the message.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, email: &str, subject: &str, body: &str) -> Result<(), AiError>;
}

/// Forwards notifications to the AI service's `/send_notification` route.
pub struct AiServiceNotifier {
    client: Arc<AiClient>,
}

impl AiServiceNotifier {
    #[must_use]
    pub fn new(client: Arc<AiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for AiServiceNotifier {
    async fn notify(&self, email: &str, subject: &str, body: &str) -> Result<(), AiError> {
        self.client.send_notification(email, subject, body).await
    }
}
