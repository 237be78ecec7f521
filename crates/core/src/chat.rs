use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only chat log entry. Immutable once created; total order is
/// `(created_at, id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub user_id: i64,
    pub sender: SenderRole,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,
    Assistant,
}

impl std::str::FromStr for SenderRole {
    type Err = InvalidSenderRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            // Older revisions of the schema stored "bot" / "ai" for the
            // assistant side.
            "assistant" | "bot" | "ai" => Ok(Self::Assistant),
            _ => Err(InvalidSenderRole(s.to_owned())),
        }
    }
}

impl std::fmt::Display for SenderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid sender role: {0}")]
pub struct InvalidSenderRole(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_role_parses_legacy_aliases() {
        assert_eq!("user".parse::<SenderRole>().unwrap(), SenderRole::User);
        assert_eq!("assistant".parse::<SenderRole>().unwrap(), SenderRole::Assistant);
        assert_eq!("bot".parse::<SenderRole>().unwrap(), SenderRole::Assistant);
        assert_eq!("ai".parse::<SenderRole>().unwrap(), SenderRole::Assistant);
        assert!("system".parse::<SenderRole>().is_err());
    }

    #[test]
    fn sender_role_round_trips_through_display() {
        assert_eq!(SenderRole::User.to_string().parse::<SenderRole>().unwrap(), SenderRole::User);
        assert_eq!(
            SenderRole::Assistant.to_string().parse::<SenderRole>().unwrap(),
            SenderRole::Assistant
        );
    }
}
