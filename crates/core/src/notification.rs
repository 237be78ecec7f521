use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted notification record. Delivery (email) happens out of band;
/// this row is the in-app copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification class. The first three correspond to milestone bands;
/// `DailyReminder` comes from the externally-triggered reminder sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    EventSuggestion,
    ProjectSuggestion,
    JobOpening,
    DailyReminder,
}

impl std::str::FromStr for NotificationKind {
    type Err = InvalidNotificationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event_suggestion" => Ok(Self::EventSuggestion),
            "project_suggestion" => Ok(Self::ProjectSuggestion),
            "job_opening" => Ok(Self::JobOpening),
            "daily_reminder" => Ok(Self::DailyReminder),
            _ => Err(InvalidNotificationKind(s.to_owned())),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventSuggestion => write!(f, "event_suggestion"),
            Self::ProjectSuggestion => write!(f, "project_suggestion"),
            Self::JobOpening => write!(f, "job_opening"),
            Self::DailyReminder => write!(f, "daily_reminder"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid notification kind: {0}")]
pub struct InvalidNotificationKind(pub String);
