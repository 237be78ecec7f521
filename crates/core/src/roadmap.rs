use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::NotificationKind;

/// A generated learning plan tied to an account. The plan content is an
/// opaque blob as far as this core is concerned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: i64,
    pub user_id: i64,
    pub roadmap_content: String,
    pub status: RoadmapStatus,
    /// 0.0 to 100.0 inclusive. Monotonic non-decreasing by convention,
    /// not enforced by storage.
    pub progress_percentage: f64,
    pub completed_tasks: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Roadmap lifecycle status. Progress updates apply only to `Active` rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapStatus {
    Active,
    Completed,
    Paused,
}

impl std::str::FromStr for RoadmapStatus {
    type Err = InvalidRoadmapStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "paused" => Ok(Self::Paused),
            _ => Err(InvalidRoadmapStatus(s.to_owned())),
        }
    }
}

impl std::fmt::Display for RoadmapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Paused => write!(f, "paused"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid roadmap status: {0}")]
pub struct InvalidRoadmapStatus(pub String);

/// One of the three progress-percentage ranges that triggers a
/// notification class when a progress update lands inside it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneBand {
    /// `[40, 60)`: suggest networking events.
    Events,
    /// `[60, 80)`: suggest hands-on projects.
    Projects,
    /// `[80, 100]`: suggest job openings.
    JobOpenings,
}

impl MilestoneBand {
    /// Classifies a progress percentage into its milestone band.
    ///
    /// Pure threshold classification with no memory: a later update that
    /// lands in the same band fires the same class again.
    #[must_use]
    pub fn classify(percentage: f64) -> Option<Self> {
        if (40.0..60.0).contains(&percentage) {
            Some(Self::Events)
        } else if (60.0..80.0).contains(&percentage) {
            Some(Self::Projects)
        } else if (80.0..=100.0).contains(&percentage) {
            Some(Self::JobOpenings)
        } else {
            None
        }
    }

    /// The notification class persisted and dispatched for this band.
    #[must_use]
    pub const fn notification_kind(self) -> NotificationKind {
        match self {
            Self::Events => NotificationKind::EventSuggestion,
            Self::Projects => NotificationKind::ProjectSuggestion,
            Self::JobOpenings => NotificationKind::JobOpening,
        }
    }

    /// Email subject line for this milestone.
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            Self::Events => "🎉 40% Milestone Reached! Time for Events & Networking",
            Self::Projects => "🚀 60% Milestone! Ready for Real Projects",
            Self::JobOpenings => "💼 80% Complete! Job Opportunities Await",
        }
    }

    /// Email body for this milestone.
    #[must_use]
    pub const fn body(self) -> &'static str {
        match self {
            Self::Events => {
                "Congratulations! You've reached 40% of your career roadmap. \
                 It's time to start networking and attending events in your field."
            },
            Self::Projects => {
                "Amazing progress! You've completed 60% of your roadmap. \
                 Let's start working on real projects to showcase your skills."
            },
            Self::JobOpenings => {
                "Fantastic! You're 80% through your roadmap. \
                 Start exploring job opportunities and preparing for interviews."
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(MilestoneBand::classify(39.9), None);
        assert_eq!(MilestoneBand::classify(40.0), Some(MilestoneBand::Events));
        assert_eq!(MilestoneBand::classify(59.99), Some(MilestoneBand::Events));
        assert_eq!(MilestoneBand::classify(60.0), Some(MilestoneBand::Projects));
        assert_eq!(MilestoneBand::classify(79.99), Some(MilestoneBand::Projects));
        assert_eq!(MilestoneBand::classify(80.0), Some(MilestoneBand::JobOpenings));
        assert_eq!(MilestoneBand::classify(100.0), Some(MilestoneBand::JobOpenings));
    }

    #[test]
    fn values_below_and_above_the_bands_classify_to_none() {
        assert_eq!(MilestoneBand::classify(0.0), None);
        assert_eq!(MilestoneBand::classify(12.5), None);
        assert_eq!(MilestoneBand::classify(100.01), None);
    }

    #[test]
    fn band_maps_to_notification_kind() {
        assert_eq!(
            MilestoneBand::Events.notification_kind(),
            NotificationKind::EventSuggestion
        );
        assert_eq!(
            MilestoneBand::Projects.notification_kind(),
            NotificationKind::ProjectSuggestion
        );
        assert_eq!(MilestoneBand::JobOpenings.notification_kind(), NotificationKind::JobOpening);
    }

    #[test]
    fn milestone_subjects_match_the_email_templates() {
        assert_eq!(
            MilestoneBand::Events.subject(),
            "🎉 40% Milestone Reached! Time for Events & Networking"
        );
        assert_eq!(MilestoneBand::Projects.subject(), "🚀 60% Milestone! Ready for Real Projects");
        assert_eq!(
            MilestoneBand::JobOpenings.subject(),
            "💼 80% Complete! Job Opportunities Await"
        );
    }

    #[test]
    fn roadmap_status_round_trips() {
        for status in [RoadmapStatus::Active, RoadmapStatus::Completed, RoadmapStatus::Paused] {
            assert_eq!(status.to_string().parse::<RoadmapStatus>().unwrap(), status);
        }
        assert!("archived".parse::<RoadmapStatus>().is_err());
    }
}
