use std::sync::Arc;

use eduroute_ai::AiClient;
use eduroute_core::{MilestoneBand, Roadmap};
use eduroute_storage::traits::{AccountStore, NotificationStore, RoadmapStore};

use crate::error::ServiceError;
use crate::notifier::Notifier;

/// Outcome of a progress update, including the milestone band the new
/// percentage landed in (if any).
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub progress_percentage: f64,
    pub completed_tasks: Vec<String>,
    pub milestone: Option<MilestoneBand>,
}

/// Roadmap persistence, generation, and progress tracking with milestone
/// notification side effects.
pub struct RoadmapService {
    roadmaps: Arc<dyn RoadmapStore>,
    accounts: Arc<dyn AccountStore>,
    notifications: Arc<dyn NotificationStore>,
    ai: Arc<AiClient>,
    notifier: Arc<dyn Notifier>,
}

impl RoadmapService {
    #[must_use]
    pub fn new(
        roadmaps: Arc<dyn RoadmapStore>,
        accounts: Arc<dyn AccountStore>,
        notifications: Arc<dyn NotificationStore>,
        ai: Arc<AiClient>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { roadmaps, accounts, notifications, ai, notifier }
    }

    /// Store externally-supplied roadmap content as a new active row.
    /// Prior active roadmaps are not deactivated; the newest one is the
    /// one progress updates apply to.
    pub async fn save_roadmap(
        &self,
        user_id: i64,
        content: &str,
    ) -> Result<Roadmap, ServiceError> {
        if content.trim().is_empty() {
            return Err(ServiceError::InvalidInput("roadmap content is required".to_owned()));
        }
        Ok(self.roadmaps.insert_roadmap(user_id, content).await?)
    }

    /// Ask the AI service for a plan built from the profile's
    /// skills-to-learn set, then persist it as the new active roadmap.
    pub async fn generate_roadmap(
        &self,
        user_id: i64,
        skills_to_learn: &[String],
        planning_days: i32,
    ) -> Result<Roadmap, ServiceError> {
        if skills_to_learn.is_empty() {
            return Err(ServiceError::InvalidInput("skills_to_learn is required".to_owned()));
        }
        let plan = self.ai.generate_roadmap(user_id, skills_to_learn, planning_days).await?;
        Ok(self.roadmaps.insert_roadmap(user_id, &plan.to_string()).await?)
    }

    pub async fn get_active_roadmap(
        &self,
        user_id: i64,
    ) -> Result<Option<Roadmap>, ServiceError> {
        Ok(self.roadmaps.get_active_roadmap(user_id).await?)
    }

    /// Overwrite progress on the active roadmap and fire at most one
    /// milestone notification class for the band the new percentage
    /// falls into.
    ///
    /// The classification is memory-less: regressing below a band and
    /// re-crossing it fires the same class again. Dispatch failures are
    /// logged and never fail the update itself.
    pub async fn update_progress(
        &self,
        user_id: i64,
        percentage: f64,
        completed_tasks: Vec<String>,
    ) -> Result<ProgressUpdate, ServiceError> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(ServiceError::InvalidInput(format!(
                "progress percentage must be between 0 and 100, got {percentage}"
            )));
        }

        let updated = self.roadmaps.update_progress(user_id, percentage, &completed_tasks).await?;
        if updated == 0 {
            return Err(ServiceError::NotFound("active roadmap"));
        }

        let milestone = MilestoneBand::classify(percentage);
        if let Some(band) = milestone {
            self.fire_milestone(user_id, band).await;
        }

        Ok(ProgressUpdate { progress_percentage: percentage, completed_tasks, milestone })
    }

    pub async fn list_notifications(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<eduroute_core::Notification>, ServiceError> {
        Ok(self.notifications.list_notifications(user_id, limit).await?)
    }

    pub async fn mark_notification_read(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> Result<(), ServiceError> {
        if !self.notifications.mark_notification_read(notification_id, user_id).await? {
            return Err(ServiceError::NotFound("notification"));
        }
        Ok(())
    }

    /// Persist the in-app notification row and hand the email off to the
    /// dispatcher. Neither failure propagates: progress was already
    /// written and no delivery guarantee is claimed.
    async fn fire_milestone(&self, user_id: i64, band: MilestoneBand) {
        if let Err(e) = self
            .notifications
            .insert_notification(user_id, band.notification_kind(), band.subject(), band.body())
            .await
        {
            tracing::warn!(error = %e, user_id, "failed to persist milestone notification");
        }

        match self.accounts.get_account(user_id).await {
            Ok(Some(account)) => {
                if let Err(e) =
                    self.notifier.notify(&account.email, band.subject(), band.body()).await
                {
                    tracing::warn!(
                        error = %e,
                        user_id,
                        "milestone notification dispatch failed"
                    );
                }
            },
            Ok(None) => {
                tracing::warn!(user_id, "account vanished before milestone dispatch");
            },
            Err(e) => {
                tracing::warn!(error = %e, user_id, "could not load account for milestone dispatch");
            },
        }
    }
}
