//! Service-layer tests against in-memory fakes of the storage traits.

mod account_tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use eduroute_ai::{AiClient, AiError};
use eduroute_auth::{
    AuthError, FederatedIdentity, FederatedVerifier, PasswordHasher, TokenSigner,
};
use eduroute_core::{
    Account, ChatMessage, NewAccount, Notification, NotificationKind, Profile, ProfileFields,
    Roadmap, RoadmapStatus, SenderRole,
};
use eduroute_storage::traits::{
    AccountStore, ChatStore, NotificationStore, ProfileStore, RoadmapStore,
};
use eduroute_storage::StorageError;

use crate::notifier::Notifier;
use crate::{AccountService, ChatService, ProfileService, RoadmapService};

/// In-memory stand-in for the Postgres store. Ids are handed out per
/// table from a shared counter, which is good enough for these tests.
#[derive(Default)]
pub(crate) struct MemStore {
    inner: Mutex<MemInner>,
}

#[derive(Default)]
struct MemInner {
    next_id: i64,
    accounts: Vec<Account>,
    messages: Vec<ChatMessage>,
    profiles: HashMap<i64, Profile>,
    roadmaps: Vec<Roadmap>,
    notifications: Vec<Notification>,
}

impl MemInner {
    fn next(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemStore {
    pub(crate) fn roadmap_count(&self, user_id: i64) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.roadmaps.iter().filter(|r| r.user_id == user_id).count()
    }

    pub(crate) fn notification_rows(&self, user_id: i64) -> Vec<Notification> {
        let inner = self.inner.lock().unwrap();
        inner.notifications.iter().filter(|n| n.user_id == user_id).cloned().collect()
    }
}

#[async_trait]
impl AccountStore for MemStore {
    async fn create_account(&self, account: &NewAccount) -> Result<Account, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.accounts.iter().any(|a| a.email == account.email) {
            return Err(StorageError::Duplicate("users_email_key".to_owned()));
        }
        let id = inner.next();
        let row = Account {
            id,
            name: account.name.clone(),
            email: account.email.clone(),
            password_hash: account.password_hash.clone(),
            google_id: account.google_id.clone(),
            profile_picture: account.profile_picture.clone(),
            interests: Vec::new(),
            strengths: Vec::new(),
            created_at: Utc::now(),
        };
        inner.accounts.push(row.clone());
        Ok(row)
    }

    async fn get_account(&self, id: i64) -> Result<Option<Account>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn link_google_id(&self, id: i64, google_id: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(a) = inner.accounts.iter_mut().find(|a| a.id == id) {
            if a.google_id.is_none() {
                a.google_id = Some(google_id.to_owned());
            }
        }
        Ok(())
    }

    async fn update_account_fields(
        &self,
        id: i64,
        name: &str,
        interests: &[String],
        strengths: &[String],
    ) -> Result<Option<Account>, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(a) = inner.accounts.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        a.name = name.to_owned();
        a.interests = interests.to_vec();
        a.strengths = strengths.to_vec();
        Ok(Some(a.clone()))
    }

    async fn delete_account(&self, id: i64) -> Result<bool, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.accounts.len();
        inner.accounts.retain(|a| a.id != id);
        let deleted = inner.accounts.len() < before;
        if deleted {
            inner.messages.retain(|m| m.user_id != id);
            inner.profiles.remove(&id);
            inner.roadmaps.retain(|r| r.user_id != id);
            inner.notifications.retain(|n| n.user_id != id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl ChatStore for MemStore {
    async fn append_message(
        &self,
        user_id: i64,
        sender: SenderRole,
        message: &str,
    ) -> Result<ChatMessage, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next();
        let row = ChatMessage {
            id,
            user_id,
            sender,
            message: message.to_owned(),
            created_at: Utc::now(),
        };
        inner.messages.push(row.clone());
        Ok(row)
    }

    async fn list_messages(&self, user_id: i64) -> Result<Vec<ChatMessage>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.messages.iter().filter(|m| m.user_id == user_id).cloned().collect())
    }

    async fn clear_messages(&self, user_id: i64) -> Result<u64, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.messages.len();
        inner.messages.retain(|m| m.user_id != user_id);
        Ok((before - inner.messages.len()) as u64)
    }
}

#[async_trait]
impl ProfileStore for MemStore {
    async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(
        &self,
        user_id: i64,
        fields: &ProfileFields,
    ) -> Result<Profile, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.profiles.get(&user_id).map_or_else(|| inner.next_id + 1, |p| p.id);
        inner.next_id = inner.next_id.max(id);
        let now = Utc::now();
        let created_at = inner.profiles.get(&user_id).map_or(now, |p| p.created_at);
        let row = Profile {
            id,
            user_id,
            education_grade: fields.education_grade.clone(),
            education_department: fields.education_department.clone(),
            education_year: fields.education_year.clone(),
            interests: fields.interests.clone(),
            skills_learned: fields.skills_learned.clone(),
            skills_to_learn: fields.skills_to_learn.clone(),
            planning_days: fields.planning_days,
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            created_at,
            updated_at: now,
        };
        inner.profiles.insert(user_id, row.clone());
        Ok(row)
    }
}

#[async_trait]
impl RoadmapStore for MemStore {
    async fn insert_roadmap(&self, user_id: i64, content: &str) -> Result<Roadmap, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next();
        let now = Utc::now();
        let row = Roadmap {
            id,
            user_id,
            roadmap_content: content.to_owned(),
            status: RoadmapStatus::Active,
            progress_percentage: 0.0,
            completed_tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        inner.roadmaps.push(row.clone());
        Ok(row)
    }

    async fn get_active_roadmap(&self, user_id: i64) -> Result<Option<Roadmap>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .roadmaps
            .iter()
            .filter(|r| r.user_id == user_id && r.status == RoadmapStatus::Active)
            .max_by_key(|r| r.id)
            .cloned())
    }

    async fn update_progress(
        &self,
        user_id: i64,
        percentage: f64,
        completed_tasks: &[String],
    ) -> Result<u64, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let target = inner
            .roadmaps
            .iter()
            .filter(|r| r.user_id == user_id && r.status == RoadmapStatus::Active)
            .map(|r| r.id)
            .max();
        let Some(target) = target else { return Ok(0) };
        if let Some(r) = inner.roadmaps.iter_mut().find(|r| r.id == target) {
            r.progress_percentage = percentage;
            r.completed_tasks = completed_tasks.to_vec();
            r.updated_at = Utc::now();
        }
        Ok(1)
    }
}

#[async_trait]
impl NotificationStore for MemStore {
    async fn insert_notification(
        &self,
        user_id: i64,
        kind: NotificationKind,
        title: &str,
        body: &str,
    ) -> Result<Notification, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next();
        let row = Notification {
            id,
            user_id,
            kind,
            title: title.to_owned(),
            body: body.to_owned(),
            is_read: false,
            created_at: Utc::now(),
        };
        inner.notifications.push(row.clone());
        Ok(row)
    }

    async fn list_notifications(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<Notification>, StorageError> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<Notification> =
            inner.notifications.iter().filter(|n| n.user_id == user_id).cloned().collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn mark_notification_read(&self, id: i64, user_id: i64) -> Result<bool, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.notifications.iter_mut().find(|n| n.id == id && n.user_id == user_id) {
            Some(n) => {
                n.is_read = true;
                Ok(true)
            },
            None => Ok(false),
        }
    }
}

/// Verifier that returns a fixed identity for any token except "bad".
pub(crate) struct StaticVerifier {
    pub identity: FederatedIdentity,
}

#[async_trait]
impl FederatedVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<FederatedIdentity, AuthError> {
        if token == "bad" {
            return Err(AuthError::ExternalToken("invalid ID token".to_owned()));
        }
        Ok(self.identity.clone())
    }
}

/// Records dispatched emails instead of calling anything.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, email: &str, subject: &str, _body: &str) -> Result<(), AiError> {
        if self.fail {
            return Err(AiError::MissingField("status"));
        }
        self.sent.lock().unwrap().push((email.to_owned(), subject.to_owned()));
        Ok(())
    }
}

pub(crate) fn account_service(store: &Arc<MemStore>) -> AccountService {
    let identity = FederatedIdentity {
        subject: "google-sub-1".to_owned(),
        email: "fed@example.com".to_owned(),
        name: Some("Fed User".to_owned()),
        picture: None,
    };
    account_service_with(store, StaticVerifier { identity })
}

pub(crate) fn account_service_with(
    store: &Arc<MemStore>,
    verifier: StaticVerifier,
) -> AccountService {
    AccountService::new(
        Arc::clone(store) as Arc<dyn AccountStore>,
        PasswordHasher::with_cost(4),
        TokenSigner::new("test-secret", 7),
        Arc::new(verifier),
    )
}

pub(crate) fn profile_service(store: &Arc<MemStore>) -> ProfileService {
    ProfileService::new(Arc::clone(store) as Arc<dyn ProfileStore>)
}

pub(crate) fn chat_service(store: &Arc<MemStore>, ai: AiClient) -> ChatService {
    ChatService::new(Arc::clone(store) as Arc<dyn ChatStore>, Arc::new(ai))
}

pub(crate) fn roadmap_service(
    store: &Arc<MemStore>,
    ai: AiClient,
    notifier: Arc<RecordingNotifier>,
) -> RoadmapService {
    RoadmapService::new(
        Arc::clone(store) as Arc<dyn RoadmapStore>,
        Arc::clone(store) as Arc<dyn AccountStore>,
        Arc::clone(store) as Arc<dyn NotificationStore>,
        Arc::new(ai),
        notifier,
    )
}

/// Client pointed at nothing; fine for paths that never reach the wire.
pub(crate) fn offline_ai() -> AiClient {
    AiClient::new("http://127.0.0.1:1").expect("client init")
}
