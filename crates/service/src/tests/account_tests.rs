use std::sync::Arc;

use async_trait::async_trait;
use eduroute_auth::{FederatedIdentity, PasswordHasher, TokenSigner};
use eduroute_core::{Account, NewAccount, ProfileFields};
use eduroute_storage::traits::AccountStore;
use eduroute_storage::StorageError;

use super::{account_service, account_service_with, profile_service, MemStore, StaticVerifier};
use crate::{AccountService, ServiceError};

#[tokio::test]
async fn register_then_authenticate_round_trip() {
    let store = Arc::new(MemStore::default());
    let svc = account_service(&store);

    let session = svc.register("Ada", "Ada@Example.com", "hunter22").await.unwrap();
    assert_eq!(session.account.email, "ada@example.com");
    assert!(!session.token.is_empty());

    let login = svc.authenticate("ada@example.com", "hunter22").await.unwrap();
    assert_eq!(login.account.id, session.account.id);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let store = Arc::new(MemStore::default());
    let svc = account_service(&store);

    svc.register("Ada", "ada@example.com", "pw1").await.unwrap();
    let err = svc.register("Other", "ADA@example.com", "pw2").await.unwrap_err();
    assert!(matches!(err, ServiceError::EmailTaken));
}

/// Store behaving like the losing side of a concurrent signup: the
/// email pre-check sees nothing, then the insert hits the unique
/// constraint.
struct RacingStore;

#[async_trait]
impl AccountStore for RacingStore {
    async fn create_account(&self, _account: &NewAccount) -> Result<Account, StorageError> {
        Err(StorageError::Duplicate("users_email_key".to_owned()))
    }

    async fn get_account(&self, _id: i64) -> Result<Option<Account>, StorageError> {
        Ok(None)
    }

    async fn get_account_by_email(&self, _email: &str) -> Result<Option<Account>, StorageError> {
        Ok(None)
    }

    async fn link_google_id(&self, _id: i64, _google_id: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn update_account_fields(
        &self,
        _id: i64,
        _name: &str,
        _interests: &[String],
        _strengths: &[String],
    ) -> Result<Option<Account>, StorageError> {
        Ok(None)
    }

    async fn delete_account(&self, _id: i64) -> Result<bool, StorageError> {
        Ok(false)
    }
}

#[tokio::test]
async fn losing_a_signup_race_maps_to_email_taken() {
    let identity = FederatedIdentity {
        subject: "sub".to_owned(),
        email: "fed@example.com".to_owned(),
        name: None,
        picture: None,
    };
    let svc = AccountService::new(
        Arc::new(RacingStore),
        PasswordHasher::with_cost(4),
        TokenSigner::new("test-secret", 7),
        Arc::new(StaticVerifier { identity }),
    );

    let err = svc.register("Ada", "ada@example.com", "pw").await.unwrap_err();
    assert!(matches!(err, ServiceError::EmailTaken));
}

#[tokio::test]
async fn register_rejects_blank_fields() {
    let store = Arc::new(MemStore::default());
    let svc = account_service(&store);

    let err = svc.register("", "a@b.com", "pw").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
    let err = svc.register("Ada", "a@b.com", "").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_identical() {
    let store = Arc::new(MemStore::default());
    let svc = account_service(&store);
    svc.register("Ada", "ada@example.com", "right").await.unwrap();

    let wrong_pw = svc.authenticate("ada@example.com", "wrong").await.unwrap_err();
    let no_user = svc.authenticate("ghost@example.com", "right").await.unwrap_err();
    assert_eq!(wrong_pw.to_string(), no_user.to_string());
    assert!(wrong_pw.is_unauthorized());
}

#[tokio::test]
async fn federated_only_account_cannot_password_login() {
    let store = Arc::new(MemStore::default());
    let svc = account_service(&store);

    let session = svc.authenticate_federated("valid-token").await.unwrap();
    assert_eq!(session.account.email, "fed@example.com");

    let err = svc.authenticate("fed@example.com", "anything").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn federated_login_backfills_google_id_once() {
    let store = Arc::new(MemStore::default());
    let verifier = StaticVerifier {
        identity: FederatedIdentity {
            subject: "sub-9".to_owned(),
            email: "ada@example.com".to_owned(),
            name: Some("Ada G".to_owned()),
            picture: None,
        },
    };
    let svc = account_service_with(&store, verifier);

    let registered = svc.register("Ada", "ada@example.com", "pw").await.unwrap();
    assert!(registered.account.google_id.is_none());

    let linked = svc.authenticate_federated("valid").await.unwrap();
    assert_eq!(linked.account.id, registered.account.id);

    let stored = svc.get_account(registered.account.id).await.unwrap().unwrap();
    assert_eq!(stored.google_id.as_deref(), Some("sub-9"));
    // Password login still works after linking.
    svc.authenticate("ada@example.com", "pw").await.unwrap();
}

#[tokio::test]
async fn federated_signup_without_name_falls_back_to_email_prefix() {
    let store = Arc::new(MemStore::default());
    let verifier = StaticVerifier {
        identity: FederatedIdentity {
            subject: "sub-2".to_owned(),
            email: "grace.h@example.com".to_owned(),
            name: None,
            picture: None,
        },
    };
    let svc = account_service_with(&store, verifier);

    let session = svc.authenticate_federated("valid").await.unwrap();
    assert_eq!(session.account.name, "grace.h");
}

#[tokio::test]
async fn resolve_token_fails_after_account_deletion() {
    let store = Arc::new(MemStore::default());
    let svc = account_service(&store);

    let session = svc.register("Ada", "ada@example.com", "pw").await.unwrap();
    let resolved = svc.resolve_token(&session.token).await.unwrap();
    assert_eq!(resolved.id, session.account.id);

    assert!(svc.delete_account(session.account.id).await.unwrap());
    let err = svc.resolve_token(&session.token).await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn update_account_fields_canonicalizes_tags() {
    let store = Arc::new(MemStore::default());
    let svc = account_service(&store);
    let session = svc.register("Ada", "ada@example.com", "pw").await.unwrap();

    let updated = svc
        .update_account_fields(
            session.account.id,
            "  Ada Lovelace ",
            vec!["math".to_owned(), " math ".to_owned(), String::new()],
            vec!["logic".to_owned()],
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(updated.interests, vec!["math".to_owned()]);
    assert_eq!(updated.strengths, vec!["logic".to_owned()]);
}

#[tokio::test]
async fn update_unknown_account_is_not_found() {
    let store = Arc::new(MemStore::default());
    let svc = account_service(&store);
    let err = svc.update_account_fields(404, "Name", vec![], vec![]).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound("account")));
}

#[tokio::test]
async fn save_profile_validates_and_canonicalizes() {
    let store = Arc::new(MemStore::default());
    let svc = profile_service(&store);

    let err = svc
        .save_profile(1, ProfileFields { planning_days: 0, ..ProfileFields::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    let fields = ProfileFields {
        planning_days: 45,
        skills_to_learn: vec!["rust".to_owned(), "rust".to_owned(), " sql ".to_owned()],
        ..ProfileFields::default()
    };
    let saved = svc.save_profile(1, fields).await.unwrap();
    assert_eq!(saved.planning_days, 45);
    assert_eq!(saved.skills_to_learn, vec!["rust".to_owned(), "sql".to_owned()]);

    let again = svc.get_profile(1).await.unwrap().unwrap();
    assert_eq!(again.id, saved.id);
}
