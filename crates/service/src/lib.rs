//! Service layer for the eduroute backend.
//!
//! Centralizes business logic between HTTP handlers and storage/auth/AI.
//! Services hold trait objects over the storage seams so tests can run
//! against in-memory fakes.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod account_service;
mod chat_service;
mod error;
mod notifier;
mod profile_service;
mod roadmap_service;

#[cfg(test)]
mod tests;

pub use account_service::{AccountService, AuthSession};
pub use chat_service::{ChatExchange, ChatService};
pub use error::ServiceError;
pub use notifier::{AiServiceNotifier, Notifier};
pub use profile_service::ProfileService;
pub use roadmap_service::{ProgressUpdate, RoadmapService};
