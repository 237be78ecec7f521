//! Storage trait abstraction.
//!
//! Defines async domain traits for persistence, implemented by
//! [`crate::PgStorage`] and by in-memory fakes in service tests.

pub mod account;
pub mod chat;
pub mod notification;
pub mod profile;
pub mod roadmap;

pub use account::AccountStore;
pub use chat::ChatStore;
pub use notification::NotificationStore;
pub use profile::ProfileStore;
pub use roadmap::RoadmapStore;
