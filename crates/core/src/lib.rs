//! Core domain types for the eduroute backend.
//!
//! This crate contains the entities shared across storage, service, and
//! HTTP layers: accounts, chat messages, profiles, roadmaps, and the
//! milestone/notification vocabulary.

mod account;
mod chat;
mod env_config;
mod notification;
mod profile;
mod question;
mod roadmap;

pub use account::*;
pub use chat::*;
pub use env_config::*;
pub use notification::*;
pub use profile::*;
pub use question::*;
pub use roadmap::*;
