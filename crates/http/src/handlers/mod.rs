pub mod auth;
pub mod chat;
pub mod notifications;
pub mod questions;
pub mod roadmap;
pub mod suggestions;
pub mod user;
