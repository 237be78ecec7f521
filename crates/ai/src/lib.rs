//! Client for the external AI inference microservice.
//!
//! This core implements no inference. Chat replies, roadmap plans, and
//! suggestion lists all come from the service behind `AI_SERVICE_URL`;
//! payloads are opaque JSON in both directions.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod client;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use client::{AiClient, DEFAULT_ENGINE};
pub use error::AiError;
pub use types::*;
