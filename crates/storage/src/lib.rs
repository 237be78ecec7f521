//! PostgreSQL persistence layer for the eduroute backend.
//!
//! All tables hang off `users.id` with `ON DELETE CASCADE`; the pool is
//! an explicit handle injected into services, never a process global.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod migrations;
mod pg;
pub mod traits;

pub use error::StorageError;
pub use migrations::run_migrations;
pub use pg::PgStorage;
