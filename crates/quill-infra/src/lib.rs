//! # Quill Infrastructure
//!
//! Concrete implementations of the repository ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//!
//! The in-memory store is always available.

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::{InMemoryCommentRepository, InMemoryPostRepository};

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::{PostgresCommentRepository, PostgresPostRepository};
