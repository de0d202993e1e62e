//! In-memory store - used when no database is configured, and by tests.

mod comments;
mod posts;

pub use comments::InMemoryCommentRepository;
pub use posts::InMemoryPostRepository;
