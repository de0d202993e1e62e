//! Resource services - typed operations over the repository ports.
//!
//! Each operation returns the record or a [`crate::DomainError`]; mapping to
//! HTTP happens at the server boundary.

mod comments;
mod posts;

pub use comments::CommentService;
pub use posts::PostService;
