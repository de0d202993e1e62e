//! # Quill Core
//!
//! The domain layer of the Quill blogging backend.
//! Entities, the store schema rules, repository ports and the resource
//! services live here. Nothing in this crate performs I/O directly.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use services::{CommentService, PostService};
