//! Domain entities - the core business objects.

mod comment;
mod post;
pub mod schema;

pub use comment::{Comment, CommentDraft, NewComment};
pub use post::{Post, PostDraft, PostFields, PostFilter};
