use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, CommentDraft, Post, PostDraft, PostFilter};
use crate::error::RepoError;

/// Post collection.
///
/// Identifiers are passed in raw form; casting them (and failing with
/// [`RepoError::InvalidId`]) is the store's responsibility, as is enforcing the
/// schema in [`crate::domain::schema`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post. The store assigns the id.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// All posts matching `filter`, newest `publish_date` first.
    async fn find(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Replace every field of an existing post. `None` if the id resolves to nothing.
    async fn find_by_id_and_replace(
        &self,
        id: &str,
        draft: PostDraft,
    ) -> Result<Option<Post>, RepoError>;
}

/// Comment collection.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment. The store assigns the id and `created_at`.
    async fn create(&self, draft: CommentDraft) -> Result<Comment, RepoError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, RepoError>;

    /// Comments attached to `post_id`, newest `created_at` first.
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    /// Replace only the content of an existing comment.
    async fn find_by_id_and_update_content(
        &self,
        id: &str,
        content: String,
    ) -> Result<Option<Comment>, RepoError>;

    /// Returns whether a comment was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, RepoError>;
}
