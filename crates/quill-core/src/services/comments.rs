use std::sync::Arc;

use crate::domain::{Comment, CommentDraft, NewComment};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository};

const ENTITY: &str = "Comment";
const POST_ENTITY: &str = "Post";

/// Comment resource operations.
///
/// Unlike posts, comment input is pre-validated: absent or empty fields are
/// rejected before the store is touched.
#[derive(Clone)]
pub struct CommentService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

/// Present and non-empty. Whitespace-only passes; the store decides after trimming.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl CommentService {
    pub fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    pub async fn create(&self, input: NewComment) -> Result<Comment, DomainError> {
        let (Some(owner), Some(post_id), Some(content)) = (
            present(input.owner),
            present(input.post_id),
            present(input.content),
        ) else {
            return Err(DomainError::Validation(
                "Owner, postId, and content are required".to_string(),
            ));
        };

        let post = self
            .posts
            .find_by_id(&post_id)
            .await
            .map_err(|e| DomainError::internal("Failed to create comment", e))?
            .ok_or_else(|| DomainError::not_found(POST_ENTITY, &post_id))?;

        let draft = CommentDraft {
            owner: owner.trim().to_string(),
            post_id: post.id,
            content: content.trim().to_string(),
        };

        let comment = self
            .comments
            .create(draft)
            .await
            .map_err(|e| DomainError::internal("Failed to create comment", e))?;

        tracing::debug!(comment_id = %comment.id, post_id = %post.id, "Comment created");
        Ok(comment)
    }

    pub async fn get(&self, id: &str) -> Result<Comment, DomainError> {
        self.comments
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::internal("Failed to fetch comment", e))?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    /// Comments under an existing post, newest first.
    pub async fn list_by_post(&self, post_id: &str) -> Result<Vec<Comment>, DomainError> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| DomainError::internal("Failed to fetch comments", e))?
            .ok_or_else(|| DomainError::not_found(POST_ENTITY, post_id))?;

        self.comments
            .find_by_post(post.id)
            .await
            .map_err(|e| DomainError::internal("Failed to fetch comments", e))
    }

    /// Partial update: only `content` changes.
    pub async fn update(&self, id: &str, content: Option<String>) -> Result<Comment, DomainError> {
        let Some(content) = present(content) else {
            return Err(DomainError::Validation("Content is required".to_string()));
        };

        let comment = self
            .comments
            .find_by_id_and_update_content(id, content.trim().to_string())
            .await
            .map_err(|e| DomainError::internal("Failed to update comment", e))?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        tracing::debug!(comment_id = %comment.id, "Comment updated");
        Ok(comment)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let deleted = self
            .comments
            .delete_by_id(id)
            .await
            .map_err(|e| DomainError::internal("Failed to delete comment", e))?;

        if !deleted {
            return Err(DomainError::not_found(ENTITY, id));
        }

        tracing::debug!(comment_id = %id, "Comment deleted");
        Ok(())
    }
}
