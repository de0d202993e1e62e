//! In-memory comment collection.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::schema::{cast_id, required};
use quill_core::domain::{Comment, CommentDraft};
use quill_core::error::RepoError;
use quill_core::ports::CommentRepository;

pub struct InMemoryCommentRepository {
    store: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, draft: CommentDraft) -> Result<Comment, RepoError> {
        let comment = draft.validate()?.into_comment(Uuid::new_v4(), Utc::now());

        self.store.write().await.push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, RepoError> {
        let id = cast_id(id)?;
        let store = self.store.read().await;

        Ok(store.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let store = self.store.read().await;
        let mut comments: Vec<Comment> = store
            .iter()
            .rev()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(comments)
    }

    async fn find_by_id_and_update_content(
        &self,
        id: &str,
        content: String,
    ) -> Result<Option<Comment>, RepoError> {
        let id = cast_id(id)?;
        let content = required("content", Some(content))?;

        let mut store = self.store.write().await;
        let Some(comment) = store.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        comment.content = content;

        Ok(Some(comment.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, RepoError> {
        let id = cast_id(id)?;
        let mut store = self.store.write().await;

        let before = store.len();
        store.retain(|c| c.id != id);
        Ok(store.len() < before)
    }
}
