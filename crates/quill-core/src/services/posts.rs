use std::sync::Arc;

use crate::domain::{Post, PostDraft, PostFilter};
use crate::error::DomainError;
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Post resource operations.
///
/// Posts get no pre-store validation: a draft with missing fields goes to the
/// store, and the store's rejection surfaces like any other store failure.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let post = self
            .posts
            .create(draft)
            .await
            .map_err(|e| DomainError::internal("Failed to create post", e))?;

        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    /// Every post, or only those by `author`, newest first.
    pub async fn list(&self, author: Option<String>) -> Result<Vec<Post>, DomainError> {
        let filter = PostFilter { author };
        self.posts
            .find(filter)
            .await
            .map_err(|e| DomainError::internal("Failed to fetch posts", e))
    }

    /// A malformed `id` is a store failure here, not a not-found.
    pub async fn get(&self, id: &str) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::internal("Failed to fetch post", e))?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    /// Full replacement of title, content, author and publish date.
    pub async fn update(&self, id: &str, draft: PostDraft) -> Result<Post, DomainError> {
        let post = self
            .posts
            .find_by_id_and_replace(id, draft)
            .await
            .map_err(|e| DomainError::internal("Failed to update post", e))?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        tracing::debug!(post_id = %post.id, "Post updated");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::error::RepoError;

    /// Single-post store that applies the real schema rules.
    struct OnePost(Post);

    #[async_trait]
    impl PostRepository for OnePost {
        async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
            Ok(Post::from_fields(Uuid::new_v4(), draft.for_insert(Utc::now())?))
        }

        async fn find(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
            Ok(Some(self.0.clone())
                .filter(|post| filter.matches(post))
                .into_iter()
                .collect())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
            let id = crate::domain::schema::cast_id(id)?;
            Ok((id == self.0.id).then(|| self.0.clone()))
        }

        async fn find_by_id_and_replace(
            &self,
            id: &str,
            draft: PostDraft,
        ) -> Result<Option<Post>, RepoError> {
            let id = crate::domain::schema::cast_id(id)?;
            let fields = draft.for_replace()?;
            Ok((id == self.0.id).then(|| Post::from_fields(id, fields)))
        }
    }

    fn service() -> (PostService, Post) {
        let post = Post {
            id: Uuid::new_v4(),
            title: "Title".into(),
            content: "Body".into(),
            author: "John Doe".into(),
            publish_date: Utc::now(),
        };
        (PostService::new(Arc::new(OnePost(post.clone()))), post)
    }

    #[tokio::test]
    async fn test_create_missing_field_is_internal() {
        let (service, _) = service();
        let err = service
            .create(PostDraft {
                content: Some("Body".into()),
                author: Some("A".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Internal {
                context: "Failed to create post",
                source: RepoError::Constraint(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_internal_not_not_found() {
        let (service, _) = service();
        let err = service.get("invalid-id").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Internal {
                context: "Failed to fetch post",
                source: RepoError::InvalidId(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let (service, _) = service();
        let err = service.get(&Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "Post", .. }));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (service, post) = service();
        let publish_date = Utc::now();
        let updated = service
            .update(
                &post.id.to_string(),
                PostDraft {
                    title: Some("New".into()),
                    content: Some("New body".into()),
                    author: Some("Jane".into()),
                    publish_date: Some(serde_json::json!(publish_date)),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "New body");
        assert_eq!(updated.author, "Jane");
        assert_eq!(updated.publish_date, publish_date);
    }

    #[tokio::test]
    async fn test_list_filters_by_author() {
        let (service, _) = service();
        assert_eq!(service.list(None).await.unwrap().len(), 1);
        assert!(service.list(Some("Nobody".into())).await.unwrap().is_empty());
    }
}
