//! In-memory post collection.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::schema::cast_id;
use quill_core::domain::{Post, PostDraft, PostFilter};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// Posts kept in insertion order behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let fields = draft.for_insert(Utc::now())?;
        let post = Post::from_fields(Uuid::new_v4(), fields);

        self.store.write().await.push(post.clone());
        Ok(post)
    }

    async fn find(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        // Later inserts win ties on publish_date.
        let mut posts: Vec<Post> = store
            .iter()
            .rev()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let id = cast_id(id)?;
        let store = self.store.read().await;

        Ok(store.iter().find(|post| post.id == id).cloned())
    }

    async fn find_by_id_and_replace(
        &self,
        id: &str,
        draft: PostDraft,
    ) -> Result<Option<Post>, RepoError> {
        let id = cast_id(id)?;
        let fields = draft.for_replace()?;

        let mut store = self.store.write().await;
        let Some(slot) = store.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        *slot = Post::from_fields(id, fields);

        Ok(Some(slot.clone()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone};
    use serde_json::json;

    use super::*;

    fn draft(title: &str, author: &str, publish_date: Option<DateTime<Utc>>) -> PostDraft {
        PostDraft {
            title: Some(title.into()),
            content: Some(format!("{title} content").into()),
            author: Some(author.into()),
            publish_date: publish_date.map(|d| json!(d)),
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(draft("First", "A", Some(day(15)))).await.unwrap();

        let found = repo.find_by_id(&post.id.to_string()).await.unwrap();
        assert_eq!(found, Some(post));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let repo = InMemoryPostRepository::new();
        let err = repo.create(draft("", "A", None)).await.unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
        assert!(repo.find(PostFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_orders_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.create(draft("Older", "A", Some(day(10)))).await.unwrap();
        repo.create(draft("Newest", "B", Some(day(20)))).await.unwrap();
        repo.create(draft("Middle", "A", Some(day(15)))).await.unwrap();

        let titles: Vec<String> = repo
            .find(PostFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["Newest", "Middle", "Older"]);

        let by_a = repo.find(PostFilter::by_author("A")).await.unwrap();
        assert_eq!(by_a.len(), 2);
        assert_eq!(by_a[0].title, "Middle");
    }

    #[tokio::test]
    async fn test_malformed_id() {
        let repo = InMemoryPostRepository::new();
        let err = repo.find_by_id("invalid-id").await.unwrap_err();
        assert!(matches!(err, RepoError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_replace_missing_post() {
        let repo = InMemoryPostRepository::new();
        let replaced = repo
            .find_by_id_and_replace(&Uuid::new_v4().to_string(), draft("T", "A", Some(day(1))))
            .await
            .unwrap();
        assert!(replaced.is_none());
    }

    #[tokio::test]
    async fn test_replace_requires_every_field() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(draft("T", "A", Some(day(1)))).await.unwrap();

        let partial = PostDraft {
            title: Some("Only title".into()),
            ..Default::default()
        };
        let err = repo
            .find_by_id_and_replace(&post.id.to_string(), partial)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));

        let unchanged = repo.find_by_id(&post.id.to_string()).await.unwrap();
        assert_eq!(unchanged, Some(post));
    }
}
