//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use quill_core::domain::schema::{cast_id, required};
use quill_core::domain::{Comment, CommentDraft, Post, PostDraft, PostFilter};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// `UPDATE ... RETURNING` that matched no row.
fn not_updated<T>(result: Result<T, DbErr>) -> Result<Option<T>, RepoError> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(db_err(e)),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let fields = draft.for_insert(Utc::now())?;

        let model = post::ActiveModel::from_fields(Uuid::new_v4(), fields)
            .insert(&self.db)
            .await
            .map_err(db_err)?;

        tracing::debug!(post_id = %model.id, "Post inserted");
        Ok(model.into())
    }

    async fn find(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find();
        if let Some(author) = filter.author {
            query = query.filter(post::Column::Author.eq(author));
        }

        let result = query
            .order_by_desc(post::Column::PublishDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        Ok(self.find_model(id).await?.map(Into::into))
    }

    async fn find_by_id_and_replace(
        &self,
        id: &str,
        draft: PostDraft,
    ) -> Result<Option<Post>, RepoError> {
        let id = cast_id(id)?;
        let fields = draft.for_replace()?;

        let result = post::ActiveModel::from_fields(id, fields)
            .update(&self.db)
            .await;

        Ok(not_updated(result)?.map(Into::into))
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, draft: CommentDraft) -> Result<Comment, RepoError> {
        let draft = draft.validate()?;

        let model = comment::ActiveModel::from_draft(Uuid::new_v4(), draft, Utc::now())
            .insert(&self.db)
            .await
            .map_err(db_err)?;

        tracing::debug!(comment_id = %model.id, "Comment inserted");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, RepoError> {
        Ok(self.find_model(id).await?.map(Into::into))
    }

    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_desc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id_and_update_content(
        &self,
        id: &str,
        content: String,
    ) -> Result<Option<Comment>, RepoError> {
        let id = cast_id(id)?;
        let content = required("content", Some(content))?;

        let result = comment::ActiveModel {
            id: Set(id),
            content: Set(content),
            ..Default::default()
        }
        .update(&self.db)
        .await;

        Ok(not_updated(result)?.map(Into::into))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, RepoError> {
        self.delete_model(id).await
    }
}
