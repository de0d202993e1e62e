//! Comment entity for SeaORM.
//!
//! `post_id` is indexed but carries no foreign key, so nothing cascades.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{Comment, CommentDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner: String,
    #[sea_orm(indexed)]
    pub post_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Comment.
impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner: model.owner,
            post_id: model.post_id,
            content: model.content,
            created_at: model.created_at.into(),
        }
    }
}

impl ActiveModel {
    /// New row from a draft that already passed the schema check.
    pub fn from_draft(id: Uuid, draft: CommentDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Set(id),
            owner: Set(draft.owner),
            post_id: Set(draft.post_id),
            content: Set(draft.content),
            created_at: Set(created_at.into()),
        }
    }
}
