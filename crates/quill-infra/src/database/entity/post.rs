//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{Post, PostFields};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub publish_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            publish_date: model.publish_date.into(),
        }
    }
}

impl ActiveModel {
    /// Every column set, as written by both insert and full replacement.
    pub fn from_fields(id: Uuid, fields: PostFields) -> Self {
        Self {
            id: Set(id),
            title: Set(fields.title),
            content: Set(fields.content),
            author: Set(fields.author),
            publish_date: Set(fields.publish_date.into()),
        }
    }
}
