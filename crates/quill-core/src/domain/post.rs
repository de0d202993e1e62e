use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::schema::{SchemaError, cast_date, cast_string, required};

/// Post entity - a top-level blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl Post {
    pub fn from_fields(id: Uuid, fields: PostFields) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            author: fields.author,
            publish_date: fields.publish_date,
        }
    }
}

/// Post fields as a client submitted them, uncast and unchecked.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub author: Option<Value>,
    pub publish_date: Option<Value>,
}

/// Post fields accepted by the store schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl PostDraft {
    /// Schema check for an insert; a missing `publishDate` defaults to `now`.
    pub fn for_insert(self, now: DateTime<Utc>) -> Result<PostFields, SchemaError> {
        Ok(PostFields {
            title: required("title", cast_string("title", self.title)?)?,
            content: required("content", cast_string("content", self.content)?)?,
            author: required("author", cast_string("author", self.author)?)?,
            publish_date: cast_date("publishDate", self.publish_date)?.unwrap_or(now),
        })
    }

    /// Schema check for a full replacement: every path is mandatory.
    pub fn for_replace(self) -> Result<PostFields, SchemaError> {
        Ok(PostFields {
            title: required("title", cast_string("title", self.title)?)?,
            content: required("content", cast_string("content", self.content)?)?,
            author: required("author", cast_string("author", self.author)?)?,
            publish_date: cast_date("publishDate", self.publish_date)?
                .ok_or(SchemaError::Required("publishDate"))?,
        })
    }
}

/// Selection applied by `PostRepository::find`.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Exact, case-sensitive author match.
    pub author: Option<String>,
}

impl PostFilter {
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.author
            .as_deref()
            .is_none_or(|author| post.author == author)
    }
}
