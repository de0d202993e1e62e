use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schema::{SchemaError, required};

/// Comment entity - attached to exactly one post at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub owner: String,
    pub post_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment input as received from a client.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub owner: Option<String>,
    pub post_id: Option<String>,
    pub content: Option<String>,
}

/// A comment ready to be written: the post was resolved and the text trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub owner: String,
    pub post_id: Uuid,
    pub content: String,
}

impl CommentDraft {
    /// Store schema check. Trimming may have emptied a field that passed the
    /// pre-store check, so `owner` and `content` are checked again here.
    pub fn validate(self) -> Result<Self, SchemaError> {
        Ok(Self {
            owner: required("owner", Some(self.owner))?,
            post_id: self.post_id,
            content: required("content", Some(self.content))?,
        })
    }

    pub fn into_comment(self, id: Uuid, created_at: DateTime<Utc>) -> Comment {
        Comment {
            id,
            owner: self.owner,
            post_id: self.post_id,
            content: self.content,
            created_at,
        }
    }
}
