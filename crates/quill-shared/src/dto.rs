//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional on purpose: which absences are rejected, and
//! where, is decided by the services and the store, not by deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Values are kept untyped; casting them is part of the store schema check,
/// so a wrongly-typed field fails like any other store rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub author: Option<Value>,
    pub publish_date: Option<Value>,
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(alias = "sender")]
    pub author: Option<String>,
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub owner: Option<String>,
    pub post_id: Option<String>,
    pub content: Option<String>,
}

/// Body of `PUT /comments/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: Option<String>,
}

/// Payload of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub timestamp: String,
}
