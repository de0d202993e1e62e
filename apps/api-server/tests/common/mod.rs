//! Shared helpers for the HTTP integration tests.

#![allow(dead_code, unused_macros)]

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use api_server::state::AppState;
use quill_core::domain::{Comment, NewComment, Post, PostDraft};

/// Initialise an app over `$state` with every route mounted.
macro_rules! app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new().configure(api_server::configure_app($state.clone())),
        )
        .await
    };
}

/// Send a `TestRequest` and return the status with the JSON body
/// (`Null` when the body is not JSON).
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = actix_web::test::read_body(resp).await;
        let json = serde_json::from_slice::<serde_json::Value>(&body)
            .unwrap_or(serde_json::Value::Null);
        (status, json)
    }};
}

pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub async fn seed_post(state: &AppState, title: &str, author: &str, day: u32) -> Post {
    state
        .posts
        .create(PostDraft {
            title: Some(json!(title)),
            content: Some(json!(format!("{title} content"))),
            author: Some(json!(author)),
            publish_date: Some(json!(date(2024, 1, day))),
        })
        .await
        .unwrap()
}

pub async fn seed_comment(state: &AppState, post: &Post, content: &str) -> Comment {
    state
        .comments
        .create(NewComment {
            owner: Some("Alice".to_string()),
            post_id: Some(post.id.to_string()),
            content: Some(content.to_string()),
        })
        .await
        .unwrap()
}
