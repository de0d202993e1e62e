//! Post handlers.
//!
//! Bodies go to the store unchecked; a missing field surfaces as the store's
//! rejection, i.e. a 500 carrying the operation's failure message.

use actix_web::{HttpResponse, web};

use quill_core::domain::PostDraft;
use quill_shared::ApiResponse;
use quill_shared::dto::{ListPostsQuery, PostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn into_draft(req: PostRequest) -> PostDraft {
    PostDraft {
        title: req.title,
        content: req.content,
        author: req.author,
        publish_date: req.publish_date,
    }
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(into_draft(body.into_inner())).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        post,
        "Post created successfully",
    )))
}

/// GET /posts?author=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list(query.into_inner().author).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::collection(posts)))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// PUT /posts/{id} - full replacement.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(&path, into_draft(body.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        post,
        "Post updated successfully",
    )))
}
