//! Comment handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::NewComment;
use quill_shared::ApiResponse;
use quill_shared::dto::{CreateCommentRequest, UpdateCommentRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /comments
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let comment = state
        .comments
        .create(NewComment {
            owner: req.owner,
            post_id: req.post_id,
            content: req.content,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        comment,
        "Comment created successfully",
    )))
}

/// GET /comments/{id}
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comment = state.comments.get(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(comment)))
}

/// GET /posts/{post_id}/comments
pub async fn list_post_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comments = state.comments.list_by_post(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::collection(comments)))
}

/// PUT /comments/{id} - only `content` changes.
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateCommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = state
        .comments
        .update(&path, body.into_inner().content)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        comment,
        "Comment updated successfully",
    )))
}

/// DELETE /comments/{id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.comments.delete(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Comment deleted successfully")))
}
