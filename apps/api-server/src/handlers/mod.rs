//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::welcome))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create_post))
                .route("", web::get().to(posts::list_posts))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::put().to(posts::update_post))
                .route("/{post_id}/comments", web::get().to(comments::list_post_comments)),
        )
        .service(
            web::scope("/comments")
                .route("", web::post().to(comments::create_comment))
                .route("/{id}", web::get().to(comments::get_comment))
                .route("/{id}", web::put().to(comments::update_comment))
                .route("/{id}", web::delete().to(comments::delete_comment)),
        );
}
