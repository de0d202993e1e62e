//! # Quill API Server
//!
//! HTTP boundary of the Quill blogging backend: configuration, telemetry,
//! shared state and the Actix-web routes. `main.rs` wires these together;
//! the integration tests mount the same routes through [`configure_app`].

use actix_web::web;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use middleware::error::AppError;
use state::AppState;

/// Register state, extractor config and every route on an app.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let json = web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

        cfg.app_data(web::Data::new(state))
            .app_data(json)
            .configure(handlers::configure_routes);
    }
}
