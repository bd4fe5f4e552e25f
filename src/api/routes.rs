// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/status", web::get().to(handlers::get_status))
            .route("/refresh", web::post().to(handlers::refresh))
    );
}

/// Catch-all for the embedded page; register after every other route.
pub fn configure_assets(cfg: &mut web::ServiceConfig) {
    cfg.route("/{path:.*}", web::get().to(handlers::serve_asset));
}
