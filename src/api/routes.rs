// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .service(
                web::scope("/evaluations")
                    .route("", web::post().to(handlers::evaluate_submission))
                    .route("/batch", web::post().to(handlers::evaluate_batch))
            )
    );
}
