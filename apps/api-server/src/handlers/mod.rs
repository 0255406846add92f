//! HTTP handlers and route configuration.

mod auth;
mod health;
mod jobs;


use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| error::Error::from(AppError::BadRequest(err.to_string()))),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| error::Error::from(AppError::BadRequest(err.to_string()))),
    )
    .service(
        web::scope("/api/v1")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login)),
            )
            // Authenticated routes
            .service(
                web::scope("/jobs")
                    .route("", web::post().to(jobs::create))
                    .route("", web::get().to(jobs::index))
                    .route("/stats", web::get().to(jobs::stats))
                    .route("/{id}", web::get().to(jobs::show))
                    .route("/{id}", web::patch().to(jobs::update))
                    .route("/{id}", web::delete().to(jobs::destroy)),
            ),
    );
}
