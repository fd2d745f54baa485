pub mod auth;

use actix_web::web;

use crate::handlers::{health_check, openapi_json, readiness_check};

/// Register every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/health/ready", web::get().to(readiness_check))
        .route("/openapi.json", web::get().to(openapi_json))
        .service(web::scope("/auth").configure(auth::configure));
}
