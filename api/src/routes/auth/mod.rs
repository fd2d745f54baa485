//! Authentication routes

pub mod register;

use actix_web::web;

/// Routes are registered as resources so that a known path with the wrong
/// method answers 405 instead of falling through to the not-found handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register::register)));
}
