//! HTTP surface of the GathEvent service
//!
//! Routes, middleware and the actix-web rendering of the shared error
//! envelope. Failure classification itself lives in `ge_core::errors`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};

/// Title of the API document
pub const APP_TITLE: &str = "GathEvent API";

/// Service name reported by the health probes
pub const APP_SERVICE_NAME: &str = "gathevent-api";

/// Description of the API document
pub const APP_DESCRIPTION: &str = "Event management API with a uniform JSON error envelope";
