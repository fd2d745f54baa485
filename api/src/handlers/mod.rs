pub mod error;
pub mod health;
pub mod openapi;

pub use error::{json_error_handler, not_found, HttpError};
pub use health::{health_check, readiness_check};
pub use openapi::openapi_json;
