//! Error taxonomy and response envelope shared by every crate

pub mod codes;
pub mod envelope;

pub use codes::{ErrorCode, ErrorDefinition, ERROR_TABLE};
pub use envelope::{create_error_response, ErrorBody, ErrorDetails, ErrorEnvelope};
