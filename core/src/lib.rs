//! # GathEvent Core
//!
//! Domain layer for the GathEvent backend: the application error type,
//! translation of validation failures, and the dispatcher that turns any
//! failure into the shared error envelope.
//!
//! Nothing in this crate depends on the web framework; status codes are
//! plain `u16` values.

pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{
    handle_error, handle_not_found, handle_validation_error, ApiError, ErrorReply,
    Failure, TransportError, ValidationIssue, ValidationReport,
};
