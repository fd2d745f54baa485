//! Domain error type and failure classification.
//!
//! Handlers raise [`ApiError`] values; the [`dispatch`] module turns any
//! failure (domain, transport or unrecognized) into an error envelope.

pub mod dispatch;
pub mod validation;

#[cfg(test)]
mod tests;

pub use dispatch::{
    handle_error, handle_not_found, handle_validation_error, ErrorReply, Failure, TransportError,
    GENERIC_ERROR_NAME, VALIDATION_ERROR_MESSAGE, VALIDATION_ERROR_NAME,
};
pub use validation::{translate_validation_message, ValidationIssue, ValidationReport};

use ge_shared::errors::{ErrorCode, ErrorDetails};
use serde_json::Value;
use thiserror::Error;

/// Application-raised error carrying a code, an identifier name, a message
/// and optional structured details.
///
/// The HTTP status is always derived from the code.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    code: ErrorCode,
    name: String,
    message: String,
    details: Option<ErrorDetails>,
}

impl ApiError {
    /// Create an error with the code's default message
    pub fn new(code: ErrorCode, name: impl Into<String>) -> Self {
        Self::from_parts(code, name, None, None)
    }

    /// Create an error from all of its parts; a missing message falls back to
    /// the code's default message.
    pub fn from_parts(
        code: ErrorCode,
        name: impl Into<String>,
        message: Option<String>,
        details: Option<ErrorDetails>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            message: message.unwrap_or_else(|| code.default_message().to_string()),
            details,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Add a single detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(ErrorDetails::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn bad_request(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, name)
    }

    pub fn unauthorized(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, name)
    }

    pub fn forbidden(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, name)
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, name)
    }

    pub fn method_not_allowed(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, name)
    }

    pub fn conflict(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, name)
    }

    pub fn too_many_requests(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::TooManyRequests, name)
    }

    pub fn internal_server_error(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalServerError, name)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// HTTP status registered for this error's code
    pub fn status(&self) -> u16 {
        self.code.status()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&ErrorDetails> {
        self.details.as_ref()
    }

    pub(crate) fn into_parts(self) -> (ErrorCode, String, String, Option<ErrorDetails>) {
        (self.code, self.name, self.message, self.details)
    }
}

