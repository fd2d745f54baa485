//! Failure classification.
//!
//! Three entry points are exposed to the hosting framework:
//! - [`handle_error`] for any failure raised while handling a request
//! - [`handle_not_found`] for unmatched routes
//! - [`handle_validation_error`] for rejected request payloads
//!
//! Each returns an [`ErrorReply`]: the HTTP status and the envelope to
//! serialize. None of them can fail.

use ge_shared::errors::{create_error_response, ErrorCode, ErrorDetails, ErrorEnvelope};
use thiserror::Error;

use super::validation::ValidationReport;
use super::ApiError;

/// Name used for failures that did not originate from an [`ApiError`]
pub const GENERIC_ERROR_NAME: &str = "HttpError";

/// Name used for rejected request payloads
pub const VALIDATION_ERROR_NAME: &str = "ValidationError";

/// Message used for rejected request payloads
pub const VALIDATION_ERROR_MESSAGE: &str = "The request data is invalid.";

/// Status-bearing failure raised by the transport layer (routing, payload
/// extraction) rather than by application code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    status: u16,
    message: String,
}

impl TransportError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Any failure intercepted at the request boundary
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Declared by application code
    Api(ApiError),
    /// Raised by the framework with its own status
    Transport(TransportError),
    /// Anything else
    Unrecognized { message: String },
}

impl Failure {
    pub fn unrecognized(message: impl Into<String>) -> Self {
        Failure::Unrecognized {
            message: message.into(),
        }
    }
}

impl From<ApiError> for Failure {
    fn from(error: ApiError) -> Self {
        Failure::Api(error)
    }
}

impl From<TransportError> for Failure {
    fn from(error: TransportError) -> Self {
        Failure::Transport(error)
    }
}

impl From<anyhow::Error> for Failure {
    /// Domain errors are recognized before transport errors, so an
    /// [`ApiError`] is never reported under the generic name.
    fn from(error: anyhow::Error) -> Self {
        if let Some(api_error) = error.downcast_ref::<ApiError>() {
            Failure::Api(api_error.clone())
        } else if let Some(transport) = error.downcast_ref::<TransportError>() {
            Failure::Transport(transport.clone())
        } else {
            Failure::unrecognized(error.to_string())
        }
    }
}

/// Status and body to write back to the client
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReply {
    pub status: u16,
    pub body: ErrorEnvelope,
}

impl ErrorReply {
    fn new(
        code: ErrorCode,
        name: impl Into<String>,
        message: impl Into<String>,
        details: Option<ErrorDetails>,
    ) -> Self {
        Self {
            status: code.status(),
            body: create_error_response(code, name, message, details),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.body.error().code
    }
}

fn message_or_default(message: &str, code: ErrorCode) -> String {
    if message.is_empty() {
        code.default_message().to_string()
    } else {
        message.to_string()
    }
}

/// Classify a failure and build its reply.
///
/// Order matters: domain errors, then transport errors, then the
/// internal-error fallback.
pub fn handle_error(failure: &Failure) -> ErrorReply {
    match failure {
        Failure::Api(error) => {
            let (code, name, message, details) = error.clone().into_parts();
            ErrorReply::new(code, name, message, details)
        }
        Failure::Transport(error) => {
            let code = ErrorCode::from_status(error.status());
            let message = message_or_default(error.message(), code);
            ErrorReply::new(code, GENERIC_ERROR_NAME, message, None)
        }
        Failure::Unrecognized { message } => {
            let code = ErrorCode::InternalServerError;
            ErrorReply::new(code, GENERIC_ERROR_NAME, message_or_default(message, code), None)
        }
    }
}

/// Reply for a request that matched no route
pub fn handle_not_found() -> ErrorReply {
    let code = ErrorCode::NotFound;
    ErrorReply::new(code, GENERIC_ERROR_NAME, code.default_message(), None)
}

/// Reply for a request whose payload failed validation
pub fn handle_validation_error(report: ValidationReport) -> ErrorReply {
    let mut details = ErrorDetails::new();
    details.insert("errors".to_string(), report.into());

    ErrorReply::new(
        ErrorCode::BadRequest,
        VALIDATION_ERROR_NAME,
        VALIDATION_ERROR_MESSAGE,
        Some(details),
    )
}
