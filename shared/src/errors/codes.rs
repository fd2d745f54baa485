//! Error taxonomy table and the status-to-code index
//!
//! Every error surfaced to API clients is classified into one of the
//! [`ErrorCode`] kinds below. Each kind owns exactly one HTTP status and one
//! default human-readable message, registered in [`ERROR_TABLE`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Machine-readable error code carried in every error envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    TooManyRequests,
    InternalServerError,
}

/// A single registration in the taxonomy table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDefinition {
    pub code: ErrorCode,
    pub status: u16,
    pub message: &'static str,
}

/// The taxonomy table, in registration order.
///
/// Entries are listed in the same order as the [`ErrorCode`] variants so a
/// code's discriminant is its row.
pub const ERROR_TABLE: [ErrorDefinition; 8] = [
    ErrorDefinition {
        code: ErrorCode::BadRequest,
        status: 400,
        message: "The request was invalid or cannot be served.",
    },
    ErrorDefinition {
        code: ErrorCode::Unauthorized,
        status: 401,
        message: "Authentication is required and has failed or has not yet been provided.",
    },
    ErrorDefinition {
        code: ErrorCode::Forbidden,
        status: 403,
        message: "The request was a valid request, but the server is refusing to respond to it.",
    },
    ErrorDefinition {
        code: ErrorCode::NotFound,
        status: 404,
        message: "The requested resource could not be found.",
    },
    ErrorDefinition {
        code: ErrorCode::MethodNotAllowed,
        status: 405,
        message: "The request method is not supported for the requested resource.",
    },
    ErrorDefinition {
        code: ErrorCode::Conflict,
        status: 409,
        message: "The request could not be completed due to a conflict with the current state of the resource.",
    },
    ErrorDefinition {
        code: ErrorCode::TooManyRequests,
        status: 429,
        message: "You have sent too many requests in a given amount of time. Please try again later.",
    },
    ErrorDefinition {
        code: ErrorCode::InternalServerError,
        status: 500,
        message: "An unexpected error occurred on the server.",
    },
];

/// Reverse index from HTTP status to error code.
///
/// Built once from [`ERROR_TABLE`]. Should two entries ever share a status,
/// the first registered entry keeps the slot.
static STATUS_INDEX: Lazy<HashMap<u16, ErrorCode>> = Lazy::new(|| build_status_index(&ERROR_TABLE));

fn build_status_index(table: &[ErrorDefinition]) -> HashMap<u16, ErrorCode> {
    let mut index = HashMap::with_capacity(table.len());
    for definition in table {
        index.entry(definition.status).or_insert(definition.code);
    }
    index
}

impl ErrorCode {
    /// All codes in registration order
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::BadRequest,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::NotFound,
        ErrorCode::MethodNotAllowed,
        ErrorCode::Conflict,
        ErrorCode::TooManyRequests,
        ErrorCode::InternalServerError,
    ];

    /// Taxonomy entry for this code
    pub fn definition(self) -> &'static ErrorDefinition {
        &ERROR_TABLE[self as usize]
    }

    /// HTTP status registered for this code
    pub fn status(self) -> u16 {
        self.definition().status
    }

    /// Default human-readable message registered for this code
    pub fn default_message(self) -> &'static str {
        self.definition().message
    }

    /// Look up the code registered for an HTTP status.
    ///
    /// Statuses with no registration resolve to
    /// [`ErrorCode::InternalServerError`], so an unmapped status never
    /// reaches a client as an unknown code.
    pub fn from_status(status: u16) -> Self {
        STATUS_INDEX
            .get(&status)
            .copied()
            .unwrap_or(ErrorCode::InternalServerError)
    }

    /// Wire representation of the code
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::TooManyRequests => "TOO_MANY_REQUESTS",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("Unknown error code: {}", s))
    }
}
