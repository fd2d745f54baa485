//! Wire-level error envelope returned on every failed request

use serde::Serialize;
use serde_json::{Map, Value};

use super::codes::ErrorCode;

/// Structured, free-form details attached to an error
pub type ErrorDetails = Map<String, Value>;

/// Canonical failure body:
/// `{ "success": false, "error": { "code", "name", "message", "details"? } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    success: bool,
    error: ErrorBody,
}

/// The `error` object inside an [`ErrorEnvelope`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Short identifier for the error, usable as an i18n key
    pub name: String,

    /// Human-readable explanation
    pub message: String,

    /// Additional details, omitted entirely when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

impl ErrorEnvelope {
    /// Always `false`; the envelope is only used on the failure path
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> &ErrorBody {
        &self.error
    }
}

/// Assemble an error envelope from its parts.
///
/// Values pass through untouched; `details` is only present in the output
/// when supplied.
pub fn create_error_response(
    code: ErrorCode,
    name: impl Into<String>,
    message: impl Into<String>,
    details: Option<ErrorDetails>,
) -> ErrorEnvelope {
    ErrorEnvelope {
        success: false,
        error: ErrorBody {
            code,
            name: name.into(),
            message: message.into(),
            details,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_without_details() {
        let envelope = create_error_response(
            ErrorCode::NotFound,
            "HttpError",
            "The requested resource could not be found.",
            None,
        );

        assert!(!envelope.success());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "success": false,
                "error": {
                    "code": "NOT_FOUND",
                    "name": "HttpError",
                    "message": "The requested resource could not be found."
                }
            })
        );
    }

    #[test]
    fn test_details_key_absent_when_not_supplied() {
        let envelope = create_error_response(ErrorCode::BadRequest, "X", "y", None);
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value["error"].get("details").is_none());
    }

    #[test]
    fn test_envelope_with_details() {
        let mut details = ErrorDetails::new();
        details.insert("field".to_string(), json!("slug"));

        let envelope = create_error_response(ErrorCode::Conflict, "SlugTaken", "taken", Some(details));

        assert_eq!(envelope.error().code, ErrorCode::Conflict);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap()["error"]["details"],
            json!({ "field": "slug" })
        );
    }

    #[test]
    fn test_empty_details_are_kept_when_explicitly_supplied() {
        let envelope = create_error_response(ErrorCode::BadRequest, "X", "y", Some(ErrorDetails::new()));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["error"]["details"], json!({}));
    }
}
