//! HTTP rendering of classified failures
//!
//! [`HttpError`] is the error type every handler returns. It is classified
//! once, when it is created, and renders the shared error envelope through
//! actix-web's [`ResponseError`].

use actix_web::{
    error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError,
};
use std::fmt;
use validator::{ValidationErrors, ValidationErrorsKind};

use ge_core::errors::{
    handle_error, handle_not_found, handle_validation_error, translate_validation_message,
    ApiError, ErrorReply, Failure, TransportError, ValidationIssue, ValidationReport,
};

/// A failure that has been classified and is ready to be written out
#[derive(Debug)]
pub struct HttpError {
    reply: ErrorReply,
}

impl HttpError {
    /// Classify an arbitrary failure
    pub fn from_failure(failure: &Failure) -> Self {
        Self {
            reply: handle_error(failure),
        }
    }

    /// Reply for a request that matched no route
    pub fn not_found() -> Self {
        Self {
            reply: handle_not_found(),
        }
    }

    /// Reply for a payload that failed validation
    pub fn validation(report: ValidationReport) -> Self {
        Self {
            reply: handle_validation_error(report),
        }
    }

    /// Status-bearing failure raised by the framework
    pub fn transport(status: StatusCode, message: impl Into<String>) -> Self {
        Self::from_failure(&Failure::Transport(TransportError::new(status.as_u16(), message)))
    }

    /// Classify an error produced anywhere in the actix-web stack.
    ///
    /// An `HttpError` travelling inside is reused as is; anything else is a
    /// transport failure carrying its own status.
    pub fn from_actix(error: &actix_web::Error) -> Self {
        if let Some(http_error) = error.as_error::<HttpError>() {
            return Self {
                reply: http_error.reply.clone(),
            };
        }
        let status = error.as_response_error().status_code();
        Self::transport(status, error.to_string())
    }

    pub fn reply(&self) -> &ErrorReply {
        &self.reply
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.reply.body.error();
        write!(f, "{} ({}): {}", error.code, error.name, error.message)
    }
}

impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        status_code(self.reply.status)
    }

    fn error_response(&self) -> HttpResponse {
        render_reply(&self.reply)
    }
}

impl From<ApiError> for HttpError {
    fn from(error: ApiError) -> Self {
        Self::from_failure(&Failure::Api(error))
    }
}

impl From<anyhow::Error> for HttpError {
    fn from(error: anyhow::Error) -> Self {
        Self::from_failure(&Failure::from(error))
    }
}

impl From<ValidationErrors> for HttpError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation(translate_validator_errors(&errors))
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Write a reply as a JSON response
pub fn render_reply(reply: &ErrorReply) -> HttpResponse {
    HttpResponse::build(status_code(reply.status)).json(&reply.body)
}

/// Flatten `validator` errors into issues with dotted paths, sorted by path
pub fn translate_validator_errors(errors: &ValidationErrors) -> ValidationReport {
    let mut issues = Vec::new();
    collect_issues(None, errors, &mut issues);
    issues.sort_by(|a, b| a.path.cmp(&b.path));
    ValidationReport::from_issues(issues)
}

fn collect_issues(prefix: Option<&str>, errors: &ValidationErrors, issues: &mut Vec<ValidationIssue>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    issues.push(ValidationIssue::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_issues(Some(&path), nested, issues),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_issues(Some(&format!("{}.{}", path, index)), nested, issues);
                }
            }
        }
    }
}

/// Error handler for the JSON body extractor.
///
/// Bodies that are well-formed JSON but do not fit the expected shape go
/// through the validation hook; everything else (syntax errors, size limit,
/// content type) is a 400 transport failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let error = match &err {
        JsonPayloadError::Deserialize(e) if e.is_data() => {
            HttpError::validation(translate_validation_message(&e.to_string()))
        }
        _ => HttpError::transport(StatusCode::BAD_REQUEST, err.to_string()),
    };
    error.into()
}

/// Default service: no route matched
pub async fn not_found() -> Result<HttpResponse, HttpError> {
    Err(HttpError::not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ge_shared::errors::ErrorCode;
    use validator::Validate;

    #[derive(Validate)]
    struct Venue {
        #[validate(length(min = 1, message = "City is required"))]
        city: String,
    }

    #[derive(Validate)]
    struct CreateEvent {
        #[validate(length(min = 3, message = "Title is too short"))]
        title: String,
        #[validate(range(min = 1))]
        capacity: u32,
        #[validate(nested)]
        venue: Venue,
    }

    #[test]
    fn test_validator_errors_are_flattened_and_sorted() {
        let event = CreateEvent {
            title: "x".to_string(),
            capacity: 0,
            venue: Venue { city: String::new() },
        };

        let report = translate_validator_errors(&event.validate().unwrap_err());
        assert_eq!(
            report.issues().unwrap(),
            &[
                ValidationIssue::new("capacity", "range"),
                ValidationIssue::new("title", "Title is too short"),
                ValidationIssue::new("venue.city", "City is required"),
            ]
        );
    }

    #[test]
    fn test_api_error_keeps_its_status() {
        let error = HttpError::from(ApiError::too_many_requests("RateLimited"));
        assert_eq!(error.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(error.reply().code(), ErrorCode::TooManyRequests);
    }

    #[test]
    fn test_actix_error_becomes_transport_failure() {
        let error = actix_web::error::ErrorForbidden("HTTPS required");
        let http_error = HttpError::from_actix(&error);

        assert_eq!(http_error.status_code(), StatusCode::FORBIDDEN);
        let body = http_error.reply().body.error();
        assert_eq!(body.name, "HttpError");
        assert_eq!(body.message, "HTTPS required");
    }

    #[test]
    fn test_wrapped_http_error_is_reused() {
        let error: actix_web::Error = HttpError::from(ApiError::conflict("SlugTaken")).into();
        let http_error = HttpError::from_actix(&error);
        assert_eq!(http_error.reply().body.error().name, "SlugTaken");
    }

    #[test]
    fn test_display() {
        let error = HttpError::not_found();
        assert_eq!(
            error.to_string(),
            "NOT_FOUND (HttpError): The requested resource could not be found."
        );
    }
}
