//! Translation of schema-validation failures into envelope details

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single failed field: dotted path plus the validator's explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Outcome of translating a validator failure.
///
/// Either the structured issues, or the validator's raw message when its
/// structure could not be read. Serializes untagged: an array of issues or a
/// plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidationReport {
    Issues(Vec<ValidationIssue>),
    Raw(String),
}

impl ValidationReport {
    pub fn from_issues(issues: impl IntoIterator<Item = ValidationIssue>) -> Self {
        ValidationReport::Issues(issues.into_iter().collect())
    }

    pub fn raw(message: impl Into<String>) -> Self {
        ValidationReport::Raw(message.into())
    }

    pub fn issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            ValidationReport::Issues(issues) => Some(issues),
            ValidationReport::Raw(_) => None,
        }
    }
}

impl From<ValidationReport> for Value {
    fn from(report: ValidationReport) -> Self {
        match report {
            ValidationReport::Issues(issues) => Value::Array(
                issues
                    .into_iter()
                    .map(|issue| {
                        let mut entry = serde_json::Map::new();
                        entry.insert("path".to_string(), Value::String(issue.path));
                        entry.insert("message".to_string(), Value::String(issue.message));
                        Value::Object(entry)
                    })
                    .collect(),
            ),
            ValidationReport::Raw(message) => Value::String(message),
        }
    }
}

/// Validator-native issue: `{"path": ["address", 0, "street"], "message": "..."}`
#[derive(Deserialize)]
struct NativeIssue {
    path: Vec<PathSegment>,
    message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PathSegment {
    Key(String),
    Index(u64),
}

impl PathSegment {
    fn into_string(self) -> String {
        match self {
            PathSegment::Key(key) => key,
            PathSegment::Index(index) => index.to_string(),
        }
    }
}

/// Translate a validator message into a report.
///
/// The message is expected to be a JSON array of `{path, message}` entries.
/// Anything else degrades to [`ValidationReport::Raw`] holding the message
/// unchanged; this function never fails.
pub fn translate_validation_message(message: &str) -> ValidationReport {
    match serde_json::from_str::<Vec<NativeIssue>>(message) {
        Ok(native) => ValidationReport::from_issues(native.into_iter().map(|issue| {
            let path = issue
                .path
                .into_iter()
                .map(PathSegment::into_string)
                .collect::<Vec<_>>()
                .join(".");
            ValidationIssue::new(path, issue.message)
        })),
        Err(_) => ValidationReport::raw(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_translate_structured_message() {
        let report = translate_validation_message(r#"[{"path":["email"],"message":"Invalid email"}]"#);
        assert_eq!(
            report,
            ValidationReport::Issues(vec![ValidationIssue::new("email", "Invalid email")])
        );
    }

    #[test]
    fn test_nested_paths_are_dotted() {
        let report = translate_validation_message(
            r#"[{"path":["tickets",2,"price"],"message":"Too small"},{"path":[],"message":"Required"}]"#,
        );
        assert_eq!(
            report.issues().unwrap(),
            &[
                ValidationIssue::new("tickets.2.price", "Too small"),
                ValidationIssue::new("", "Required"),
            ]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let report = translate_validation_message(
            r#"[{"path":["z"],"message":"1"},{"path":["a"],"message":"2"}]"#,
        );
        let paths: Vec<&str> = report.issues().unwrap().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["z", "a"]);
    }

    #[test]
    fn test_non_json_degrades_to_raw() {
        let report = translate_validation_message("name: too short");
        assert_eq!(report, ValidationReport::Raw("name: too short".to_string()));
    }

    #[test]
    fn test_unexpected_shapes_degrade_to_raw() {
        for message in [
            r#"{"path":["email"],"message":"Invalid email"}"#,
            r#"[{"message":"no path"}]"#,
            r#"[{"path":"email","message":"path not an array"}]"#,
            r#"[{"path":[true],"message":"bad segment"}]"#,
            r#"[{"path":["email"]}]"#,
            "",
        ] {
            assert_eq!(translate_validation_message(message), ValidationReport::raw(message));
        }
    }

    #[test]
    fn test_report_serializes_untagged() {
        let issues = ValidationReport::from_issues([ValidationIssue::new("email", "Invalid email")]);
        assert_eq!(
            serde_json::to_value(&issues).unwrap(),
            json!([{ "path": "email", "message": "Invalid email" }])
        );
        assert_eq!(Value::from(issues), json!([{ "path": "email", "message": "Invalid email" }]));

        let raw = ValidationReport::raw("oops");
        assert_eq!(serde_json::to_value(&raw).unwrap(), json!("oops"));
        assert_eq!(Value::from(raw), json!("oops"));
    }
}
