//! Error bodies (RFC 7807 Problem Details).

use serde::{Deserialize, Serialize};

/// One failed input rule, as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Field-level failures for validation problems.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorBody>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            errors: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<FieldErrorBody>) -> Self {
        self.errors = errors;
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(401, "Unauthorized").with_detail(detail)
    }

    pub fn unprocessable(detail: impl Into<String>, errors: Vec<FieldErrorBody>) -> Self {
        Self::new(422, "Invalid Inputs")
            .with_detail(detail)
            .with_errors(errors)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_lists_fields() {
        let body = ErrorResponse::unprocessable(
            "Invalid inputs",
            vec![FieldErrorBody {
                field: "email".to_string(),
                message: "E-mail is required".to_string(),
            }],
        );

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "about:blank");
        assert_eq!(value["status"], 422);
        assert_eq!(value["errors"][0]["field"], "email");
    }

    #[test]
    fn test_empty_errors_are_omitted() {
        let value = serde_json::to_value(ErrorResponse::internal_error()).unwrap();
        assert!(value.get("errors").is_none());
        assert!(value.get("detail").is_none());
    }
}
