//! REST API Client
//!
//! Per-resource wrappers over the backend REST API. Every operation
//! resolves to [`ApiResult`]; network failures and unexpected statuses
//! become error values here and never escape as unhandled rejections.
//!
//! Each wrapper special-cases only the statuses that are meaningful to
//! its endpoint and falls through to one generic internal error — the
//! fall-through is part of the contract, not an omission.

pub mod agency;
pub mod faq;
pub mod thread;
pub mod user;

mod http;

use serde::Deserialize;

pub type ApiResult<T> = Result<T, ApiError>;

/// Message shown when no endpoint-specific mapping applies.
pub const GENERIC_ERROR: &str = "Something went wrong on our end. Please try again.";

/// User-facing API failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// Field-level validation errors, when the server returned any.
    pub validation: Vec<FieldError>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            validation: Vec::new(),
        }
    }

    pub fn internal() -> Self {
        Self::new(GENERIC_ERROR)
    }

    /// Message for one offending field, for inline form display.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.validation
            .iter()
            .find(|e| e.field == name)
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Deserialize)]
struct ValidationBody {
    status: u16,
    error: String,
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// Decode a 400 response body: field-level errors when it matches the
/// server's validation shape, otherwise `fallback`.
pub(crate) fn validation_error(body: &str, fallback: &str) -> ApiError {
    match serde_json::from_str::<ValidationBody>(body) {
        Ok(v) if v.status == 400 && v.error == "Validation Failed" && !v.errors.is_empty() => {
            ApiError {
                message: "Please fix the highlighted fields.".to_string(),
                validation: v.errors,
            }
        }
        _ => ApiError::new(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_becomes_field_errors() {
        let body = r#"{
            "status": 400,
            "error": "Validation Failed",
            "errors": [
                {"field": "username", "message": "must be at least 3 characters"},
                {"field": "password", "message": "must contain a digit"}
            ]
        }"#;
        let err = validation_error(body, "Invalid input.");
        assert_eq!(err.validation.len(), 2);
        assert_eq!(err.field("username"), Some("must be at least 3 characters"));
        assert_eq!(err.field("email"), None);
    }

    #[test]
    fn non_validation_400_falls_back_to_generic_message() {
        let err = validation_error(r#"{"error": "Bad Request"}"#, "Invalid thread.");
        assert_eq!(err.message, "Invalid thread.");
        assert!(err.validation.is_empty());
    }

    #[test]
    fn unparseable_body_falls_back() {
        let err = validation_error("<html>nope</html>", "Invalid input.");
        assert_eq!(err.message, "Invalid input.");
    }

    #[test]
    fn validation_shape_without_errors_falls_back() {
        let body = r#"{"status": 400, "error": "Validation Failed", "errors": []}"#;
        let err = validation_error(body, "Invalid input.");
        assert_eq!(err.message, "Invalid input.");
    }
}
