//! Error types for the IAM Policy Management client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors fall into five groups: local validation, local configuration,
//! transport, remote (non-2xx) and response processing. The last two always
//! carry the raw response so callers can inspect status and headers.

use crate::http::RawResponse;
use crate::models::ErrorResponse;
use serde_json::Value;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Token request failed with status {status}: {message}")]
    TokenRequest { status: u16, message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("context deadline exceeded after {timeout_ms}ms")]
    DeadlineExceeded { timeout_ms: u64 },

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("HTTP {status}: {message}")]
    Service {
        status: u16,
        code: Option<String>,
        message: String,
        body: Option<ErrorResponse>,
        response: Box<RawResponse>,
    },

    #[error("An error occurred while processing the operation response: {message}")]
    ResponseProcessing {
        message: String,
        response: Box<RawResponse>,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Build a remote error from a non-2xx response.
    ///
    /// The structured error envelope is parsed when the body is JSON; the
    /// message falls back to the canonical reason phrase of the status.
    pub fn from_response(response: RawResponse) -> Self {
        let status = response.status_code;
        let json: Option<Value> = serde_json::from_slice(&response.body).ok();
        let body = json
            .as_ref()
            .and_then(|v| serde_json::from_value::<ErrorResponse>(v.clone()).ok())
            .filter(|b| !b.errors.is_empty());

        let message = json
            .as_ref()
            .and_then(extract_error_message)
            .unwrap_or_else(|| canonical_reason(status));
        let code = json.as_ref().and_then(extract_error_code);

        Self::Service {
            status,
            code,
            message,
            body,
            response: Box::new(response),
        }
    }

    /// Create a response processing error
    pub fn response_processing(message: impl Into<String>, response: RawResponse) -> Self {
        Self::ResponseProcessing {
            message: message.into(),
            response: Box::new(response),
        }
    }

    /// HTTP status code associated with this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            Error::TokenRequest { status, .. } => Some(*status),
            Error::ResponseProcessing { response, .. } => Some(response.status_code),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response that produced this error, when one was received
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::Service { response, .. } | Error::ResponseProcessing { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// Machine-readable error code reported by the service
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Service { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True for errors detected before any network call was made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredField { .. } | Error::InvalidField { .. }
        )
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Service { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

fn extract_error_message(body: &Value) -> Option<String> {
    if let Some(msg) = body
        .get("errors")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return Some(msg.to_string());
    }
    ["error", "message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(String::from)
}

fn extract_error_code(body: &Value) -> Option<String> {
    if let Some(code) = body
        .get("errors")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("code"))
        .and_then(Value::as_str)
    {
        return Some(code.to_string());
    }
    ["code", "error_code"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(String::from)
}

fn canonical_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Error")
        .to_string()
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqwest::header::HeaderMap;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status_code: status,
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::config("service URL is empty");
        assert_eq!(err.to_string(), "Configuration error: service URL is empty");

        let err = Error::missing_field("policy_id");
        assert_eq!(err.to_string(), "Missing required field: policy_id");

        let err = Error::DeadlineExceeded { timeout_ms: 80 };
        assert!(err.to_string().contains("deadline exceeded"));
    }

    #[test]
    fn test_from_response_parses_error_envelope() {
        let body = r#"{
            "trace": "abc-123",
            "errors": [{
                "code": "policy_conflict_error",
                "message": "Failed to create policy.",
                "details": {"conflicts_with": {"etag": "1-xyz", "policy": {"id": "p1"}}},
                "more_info": "https://cloud.example.com/docs"
            }],
            "status_code": 409
        }"#;
        let err = Error::from_response(raw(409, body));

        assert_eq!(err.status_code(), Some(409));
        assert_eq!(err.code(), Some("policy_conflict_error"));
        assert_eq!(err.to_string(), "HTTP 409: Failed to create policy.");

        let Error::Service { body, .. } = err else {
            panic!("Expected Service error");
        };
        let body = body.expect("structured body");
        assert_eq!(body.trace.as_deref(), Some("abc-123"));
        let conflicts = body.errors[0]
            .details
            .as_ref()
            .and_then(|d| d.conflicts_with.as_ref())
            .unwrap();
        assert_eq!(conflicts.etag.as_deref(), Some("1-xyz"));
    }

    #[test]
    fn test_from_response_fallback_messages() {
        let err = Error::from_response(raw(400, r#"{"error": "bad things"}"#));
        assert_eq!(err.to_string(), "HTTP 400: bad things");

        let err = Error::from_response(raw(401, r#"{"errorMessage": "token expired", "code": "BXNIM"}"#));
        assert_eq!(err.to_string(), "HTTP 401: token expired");
        assert_eq!(err.code(), Some("BXNIM"));

        let err = Error::from_response(raw(404, "not json"));
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert!(err.response().is_some());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::from_response(raw(429, "")).is_retryable());
        assert!(Error::from_response(raw(503, "")).is_retryable());

        assert!(!Error::from_response(raw(400, "")).is_retryable());
        assert!(!Error::from_response(raw(404, "")).is_retryable());
        assert!(!Error::DeadlineExceeded { timeout_ms: 10 }.is_retryable());
        assert!(!Error::config("test").is_retryable());
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::missing_field("account_id").is_validation());
        assert!(Error::invalid_field("start", "must not be set").is_validation());
        assert!(!Error::config("x").is_validation());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
