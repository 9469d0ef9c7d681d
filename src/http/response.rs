//! Response types
//!
//! [`RawResponse`] is what came off the wire. [`DetailedResponse`] pairs the
//! status and headers with the typed result of an operation.

use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, ETAG};
use serde::de::DeserializeOwned;
use std::fmt;

/// Status, headers and body exactly as received
#[derive(Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

impl RawResponse {
    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Get a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn has_body(&self) -> bool {
        self.body.iter().any(|b| !b.is_ascii_whitespace())
    }
}

// Bodies can be large; show only their size
impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status_code", &self.status_code)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

/// Outcome of a successful operation
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Typed result; `None` when the response carried no body
    pub result: Option<T>,
}

impl<T> DetailedResponse<T> {
    /// The `ETag` header, used as the `If-Match` value of a later update
    pub fn etag(&self) -> Option<&str> {
        self.headers.get(ETAG).and_then(|v| v.to_str().ok())
    }

    /// Get a header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Take the typed result
    pub fn into_result(self) -> Option<T> {
        self.result
    }
}

/// Turn a raw response into the typed outcome of an operation.
///
/// - non-2xx: remote error with the parsed error envelope
/// - 2xx with an empty body, or an operation that declares no body: `result` is `None`
/// - 2xx whose body does not deserialize: response processing error
pub fn process_response<T: DeserializeOwned>(
    raw: RawResponse,
    expects_body: bool,
) -> Result<DetailedResponse<T>> {
    if !raw.is_success() {
        return Err(Error::from_response(raw));
    }

    let result = if expects_body && raw.has_body() {
        match serde_json::from_slice::<T>(&raw.body) {
            Ok(value) => Some(value),
            Err(e) => return Err(Error::response_processing(e.to_string(), raw)),
        }
    } else {
        None
    };

    Ok(DetailedResponse {
        status_code: raw.status_code,
        headers: raw.headers,
        result,
    })
}
