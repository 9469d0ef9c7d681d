//! Operation abstraction
//!
//! Every API call is an options struct implementing [`Operation`]. The
//! options build their own request, checking required fields first so that a
//! missing value fails before the service URL is even looked at.

use crate::error::{Error, Result};
use crate::http::RequestBuilder;
use serde::de::DeserializeOwned;

/// One REST operation of the service
pub trait Operation {
    /// Typed response body; `()` for operations without one
    type Output: DeserializeOwned;

    /// Identifier reported in the SDK analytics header
    const OPERATION_ID: &'static str;

    /// Whether a successful response carries a JSON body
    const EXPECTS_BODY: bool = true;

    /// Validate required fields and describe the HTTP request
    fn build_request(&self) -> Result<RequestBuilder>;
}

/// Require a value to be present
pub(crate) fn required<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| Error::missing_field(field))
}

/// Require a string to be present and non-empty
pub(crate) fn required_str<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::missing_field(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let present = Some(vec![1, 2]);
        assert_eq!(required(&present, "roles").unwrap(), &vec![1, 2]);

        let absent: Option<Vec<i32>> = None;
        let err = required(&absent, "roles").unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: roles");
    }

    #[test]
    fn test_required_str_rejects_empty() {
        assert_eq!(
            required_str(&Some("p1".to_string()), "policy_id").unwrap(),
            "p1"
        );
        assert!(required_str(&Some(String::new()), "policy_id").is_err());
        assert!(required_str(&None, "policy_id").is_err());
    }
}
