//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and small enums used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Ordered list of header name/value pairs, sent in insertion order
pub type HeaderList = Vec<(String, String)>;

// ============================================================================
// Backoff
// ============================================================================

/// Backoff strategy between retry attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Same delay every attempt
    Constant,
    /// Delay grows linearly with the attempt number
    Linear,
    /// Delay doubles every attempt
    #[default]
    Exponential,
}

// ============================================================================
// Auth Type
// ============================================================================

/// Authentication scheme named by external configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// API key exchanged for an IAM access token
    Iam,
    /// Caller-managed bearer token
    BearerToken,
    /// HTTP basic authentication
    Basic,
    /// No credentials
    NoAuth,
}

impl AuthType {
    /// Name as written in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Iam => "iam",
            AuthType::BearerToken => "bearerToken",
            AuthType::Basic => "basic",
            AuthType::NoAuth => "noAuth",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iam" => Ok(AuthType::Iam),
            "bearertoken" => Ok(AuthType::BearerToken),
            "basic" => Ok(AuthType::Basic),
            "noauth" => Ok(AuthType::NoAuth),
            other => Err(crate::Error::config(format!(
                "unrecognized authentication type: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_type_from_str_is_case_insensitive() {
        assert_eq!("IAM".parse::<AuthType>().unwrap(), AuthType::Iam);
        assert_eq!(
            "bearerToken".parse::<AuthType>().unwrap(),
            AuthType::BearerToken
        );
        assert_eq!("BASIC".parse::<AuthType>().unwrap(), AuthType::Basic);
        assert_eq!("noauth".parse::<AuthType>().unwrap(), AuthType::NoAuth);
        assert!("container".parse::<AuthType>().is_err());
    }

    #[test]
    fn test_auth_type_display_roundtrip() {
        for t in [
            AuthType::Iam,
            AuthType::BearerToken,
            AuthType::Basic,
            AuthType::NoAuth,
        ] {
            assert_eq!(t.to_string().parse::<AuthType>().unwrap(), t);
        }
    }

    #[test]
    fn test_backoff_default() {
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }
}
