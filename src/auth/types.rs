//! Auth configuration types
//!
//! These types describe which credentials are attached to each request.

use crate::error::{Error, Result};
use crate::types::AuthType;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Default IAM token service
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// Path of the token endpoint on the IAM token service
pub const IAM_TOKEN_PATH: &str = "/identity/token";

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    NoAuth,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Caller-managed bearer token
    BearerToken {
        /// The bearer token
        token: String,
    },

    /// API key exchanged for an access token at the IAM token service
    Iam {
        /// The API key
        apikey: String,
        /// Token service base URL (defaults to [`DEFAULT_IAM_URL`])
        url: Option<String>,
        /// Client ID for basic auth on the token request
        client_id: Option<String>,
        /// Client secret for basic auth on the token request
        client_secret: Option<String>,
        /// Space separated scopes
        scope: Option<String>,
    },
}

impl AuthConfig {
    /// IAM config with only an API key
    pub fn iam(apikey: impl Into<String>) -> Self {
        Self::Iam {
            apikey: apikey.into(),
            url: None,
            client_id: None,
            client_secret: None,
            scope: None,
        }
    }

    /// Bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::BearerToken {
            token: token.into(),
        }
    }

    /// Basic auth config
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Which scheme this config uses
    pub fn auth_type(&self) -> AuthType {
        match self {
            AuthConfig::NoAuth => AuthType::NoAuth,
            AuthConfig::Basic { .. } => AuthType::Basic,
            AuthConfig::BearerToken { .. } => AuthType::BearerToken,
            AuthConfig::Iam { .. } => AuthType::Iam,
        }
    }

    /// Check that the credentials are usable before any request is made
    pub fn validate(&self) -> Result<()> {
        match self {
            AuthConfig::NoAuth => Ok(()),
            AuthConfig::Basic { username, password } => {
                check_credential("username", username)?;
                check_credential("password", password)
            }
            AuthConfig::BearerToken { token } => {
                if token.is_empty() {
                    return Err(Error::missing_field("bearer_token"));
                }
                Ok(())
            }
            AuthConfig::Iam {
                apikey,
                client_id,
                client_secret,
                ..
            } => {
                check_credential("apikey", apikey)?;
                match (client_id, client_secret) {
                    (Some(_), None) | (None, Some(_)) => Err(Error::auth(
                        "client_id and client_secret must be specified together",
                    )),
                    _ => Ok(()),
                }
            }
        }
    }

    /// Token endpoint for the IAM flow
    pub(crate) fn token_url(url: Option<&str>) -> String {
        let base = url.unwrap_or(DEFAULT_IAM_URL).trim_end_matches('/');
        if base.ends_with(IAM_TOKEN_PATH) {
            base.to_string()
        } else {
            format!("{base}{IAM_TOKEN_PATH}")
        }
    }
}

fn check_credential(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing_field(name));
    }
    let bad = |c: Option<char>| matches!(c, Some('{' | '}' | '"'));
    if bad(value.chars().next()) || bad(value.chars().last()) {
        return Err(Error::invalid_field(
            name,
            "must not start or end with '{', '}' or '\"'; remove any surrounding brackets or quotes",
        ));
    }
    Ok(())
}

// Secrets stay out of logs
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::NoAuth => f.write_str("NoAuth"),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
            AuthConfig::BearerToken { .. } => f.debug_struct("BearerToken").finish_non_exhaustive(),
            AuthConfig::Iam {
                url,
                client_id,
                scope,
                ..
            } => f
                .debug_struct("Iam")
                .field("url", url)
                .field("client_id", client_id)
                .field("scope", scope)
                .finish_non_exhaustive(),
        }
    }
}

/// Cached access token with its refresh window
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token stops being accepted
    pub expires_at: Option<DateTime<Utc>>,
    /// When a new token should be fetched
    pub refresh_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a token that never expires
    pub fn new(token: String) -> Self {
        Self {
            token,
            expires_at: None,
            refresh_at: None,
        }
    }

    /// Create a token from the token service's lifetime fields.
    ///
    /// The refresh point sits at 80% of the lifetime.
    pub fn with_lifetime(token: String, expires_in: Option<i64>, expiration: Option<i64>) -> Self {
        // Lifetimes beyond chrono's range count as no expiry
        let expires_at = match (expiration, expires_in) {
            (Some(exp), _) => DateTime::from_timestamp(exp, 0),
            (None, Some(secs)) => {
                TimeDelta::try_seconds(secs).and_then(|d| Utc::now().checked_add_signed(d))
            }
            (None, None) => None,
        };
        let refresh_at = expires_at.map(|at| {
            expires_in
                .and_then(|secs| TimeDelta::try_seconds(secs / 5))
                .and_then(|d| at.checked_sub_signed(d))
                .unwrap_or(at)
        });
        Self {
            token,
            expires_at,
            refresh_at,
        }
    }

    /// Check if the token is past its expiration
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }

    /// Check if the token has entered its refresh window
    pub fn needs_refresh(&self) -> bool {
        self.refresh_at.is_some_and(|at| Utc::now() >= at)
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_cached_token_fresh() {
        let token = CachedToken::with_lifetime("t".to_string(), Some(3600), None);
        assert!(!token.is_expired());
        assert!(!token.needs_refresh());
    }

    #[test]
    fn test_cached_token_in_refresh_window() {
        // 100s lifetime, expiring in 10s: past the 80% mark but still valid
        let expiration = Utc::now().timestamp() + 10;
        let token = CachedToken::with_lifetime("t".to_string(), Some(100), Some(expiration));
        assert!(!token.is_expired());
        assert!(token.needs_refresh());
    }

    #[test]
    fn test_cached_token_expired() {
        let token = CachedToken::with_lifetime("t".to_string(), Some(-100), None);
        assert!(token.is_expired());
        assert!(token.needs_refresh());
    }

    #[test]
    fn test_cached_token_out_of_range_lifetime() {
        let token = CachedToken::with_lifetime("t".to_string(), Some(i64::MAX), None);
        assert_eq!(token.expires_at, None);
        assert!(!token.needs_refresh());

        let expiration = Utc::now().timestamp() + 3600;
        let token = CachedToken::with_lifetime("t".to_string(), Some(i64::MAX), Some(expiration));
        assert_eq!(token.refresh_at, token.expires_at);
        assert!(!token.is_expired());

        let token = CachedToken::with_lifetime("t".to_string(), Some(60), Some(i64::MAX));
        assert_eq!(token.expires_at, None);
    }

    #[test]
    fn test_cached_token_no_expiration() {
        let token = CachedToken::new("t".to_string());
        assert!(!token.is_expired());
        assert!(!token.needs_refresh());
    }

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::NoAuth));
        assert_eq!(config.auth_type(), AuthType::NoAuth);
    }

    #[test]
    fn test_validate_credentials() {
        assert!(AuthConfig::iam("key").validate().is_ok());
        assert!(AuthConfig::iam("").validate().is_err());
        assert!(AuthConfig::iam("{key}").validate().is_err());
        assert!(AuthConfig::bearer("").validate().is_err());
        assert!(AuthConfig::basic("user", "\"pass\"").validate().is_err());
        assert!(AuthConfig::basic("user", "pass").validate().is_ok());

        let half_client = AuthConfig::Iam {
            apikey: "key".to_string(),
            url: None,
            client_id: Some("bx".to_string()),
            client_secret: None,
            scope: None,
        };
        assert!(half_client.validate().is_err());
    }

    #[test]
    fn test_token_url() {
        assert_eq!(
            AuthConfig::token_url(None),
            "https://iam.cloud.ibm.com/identity/token"
        );
        assert_eq!(
            AuthConfig::token_url(Some("https://iam.test.cloud.ibm.com/")),
            "https://iam.test.cloud.ibm.com/identity/token"
        );
        assert_eq!(
            AuthConfig::token_url(Some("http://localhost:1234/identity/token")),
            "http://localhost:1234/identity/token"
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", AuthConfig::iam("super-secret"));
        assert!(!rendered.contains("super-secret"));
        let rendered = format!("{:?}", AuthConfig::basic("user", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
