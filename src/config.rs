//! Client configuration
//!
//! [`ServiceConfig`] is the explicit configuration of a client: service URL,
//! credentials and transport settings. [`ExternalConfig`] builds one from
//! `<SERVICE_NAME>_<KEY>` properties found in a credentials file or the
//! process environment. The environment is only ever read.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::AuthType;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Default service name, also the prefix of external configuration keys
pub const DEFAULT_SERVICE_NAME: &str = "iam_policy_management";

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://iam.cloud.ibm.com";

/// Environment variable naming the credentials file
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// File name looked up in the working and home directories
pub const DEFAULT_CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

const DEFAULT_MAX_RETRIES: u32 = 4;
const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(30);

// ============================================================================
// Service Config
// ============================================================================

/// Configuration of an [`IamPolicyManagement`](crate::IamPolicyManagement) client
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL every operation path is appended to
    pub service_url: String,
    /// Credentials applied to every request
    pub auth: AuthConfig,
    /// Transport settings
    pub http: HttpClientConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            auth: AuthConfig::NoAuth,
            http: HttpClientConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Config for the default endpoint with the given credentials
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            auth,
            ..Self::default()
        }
    }

    /// Set the service URL
    #[must_use]
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Set the transport settings
    #[must_use]
    pub fn with_http_config(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Check the credentials
    pub fn validate(&self) -> Result<()> {
        self.auth.validate()
    }
}

// ============================================================================
// External Config
// ============================================================================

/// Properties of one service read from an external source
#[derive(Debug, Clone, Default)]
pub struct ExternalConfig {
    service_name: String,
    properties: HashMap<String, String>,
}

impl ExternalConfig {
    /// Collect the properties of `service_name` from `pairs`.
    ///
    /// Keys are matched case-insensitively against `<SERVICE_NAME>_` and
    /// stored without the prefix.
    pub fn from_pairs<I, K, V>(service_name: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let prefix = property_prefix(service_name);
        let properties = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                let key = key.as_ref().to_ascii_uppercase();
                key.strip_prefix(&prefix)
                    .filter(|k| !k.is_empty())
                    .map(|k| (k.to_string(), value.into()))
            })
            .collect();

        Self {
            service_name: service_name.to_string(),
            properties,
        }
    }

    /// Load properties from the first source that has any.
    ///
    /// Sources in order: the credentials file, then the process environment.
    pub fn load(service_name: &str) -> Result<Self> {
        if let Some(path) = credentials_file_path() {
            let config = Self::from_file(service_name, &path)?;
            if !config.is_empty() {
                debug!("Loaded {} configuration from {}", service_name, path.display());
                return Ok(config);
            }
        }

        let config = Self::from_pairs(service_name, std::env::vars());
        if !config.is_empty() {
            debug!("Loaded {} configuration from the environment", service_name);
        }
        Ok(config)
    }

    /// Read properties from a credentials file in `.env` format
    pub fn from_file(service_name: &str, path: &Path) -> Result<Self> {
        let iter = dotenvy::from_path_iter(path).map_err(|e| {
            Error::config(format!(
                "failed to read credentials file {}: {e}",
                path.display()
            ))
        })?;
        let pairs = iter
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                Error::config(format!(
                    "failed to parse credentials file {}: {e}",
                    path.display()
                ))
            })?;
        Ok(Self::from_pairs(service_name, pairs))
    }

    /// Service the properties belong to
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Whether no property was found
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Get a property by its unprefixed key, e.g. `APIKEY`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties
            .get(&key.to_ascii_uppercase())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get(key)
            .map(|v| match v.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                other => Err(Error::config(format!(
                    "invalid boolean for {key}: {other}"
                ))),
            })
            .transpose()
    }

    fn get_u64(&self, key: &str) -> Result<Option<u64>> {
        self.get(key)
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|e| Error::config(format!("invalid number for {key}: {e}")))
            })
            .transpose()
    }

    /// Configured service URL
    pub fn service_url(&self) -> Option<&str> {
        self.get("URL")
    }

    /// Configured authentication scheme.
    ///
    /// Without `AUTH_TYPE`, an `APIKEY` implies IAM and a `BEARER_TOKEN`
    /// implies bearer authentication.
    pub fn auth_type(&self) -> Result<AuthType> {
        if let Some(name) = self.get("AUTH_TYPE").or_else(|| self.get("AUTHTYPE")) {
            return name.parse();
        }
        if self.get("APIKEY").is_some() {
            return Ok(AuthType::Iam);
        }
        if self.get("BEARER_TOKEN").is_some() {
            return Ok(AuthType::BearerToken);
        }
        Err(Error::config(format!(
            "authentication type not specified for service '{}'",
            self.service_name
        )))
    }

    /// Build the credentials described by the properties
    pub fn auth_config(&self) -> Result<AuthConfig> {
        let owned = |key: &str| self.get(key).map(String::from);
        let require = |key: &str| owned(key).ok_or_else(|| Error::missing_field(key));

        let auth = match self.auth_type()? {
            AuthType::Iam => AuthConfig::Iam {
                apikey: require("APIKEY")?,
                url: owned("AUTH_URL"),
                client_id: owned("CLIENT_ID"),
                client_secret: owned("CLIENT_SECRET"),
                scope: owned("SCOPE"),
            },
            AuthType::BearerToken => AuthConfig::BearerToken {
                token: require("BEARER_TOKEN")?,
            },
            AuthType::Basic => AuthConfig::Basic {
                username: require("USERNAME")?,
                password: require("PASSWORD")?,
            },
            AuthType::NoAuth => AuthConfig::NoAuth,
        };
        auth.validate()?;
        Ok(auth)
    }

    /// Build the transport settings described by the properties
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        let mut builder = HttpClientConfig::builder();

        if let Some(disable) = self.get_bool("DISABLE_SSL")? {
            builder = builder.disable_ssl_verification(disable);
        }

        if self.get_bool("ENABLE_RETRIES")?.unwrap_or(false) {
            let max_retries = match self.get_u64("MAX_RETRIES")? {
                Some(n) => u32::try_from(n)
                    .map_err(|_| Error::config(format!("MAX_RETRIES out of range: {n}")))?,
                None => DEFAULT_MAX_RETRIES,
            };
            let interval = self
                .get_u64("RETRY_INTERVAL")?
                .map_or(DEFAULT_RETRY_INTERVAL, Duration::from_secs);
            builder = builder.enable_retries(max_retries, interval);
        }

        Ok(builder.build())
    }

    /// Build a complete service configuration
    pub fn service_config(&self) -> Result<ServiceConfig> {
        Ok(ServiceConfig {
            service_url: self
                .service_url()
                .unwrap_or(DEFAULT_SERVICE_URL)
                .to_string(),
            auth: self.auth_config()?,
            http: self.http_config()?,
        })
    }
}

fn property_prefix(service_name: &str) -> String {
    format!("{}_", service_name.to_ascii_uppercase().replace('-', "_"))
}

/// Locate the credentials file: `IBM_CREDENTIALS_FILE`, then the working
/// directory, then the home directory.
fn credentials_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CREDENTIALS_FILE_ENV).filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        return path.is_file().then_some(path);
    }

    let cwd = PathBuf::from(DEFAULT_CREDENTIALS_FILE_NAME);
    if cwd.is_file() {
        return Some(cwd);
    }

    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(DEFAULT_CREDENTIALS_FILE_NAME))
        .filter(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    fn pairs(items: &[(&str, &str)]) -> ExternalConfig {
        ExternalConfig::from_pairs(
            DEFAULT_SERVICE_NAME,
            items.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn test_service_config_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_url, "https://iam.cloud.ibm.com");
        assert!(matches!(config.auth, AuthConfig::NoAuth));
        assert_eq!(config.http.max_retries, 0);
    }

    #[test]
    fn test_from_pairs_filters_by_prefix() {
        let config = pairs(&[
            ("IAM_POLICY_MANAGEMENT_URL", "https://iam.test.cloud.ibm.com"),
            ("iam_policy_management_apikey", "key"),
            ("OTHER_SERVICE_APIKEY", "other"),
        ]);

        assert_eq!(config.service_url(), Some("https://iam.test.cloud.ibm.com"));
        assert_eq!(config.get("APIKEY"), Some("key"));
        assert_eq!(config.get("apikey"), Some("key"));
        assert_eq!(config.get("CLIENT_ID"), None);
    }

    #[test]
    fn test_iam_auth_config() {
        let config = pairs(&[
            ("IAM_POLICY_MANAGEMENT_AUTH_TYPE", "IAM"),
            ("IAM_POLICY_MANAGEMENT_APIKEY", "key"),
            ("IAM_POLICY_MANAGEMENT_AUTH_URL", "https://iam.test.cloud.ibm.com"),
        ]);

        match config.auth_config().unwrap() {
            AuthConfig::Iam { apikey, url, .. } => {
                assert_eq!(apikey, "key");
                assert_eq!(url.as_deref(), Some("https://iam.test.cloud.ibm.com"));
            }
            other => panic!("Expected IAM config, got {other:?}"),
        }
    }

    #[test_case(&[("IAM_POLICY_MANAGEMENT_APIKEY", "key")], AuthType::Iam ; "apikey implies iam")]
    #[test_case(&[("IAM_POLICY_MANAGEMENT_BEARER_TOKEN", "tok")], AuthType::BearerToken ; "token implies bearer")]
    #[test_case(&[("IAM_POLICY_MANAGEMENT_AUTHTYPE", "noauth")], AuthType::NoAuth ; "legacy key name")]
    #[test_case(&[("IAM_POLICY_MANAGEMENT_AUTH_TYPE", "basic"), ("IAM_POLICY_MANAGEMENT_USERNAME", "u")], AuthType::Basic ; "explicit basic")]
    fn test_auth_type_resolution(items: &[(&str, &str)], expected: AuthType) {
        assert_eq!(pairs(items).auth_type().unwrap(), expected);
    }

    #[test]
    fn test_missing_auth_type() {
        let err = pairs(&[("IAM_POLICY_MANAGEMENT_URL", "https://x")])
            .auth_type()
            .unwrap_err();
        assert!(err.to_string().contains("authentication type not specified"));
    }

    #[test]
    fn test_basic_auth_requires_password() {
        let err = pairs(&[
            ("IAM_POLICY_MANAGEMENT_AUTH_TYPE", "basic"),
            ("IAM_POLICY_MANAGEMENT_USERNAME", "u"),
        ])
        .auth_config()
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_http_config_retries() {
        let config = pairs(&[
            ("IAM_POLICY_MANAGEMENT_ENABLE_RETRIES", "true"),
            ("IAM_POLICY_MANAGEMENT_MAX_RETRIES", "3"),
            ("IAM_POLICY_MANAGEMENT_RETRY_INTERVAL", "5"),
            ("IAM_POLICY_MANAGEMENT_DISABLE_SSL", "true"),
        ]);
        let http = config.http_config().unwrap();
        assert_eq!(http.max_retries, 3);
        assert_eq!(http.max_backoff, Duration::from_secs(5));
        assert!(http.disable_ssl_verification);

        let defaults = pairs(&[("IAM_POLICY_MANAGEMENT_ENABLE_RETRIES", "true")])
            .http_config()
            .unwrap();
        assert_eq!(defaults.max_retries, 4);
        assert_eq!(defaults.max_backoff, Duration::from_secs(30));

        let disabled = pairs(&[]).http_config().unwrap();
        assert_eq!(disabled.max_retries, 0);
    }

    #[test]
    fn test_http_config_invalid_bool() {
        let err = pairs(&[("IAM_POLICY_MANAGEMENT_DISABLE_SSL", "maybe")])
            .http_config()
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "IAM_POLICY_MANAGEMENT_URL=http://localhost:9999").unwrap();
        writeln!(file, "IAM_POLICY_MANAGEMENT_AUTH_TYPE=bearerToken").unwrap();
        writeln!(file, "IAM_POLICY_MANAGEMENT_BEARER_TOKEN=\"file-token\"").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "UNRELATED=1").unwrap();
        file.flush().unwrap();

        let config = ExternalConfig::from_file(DEFAULT_SERVICE_NAME, file.path()).unwrap();
        let service = config.service_config().unwrap();

        assert_eq!(service.service_url, "http://localhost:9999");
        match service.auth {
            AuthConfig::BearerToken { token } => assert_eq!(token, "file-token"),
            other => panic!("Expected bearer config, got {other:?}"),
        }
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExternalConfig::from_file(DEFAULT_SERVICE_NAME, &dir.path().join("nope.env"))
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
