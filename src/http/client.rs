//! HTTP client with retry
//!
//! Provides the transport used by every operation:
//! - Credentials applied per attempt through the [`Authenticator`]
//! - Optional retries with configurable backoff
//! - `Retry-After` support on 429 responses
//! - Per-attempt timeouts

use super::request::PreparedRequest;
use super::response::RawResponse;
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{is_retryable_status, Error, Result};
use crate::types::{BackoffType, HeaderList};
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Timeout of a single attempt
    pub timeout: Duration,
    /// Maximum number of retries; zero disables retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff, also caps `Retry-After`
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Default headers for all requests, sent before operation headers
    pub default_headers: HeaderList,
    /// User agent string
    pub user_agent: String,
    /// Accept invalid TLS certificates
    pub disable_ssl_verification: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 0,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
            backoff_type: BackoffType::Exponential,
            default_headers: Vec::new(),
            user_agent: format!("iam-policy-management-rust/{}", env!("CARGO_PKG_VERSION")),
            disable_ssl_verification: false,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Whether failed attempts are retried
    pub fn retries_enabled(&self) -> bool {
        self.max_retries > 0
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the per-attempt timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Enable retries with a maximum interval between attempts
    pub fn enable_retries(mut self, max_retries: u32, max_interval: Duration) -> Self {
        self.config.max_retries = max_retries;
        self.config.max_backoff = max_interval;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.push((key.into(), value.into()));
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Accept invalid TLS certificates
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.config.disable_ssl_verification = disable;
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client with retry
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a client without credentials
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Self::with_auth(config, AuthConfig::NoAuth)
    }

    /// Create a client that authenticates every request
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.disable_ssl_verification)
            .gzip(true)
            .build()
            .map_err(Error::Http)?;

        let authenticator = Authenticator::with_client(auth_config, client.clone());

        Ok(Self {
            client,
            config,
            authenticator,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// The authenticator applied to each attempt
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Send a request, retrying when enabled.
    ///
    /// Any status that is not retried is returned as a [`RawResponse`];
    /// turning non-2xx statuses into errors is up to the caller.
    pub async fn send(&self, request: &PreparedRequest) -> Result<RawResponse> {
        let max_retries = self.config.max_retries;
        let mut attempt = 0;

        loop {
            let mut req = self
                .client
                .request(request.method.clone(), request.url.clone());

            for (key, value) in &self.config.default_headers {
                if !request.headers.contains_key(key.as_str()) {
                    req = req.header(key.as_str(), value.as_str());
                }
            }
            req = req.headers(request.headers.clone());

            if let Some(ref body) = request.body {
                req = req.body(body.clone());
            }

            req = self.authenticator.apply(req).await?;

            debug!(
                "Sending {} {} (attempt {}/{})",
                request.method,
                request.url.path(),
                attempt + 1,
                max_retries + 1
            );

            match req.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if is_retryable_status(status) && attempt < max_retries {
                        let delay = if status == 429 {
                            self.retry_after(&response)
                                .unwrap_or_else(|| self.calculate_backoff(attempt))
                        } else {
                            self.calculate_backoff(attempt)
                        };
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status,
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    debug!(
                        "Received {} for {} {}",
                        status,
                        request.method,
                        request.url.path()
                    );
                    return read_response(response).await;
                }
                Err(e) => {
                    let retryable = e.is_timeout() || e.is_connect();
                    if retryable && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Transport error ({}), attempt {}/{}, retrying in {:?}",
                            if e.is_timeout() { "timeout" } else { "connect" },
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    if e.is_timeout() {
                        return Err(Error::Timeout {
                            timeout_ms: self.config.timeout.as_millis() as u64,
                        });
                    }
                    return Err(Error::Http(e));
                }
            }
        }
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }

    /// `Retry-After` in seconds, capped at the maximum backoff
    fn retry_after(&self, response: &Response) -> Option<Duration> {
        response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|secs| std::cmp::min(Duration::from_secs(secs), self.config.max_backoff))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}

async fn read_response(response: Response) -> Result<RawResponse> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::Http)?;
    Ok(RawResponse {
        status_code,
        headers,
        body,
    })
}
