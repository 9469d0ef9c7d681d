//! IAM Policy Management service client
//!
//! [`IamPolicyManagement`] executes [`Operation`]s: it builds the request,
//! adds the SDK headers, sends it through the retrying transport and
//! decodes the response. One named async method exists per operation.
//!
//! ```rust,ignore
//! let client = IamPolicyManagement::new(ServiceConfig::new(AuthConfig::iam(apikey)))?;
//! let options = ListPoliciesOptions::new(account_id).with_limit(50);
//! let policies = client.new_policies_pager(&options)?.get_all().await?;
//! ```

mod action_control_assignments;
mod action_control_templates;
mod policies;
mod policy_assignments;
mod policy_templates;
mod roles;
mod settings;
mod v2_policies;

pub use action_control_assignments::*;
pub use action_control_templates::*;
pub use policies::*;
pub use policy_assignments::*;
pub use policy_templates::*;
pub use roles::*;
pub use settings::*;
pub use v2_policies::*;

use crate::config::{ExternalConfig, ServiceConfig, DEFAULT_SERVICE_NAME};
use crate::error::{Error, Result};
use crate::http::{process_response, DetailedResponse, HttpClient};
use crate::operation::Operation;
use std::time::Duration;
use tracing::debug;

/// Header carrying SDK analytics
pub const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

const SERVICE_VERSION: &str = "V1";

/// Client of the IAM Policy Management API.
///
/// Cheap to clone; clones share the connection pool and the token cache.
#[derive(Debug, Clone)]
pub struct IamPolicyManagement {
    service_url: String,
    http: HttpClient,
    deadline: Option<Duration>,
}

impl IamPolicyManagement {
    /// Create a client from explicit configuration
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_auth(config.http, config.auth)?;
        Ok(Self {
            service_url: config.service_url,
            http,
            deadline: None,
        })
    }

    /// Create a client from external configuration of the default service
    pub fn from_external_config() -> Result<Self> {
        Self::from_external_config_for(DEFAULT_SERVICE_NAME)
    }

    /// Create a client from external configuration of `service_name`
    pub fn from_external_config_for(service_name: &str) -> Result<Self> {
        let external = ExternalConfig::load(service_name)?;
        Self::new(external.service_config()?)
    }

    /// Base URL of the service
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Change the base URL of the service
    pub fn set_service_url(&mut self, url: impl Into<String>) {
        self.service_url = url.into();
    }

    /// Deadline applied to each call, if any
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// A client whose calls fail with a deadline error after `deadline`.
    ///
    /// The deadline covers the whole call, retries included.
    #[must_use]
    pub fn with_timeout(&self, deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// A client without a per-call deadline
    #[must_use]
    pub fn without_timeout(&self) -> Self {
        Self {
            deadline: None,
            ..self.clone()
        }
    }

    /// The underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Execute one operation.
    ///
    /// Required fields are checked and the service URL is resolved before
    /// anything is sent.
    pub async fn execute<O: Operation>(&self, operation: &O) -> Result<DetailedResponse<O::Output>> {
        let mut builder = operation
            .build_request()?
            .header(SDK_ANALYTICS_HEADER, analytics_header_value(O::OPERATION_ID));
        if O::EXPECTS_BODY {
            builder = builder.header("Accept", "application/json");
        }
        let request = builder.prepare(&self.service_url)?;

        debug!("{} {} {}", O::OPERATION_ID, request.method, request.url.path());

        let call = async {
            let raw = self.http.send(&request).await?;
            process_response(raw, O::EXPECTS_BODY)
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, call)
                .await
                .map_err(|_| Error::DeadlineExceeded {
                    timeout_ms: deadline.as_millis() as u64,
                })?,
            None => call.await,
        }
    }
}

fn analytics_header_value(operation_id: &str) -> String {
    format!(
        "service_name={DEFAULT_SERVICE_NAME};service_version={SERVICE_VERSION};operation_id={operation_id}"
    )
}

#[cfg(test)]
mod tests;
