//! CLI runner - executes commands

use crate::auth::AuthConfig;
use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::{ExternalConfig, ServiceConfig, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
use crate::error::{Result, ResultExt};
use crate::pagination::{ListOperation, Page, PageItem, Pager};
use crate::service::{
    DeletePolicyOptions, GetPolicyOptions, GetRoleOptions, GetSettingsOptions,
    GetV2PolicyOptions, IamPolicyManagement, ListActionControlAssignmentsOptions,
    ListActionControlTemplatesOptions, ListPoliciesOptions, ListPolicyAssignmentsOptions,
    ListPolicyTemplatesOptions, ListRolesOptions, ListV2PoliciesOptions,
};
use serde::Serialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.build_client()?;

        match &self.cli.command {
            Commands::ListPolicies {
                account_id,
                iam_id,
                access_group_id,
                policy_type,
                state,
                page,
            } => {
                let mut options = ListPoliciesOptions::new(account_id);
                options.iam_id.clone_from(iam_id);
                options.access_group_id.clone_from(access_group_id);
                options.policy_type.clone_from(policy_type);
                options.state.clone_from(state);
                options.limit = page.limit;
                self.list(&client, options, page).await
            }
            Commands::GetPolicy { policy_id } => {
                let response = client.get_policy(&GetPolicyOptions::new(policy_id)).await?;
                self.output(&response.result)
            }
            Commands::DeletePolicy { policy_id } => {
                let response = client
                    .delete_policy(&DeletePolicyOptions::new(policy_id))
                    .await?;
                self.output(&json!({ "status_code": response.status_code }))
            }
            Commands::ListV2Policies {
                account_id,
                iam_id,
                service_name,
                policy_format,
                page,
            } => {
                let mut options = ListV2PoliciesOptions::new(account_id);
                options.iam_id.clone_from(iam_id);
                options.service_name.clone_from(service_name);
                options.format.clone_from(policy_format);
                options.limit = page.limit;
                self.list(&client, options, page).await
            }
            Commands::GetV2Policy { id, policy_format } => {
                let mut options = GetV2PolicyOptions::new(id);
                options.format.clone_from(policy_format);
                let response = client.get_v2_policy(&options).await?;
                self.output(&response.result)
            }
            Commands::ListRoles {
                account_id,
                service_name,
            } => {
                let mut options = ListRolesOptions::new();
                options.account_id.clone_from(account_id);
                options.service_name.clone_from(service_name);
                let response = client.list_roles(&options).await?;
                self.output(&response.result)
            }
            Commands::GetRole { role_id } => {
                let response = client.get_role(&GetRoleOptions::new(role_id)).await?;
                self.output(&response.result)
            }
            Commands::ListPolicyTemplates {
                account_id,
                state,
                page,
            } => {
                let mut options = ListPolicyTemplatesOptions::new(account_id);
                options.state.clone_from(state);
                options.limit = page.limit;
                self.list(&client, options, page).await
            }
            Commands::ListPolicyAssignments {
                account_id,
                version,
                template_id,
                page,
            } => {
                let mut options = ListPolicyAssignmentsOptions::new(version, account_id);
                options.template_id.clone_from(template_id);
                options.limit = page.limit;
                self.list(&client, options, page).await
            }
            Commands::ListActionControlTemplates { account_id, page } => {
                let mut options = ListActionControlTemplatesOptions::new(account_id);
                options.limit = page.limit;
                self.list(&client, options, page).await
            }
            Commands::ListActionControlAssignments {
                account_id,
                template_id,
                page,
            } => {
                let mut options = ListActionControlAssignmentsOptions::new(account_id);
                options.template_id.clone_from(template_id);
                options.limit = page.limit;
                self.list(&client, options, page).await
            }
            Commands::GetSettings { account_id } => {
                let response = client
                    .get_settings(&GetSettingsOptions::new(account_id))
                    .await?;
                self.output(&response.result)
            }
        }
    }

    /// Build the client from external configuration, then apply flag overrides
    fn build_client(&self) -> Result<IamPolicyManagement> {
        let external = ExternalConfig::load(DEFAULT_SERVICE_NAME)?;
        let has_flag_auth = self.cli.apikey.is_some() || self.cli.bearer_token.is_some();

        let mut config = if external.is_empty() {
            debug!("No external configuration found");
            ServiceConfig::default()
        } else {
            ServiceConfig {
                service_url: external
                    .service_url()
                    .unwrap_or(DEFAULT_SERVICE_URL)
                    .to_string(),
                // flag credentials replace whatever the properties describe
                auth: if has_flag_auth {
                    AuthConfig::NoAuth
                } else {
                    external.auth_config()?
                },
                http: external.http_config()?,
            }
        };

        if let Some(url) = &self.cli.service_url {
            config = config.with_service_url(url.clone());
        }
        if let Some(apikey) = &self.cli.apikey {
            config.auth = AuthConfig::iam(apikey.clone());
        } else if let Some(token) = &self.cli.bearer_token {
            config.auth = AuthConfig::bearer(token.clone());
        }

        debug!(
            "Using {} with {} authentication",
            config.service_url,
            config.auth.auth_type()
        );

        let client = IamPolicyManagement::new(config)?;
        Ok(match self.cli.timeout_ms {
            Some(ms) => client.with_timeout(Duration::from_millis(ms)),
            None => client,
        })
    }

    /// Run a list operation, one page or all pages
    async fn list<O>(&self, client: &IamPolicyManagement, options: O, page: &PageArgs) -> Result<()>
    where
        O: ListOperation,
        O::Output: Page + Serialize,
        PageItem<O>: Serialize,
    {
        if page.single_page {
            let response = client.execute(&options).await?;
            return self.output(&response.result);
        }

        let mut pager = Pager::new(client, &options)?;
        let items = pager.get_all().await?;
        info!(
            "Fetched {} items in {} pages",
            pager.state().total_fetched,
            pager.state().pages_fetched
        );
        self.output(&items)
    }

    /// Print a value in the selected format
    fn output<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        }
        .context("failed to render output")?;
        println!("{text}");
        Ok(())
    }
}
