//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};

/// IAM Policy Management CLI
#[derive(Parser, Debug)]
#[command(name = "iam-policy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service base URL (overrides IAM_POLICY_MANAGEMENT_URL)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// IAM API key (overrides external configuration)
    #[arg(long, global = true, conflicts_with = "bearer_token")]
    pub apikey: Option<String>,

    /// Bearer token (overrides external configuration)
    #[arg(long, global = true)]
    pub bearer_token: Option<String>,

    /// Deadline for each call in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paging flags shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page size
    #[arg(long)]
    pub limit: Option<i64>,

    /// Fetch only the first page instead of every page
    #[arg(long, requires = "limit")]
    pub single_page: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List v1 policies of an account
    ListPolicies {
        #[arg(long)]
        account_id: String,

        #[arg(long)]
        iam_id: Option<String>,

        #[arg(long)]
        access_group_id: Option<String>,

        /// `access` or `authorization`
        #[arg(long = "type")]
        policy_type: Option<String>,

        /// `active` or `deleted`
        #[arg(long)]
        state: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a v1 policy
    GetPolicy {
        policy_id: String,
    },

    /// Delete a v1 policy
    DeletePolicy {
        policy_id: String,
    },

    /// List v2 policies of an account
    ListV2Policies {
        #[arg(long)]
        account_id: String,

        #[arg(long)]
        iam_id: Option<String>,

        #[arg(long)]
        service_name: Option<String>,

        /// `include_last_permit` or `display`
        #[arg(long = "policy-format")]
        policy_format: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a v2 policy
    GetV2Policy {
        id: String,

        /// `include_last_permit` or `display`
        #[arg(long = "policy-format")]
        policy_format: Option<String>,
    },

    /// List custom, service and system roles
    ListRoles {
        #[arg(long)]
        account_id: Option<String>,

        #[arg(long)]
        service_name: Option<String>,
    },

    /// Show a custom role
    GetRole {
        role_id: String,
    },

    /// List policy templates of an account
    ListPolicyTemplates {
        #[arg(long)]
        account_id: String,

        #[arg(long)]
        state: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List policy template assignments of an account
    ListPolicyAssignments {
        #[arg(long)]
        account_id: String,

        /// Assignment schema version
        #[arg(long, default_value = "1.0")]
        version: String,

        #[arg(long)]
        template_id: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List action control templates of an account
    ListActionControlTemplates {
        #[arg(long)]
        account_id: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List action control assignments of an account
    ListActionControlAssignments {
        #[arg(long)]
        account_id: String,

        #[arg(long)]
        template_id: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show the access management settings of an account
    GetSettings {
        #[arg(long)]
        account_id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_policies() {
        let cli = Cli::try_parse_from([
            "iam-policy",
            "--apikey",
            "key",
            "list-policies",
            "--account-id",
            "acct-1",
            "--type",
            "access",
            "--limit",
            "20",
            "--single-page",
        ])
        .unwrap();

        assert_eq!(cli.apikey.as_deref(), Some("key"));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::ListPolicies {
                account_id,
                policy_type,
                page,
                ..
            } => {
                assert_eq!(account_id, "acct-1");
                assert_eq!(policy_type.as_deref(), Some("access"));
                assert_eq!(page.limit, Some(20));
                assert!(page.single_page);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_single_page_requires_limit() {
        let result = Cli::try_parse_from([
            "iam-policy",
            "list-policy-templates",
            "--account-id",
            "acct-1",
            "--single-page",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apikey_conflicts_with_bearer_token() {
        let result = Cli::try_parse_from([
            "iam-policy",
            "--apikey",
            "key",
            "--bearer-token",
            "token",
            "get-settings",
            "--account-id",
            "acct-1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "iam-policy",
            "get-policy",
            "policy-1",
            "--format",
            "pretty",
            "--timeout-ms",
            "500",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.timeout_ms, Some(500));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::GetPolicy { ref policy_id } if policy_id == "policy-1"));
    }

    #[test]
    fn test_policy_assignments_default_version() {
        let cli = Cli::try_parse_from([
            "iam-policy",
            "list-policy-assignments",
            "--account-id",
            "acct-1",
        ])
        .unwrap();

        match cli.command {
            Commands::ListPolicyAssignments { version, .. } => assert_eq!(version, "1.0"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
