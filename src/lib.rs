// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # IAM Policy Management client
//!
//! A typed async client for the IAM Policy Management REST API: access
//! policies (v1 and v2), custom roles, policy and action control templates,
//! their assignments, and account access management settings.
//!
//! ## Features
//!
//! - **Typed operations**: one options struct and one async method per REST call
//! - **Local validation**: required fields are checked before anything is sent
//! - **Cursor pagination**: pagers for every list endpoint
//! - **Authentication**: IAM API key, bearer token, basic, or none
//! - **Retries and deadlines**: opt-in retries with backoff, per-call deadlines
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iam_policy_management::{AuthConfig, IamPolicyManagement, ServiceConfig};
//! use iam_policy_management::service::{GetPolicyOptions, ListPoliciesOptions};
//!
//! #[tokio::main]
//! async fn main() -> iam_policy_management::Result<()> {
//!     let client = IamPolicyManagement::new(ServiceConfig::new(AuthConfig::iam("my-apikey")))?;
//!
//!     // Every policy of the account, page by page
//!     let mut pager = client.new_policies_pager(&ListPoliciesOptions::new("acct-1"))?;
//!     for policy in pager.get_all().await? {
//!         println!("{:?}", policy.id);
//!     }
//!
//!     // A single policy together with its ETag
//!     let response = client.get_policy(&GetPolicyOptions::new("policy-1")).await?;
//!     println!("etag = {:?}", response.etag());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     IamPolicyManagement                         │
//! │  list_policies()  create_v2_policy()  get_settings()  ...       │
//! │  new_*_pager() → Pager<ListOptions>                             │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │ Options  │ Operation │     HTTP      │   Auth    │   Models    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Required │ Path      │ Retry         │ IAM token │ Policies    │
//! │ Setters  │ Query     │ Backoff       │ Bearer    │ Roles       │
//! │ Headers  │ Body      │ Deadline      │ Basic     │ Templates   │
//! │          │ Headers   │ Errors        │           │ Settings    │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::new_without_default)]

// ============================================================================
// Module declarations
// ============================================================================

#[macro_use]
mod macros;

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP transport with retry
pub mod http;

/// Request and response models
pub mod models;

/// Operation abstraction
pub mod operation;

/// Cursor pagination
pub mod pagination;

/// Service and external configuration
pub mod config;

/// Service client and operation options
pub mod service;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use config::{ExternalConfig, ServiceConfig};
pub use http::{DetailedResponse, HttpClientConfig, RawResponse};
pub use operation::Operation;
pub use pagination::{Pager, PaginationState};
pub use service::IamPolicyManagement;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
