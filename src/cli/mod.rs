//! CLI module
//!
//! Command-line interface over the service client.
//!
//! # Commands
//!
//! - `list-policies`, `get-policy`, `delete-policy` - v1 policies
//! - `list-v2-policies`, `get-v2-policy` - v2 policies
//! - `list-roles`, `get-role` - roles
//! - `list-policy-templates`, `list-policy-assignments` - policy templates
//! - `list-action-control-templates`, `list-action-control-assignments` - action controls
//! - `get-settings` - account access management settings

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
