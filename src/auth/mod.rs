//! Authentication module
//!
//! Supports: IAM API key, Bearer token, Basic, no authentication
//!
//! The `Authenticator` applies credentials to every outgoing request and
//! caches IAM access tokens until they enter their refresh window.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, DEFAULT_IAM_URL, IAM_TOKEN_PATH};
