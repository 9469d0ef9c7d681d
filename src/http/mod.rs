//! HTTP module
//!
//! Request construction, transport and response processing.
//!
//! # Features
//!
//! - **Path Templates**: `{name}` placeholders with percent-encoded substitution
//! - **Ordered Parameters**: query parameters and headers keep insertion order
//! - **Automatic Retries**: opt-in retry logic with backoff and `Retry-After`
//! - **Authentication**: credentials applied per attempt by the auth module

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use request::{PreparedRequest, RequestBuilder};
pub use response::{process_response, DetailedResponse, RawResponse};
