//! Request construction
//!
//! Operations describe their HTTP request with a [`RequestBuilder`]: a method,
//! a path template with `{name}` placeholders, ordered query parameters,
//! ordered headers and an optional JSON body. The builder is resolved against
//! the service URL into a [`PreparedRequest`] that the transport can send any
//! number of times.

use crate::error::{Error, Result};
use crate::types::HeaderList;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use std::fmt::Display;
use url::Url;

/// Describes one HTTP request before it is bound to a service URL
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    path_template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    headers: HeaderList,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Start a request for `method` against `path_template`
    pub fn new(method: Method, path_template: &'static str) -> Self {
        Self {
            method,
            path_template,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Shorthand for a GET request
    pub fn get(path_template: &'static str) -> Self {
        Self::new(Method::GET, path_template)
    }

    /// Shorthand for a POST request
    pub fn post(path_template: &'static str) -> Self {
        Self::new(Method::POST, path_template)
    }

    /// Shorthand for a PUT request
    pub fn put(path_template: &'static str) -> Self {
        Self::new(Method::PUT, path_template)
    }

    /// Shorthand for a PATCH request
    pub fn patch(path_template: &'static str) -> Self {
        Self::new(Method::PATCH, path_template)
    }

    /// Shorthand for a DELETE request
    pub fn delete(path_template: &'static str) -> Self {
        Self::new(Method::DELETE, path_template)
    }

    /// Bind a `{name}` placeholder of the path template
    #[must_use]
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Append a query parameter
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Append a query parameter when a value is present
    #[must_use]
    pub fn optional_query<T: Display>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    /// Set a header, replacing any earlier value of the same name
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Set a header when a value is present
    #[must_use]
    pub fn optional_header(self, name: &str, value: Option<&String>) -> Self {
        match value {
            Some(v) => self.header(name, v.clone()),
            None => self,
        }
    }

    /// Append caller supplied headers in order, repeats included
    #[must_use]
    pub fn headers(mut self, headers: &HeaderList) -> Self {
        self.headers.extend(headers.iter().cloned());
        self
    }

    /// Serialize `body` as the JSON request body
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Query parameters in the order they were added
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Headers in the order they were added
    pub fn header_list(&self) -> &HeaderList {
        &self.headers
    }

    /// Serialized JSON body, if any
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Resolve the path template against `service_url`.
    ///
    /// Fails with a configuration error when the URL is empty or malformed.
    /// Substituted path parameters are percent-encoded as single segments;
    /// `.` and `..` are rejected.
    pub fn resolve_url(&self, service_url: &str) -> Result<Url> {
        let service_url = service_url.trim();
        if service_url.is_empty() {
            return Err(Error::config("service URL is empty"));
        }
        let mut url = Url::parse(service_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "service URL '{service_url}' cannot be used as a base URL"
            )));
        }

        let segments = self.path_segments()?;
        url.path_segments_mut()
            .map_err(|()| Error::config("service URL cannot be used as a base URL"))?
            .pop_if_empty()
            .extend(segments);

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    fn path_segments(&self) -> Result<Vec<&str>> {
        self.path_template
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => {
                        let value = self
                            .path_params
                            .iter()
                            .find(|(n, _)| *n == name)
                            .map(|(_, v)| v.as_str())
                            .ok_or_else(|| Error::missing_field(name))?;
                        // dot segments would be normalized away
                        if value == "." || value == ".." {
                            return Err(Error::invalid_field(
                                name,
                                format!("'{value}' is not a valid path parameter"),
                            ));
                        }
                        Ok(value)
                    }
                    None => Ok(segment),
                }
            })
            .collect()
    }

    /// Bind this request to `service_url`, producing a request ready to send
    pub fn prepare(self, service_url: &str) -> Result<PreparedRequest> {
        let url = self.resolve_url(service_url)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::invalid_field("headers", format!("{name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::invalid_field("headers", format!("{name}: {e}")))?;
            headers.append(name, value);
        }
        if self.body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(PreparedRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        })
    }
}

/// A fully resolved request
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL including the query string
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// JSON body
    pub body: Option<Bytes>,
}
