//! Shared envelope and error models

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Link to the first page of a list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct First {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Link to the next page of a list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Next {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Opaque continuation cursor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl Next {
    /// Continuation cursor for the next page.
    ///
    /// Prefers `start`; falls back to the `start` query parameter of `href`.
    pub fn cursor(&self) -> Option<String> {
        if let Some(start) = self.start.as_deref().filter(|s| !s.is_empty()) {
            return Some(start.to_string());
        }
        let href = self.href.as_deref()?;
        let url = Url::parse(href)
            .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(href)))
            .ok()?;
        url.query_pairs()
            .find(|(name, _)| name == "start")
            .map(|(_, value)| value.into_owned())
            .filter(|s| !s.is_empty())
    }
}

/// Link to the previous page of a list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Previous {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Request trace identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorObject>,
    /// Status code echoed by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
}

/// One entry of an error envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Additional error information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts_with: Option<ConflictsWith>,
}

/// The existing resource a create or update collided with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictsWith {
    /// ETag of the conflicting resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<Value>,
}

/// Origin of a policy created from a template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_version: Option<String>,
}

/// Where a template is assigned
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTargetDetails {
    /// Target kind, e.g. `Account`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl AssignmentTargetDetails {
    pub fn new(target_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            target_type: Some(target_type.into()),
            id: Some(id.into()),
        }
    }
}

/// Identifier of a resource created by an assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceCreated {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cursor_prefers_start() {
        let next = Next {
            href: Some("https://iam.cloud.ibm.com/v1/policies?start=from-href".to_string()),
            start: Some("from-start".to_string()),
        };
        assert_eq!(next.cursor().as_deref(), Some("from-start"));
    }

    #[test]
    fn test_next_cursor_from_href() {
        let next = Next {
            href: Some("https://iam.cloud.ibm.com/v1/policies?limit=1&start=abc%3D".to_string()),
            start: None,
        };
        assert_eq!(next.cursor().as_deref(), Some("abc="));

        let relative = Next {
            href: Some("/v1/policies?start=rel".to_string()),
            start: None,
        };
        assert_eq!(relative.cursor().as_deref(), Some("rel"));
    }

    #[test]
    fn test_next_cursor_absent() {
        assert_eq!(Next::default().cursor(), None);
        let empty = Next {
            href: Some("https://iam.cloud.ibm.com/v1/policies?limit=1".to_string()),
            start: Some(String::new()),
        };
        assert_eq!(empty.cursor(), None);
    }
}
