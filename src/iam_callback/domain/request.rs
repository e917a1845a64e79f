//! Callback request body sent by the authorization system.

use super::{CallbackMethod, PageInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parent instance that scopes a callback, usually the owning project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    /// Resource type of the parent.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Identifier of the parent instance.
    pub id: String,
}

/// Filter section of a callback request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackFilter {
    /// Parent scope of the callback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
    /// Explicit instance ids for `fetch_instance_info`.
    ///
    /// The authorization system sends ids as JSON strings or numbers.
    #[serde(default)]
    pub id_list: Vec<Value>,
    /// Attributes the caller wants populated.
    #[serde(default)]
    pub attribute_list: Vec<String>,
    /// Keyword for `search_instance`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl CallbackFilter {
    /// Returns the requested ids normalised to strings.
    ///
    /// Strings are taken verbatim, every other JSON value uses its compact
    /// textual form and `null` entries are dropped.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.id_list
            .iter()
            .filter_map(|value| match value {
                Value::Null => None,
                Value::String(id) => Some(id.clone()),
                other => Some(other.to_string()),
            })
            .collect()
    }

    /// Returns the parent instance id when the callback is scoped.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_ref().map(|parent| parent.id.as_str())
    }
}

/// Callback request issued by the authorization system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackRequest {
    /// Resource type the callback addresses.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Callback method.
    pub method: CallbackMethod,
    /// Filter section.
    #[serde(default)]
    pub filter: CallbackFilter,
    /// Page window for list methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
}

impl CallbackRequest {
    /// Creates a request without filter or page.
    #[must_use]
    pub fn new(resource_type: impl Into<String>, method: CallbackMethod) -> Self {
        Self {
            resource_type: resource_type.into(),
            method,
            filter: CallbackFilter::default(),
            page: None,
        }
    }

    /// Sets the page window.
    #[must_use]
    pub const fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    /// Scopes the request to a parent instance.
    #[must_use]
    pub fn with_parent(mut self, resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        self.filter.parent = Some(ParentRef {
            resource_type: resource_type.into(),
            id: id.into(),
        });
        self
    }

    /// Sets the explicit ids for `fetch_instance_info`.
    #[must_use]
    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.id_list = ids.into_iter().map(|id| Value::String(id.into())).collect();
        self
    }
}
