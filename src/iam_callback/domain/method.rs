//! Callback methods issued by the authorization system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback method named in an IAM callback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackMethod {
    /// Enumerate instances page by page.
    ListInstance,
    /// Fetch display details for explicit instance ids.
    FetchInstanceInfo,
    /// List filterable attributes.
    ListAttr,
    /// List values of a filterable attribute.
    ListAttrValue,
    /// Enumerate instances matching a policy expression.
    ListInstanceByPolicy,
    /// Search instances by keyword.
    SearchInstance,
}

impl CallbackMethod {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListInstance => "list_instance",
            Self::FetchInstanceInfo => "fetch_instance_info",
            Self::ListAttr => "list_attr",
            Self::ListAttrValue => "list_attr_value",
            Self::ListInstanceByPolicy => "list_instance_by_policy",
            Self::SearchInstance => "search_instance",
        }
    }
}

impl fmt::Display for CallbackMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
