//! Response envelopes returned to the authorization system.

use serde::{Deserialize, Serialize};

/// Status code of a successful callback.
pub const SUCCESS_CODE: i64 = 0;

/// Message attached to successful callbacks that found no records.
pub const EMPTY_RESULT_MESSAGE: &str = "no data";

/// A single instance as displayed by the authorization system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    /// Instance identifier.
    pub id: String,
    /// Human-readable instance name.
    pub display_name: String,
}

impl InstanceInfo {
    /// Creates an instance entry.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Count plus one page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedData<T> {
    /// Total number of matching records across all pages.
    pub count: u64,
    /// Records of the requested page.
    pub result: Vec<T>,
}

impl<T> Default for PagedData<T> {
    fn default() -> Self {
        Self {
            count: 0,
            result: Vec::new(),
        }
    }
}

/// Envelope answering `list_instance` style callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInstanceResponse {
    /// Status code, [`SUCCESS_CODE`] on success.
    pub code: i64,
    /// Status message.
    pub message: String,
    /// Paged payload.
    pub data: PagedData<InstanceInfo>,
}

impl ListInstanceResponse {
    /// Creates a successful response carrying one page of instances.
    #[must_use]
    pub const fn success(count: u64, result: Vec<InstanceInfo>) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: String::new(),
            data: PagedData { count, result },
        }
    }

    /// Creates the successful response used when downstream had no data.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            code: SUCCESS_CODE,
            message: EMPTY_RESULT_MESSAGE.to_owned(),
            data: PagedData::default(),
        }
    }
}

/// Envelope answering `fetch_instance_info` callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchInstanceInfoResponse {
    /// Status code, [`SUCCESS_CODE`] on success.
    pub code: i64,
    /// Status message.
    pub message: String,
    /// Requested instances that exist.
    pub data: Vec<InstanceInfo>,
}

impl FetchInstanceInfoResponse {
    /// Creates a successful response.
    #[must_use]
    pub const fn success(data: Vec<InstanceInfo>) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: String::new(),
            data,
        }
    }
}

/// Any callback response; serialises as the wrapped envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallbackResponse {
    /// Paged instance listing.
    List(ListInstanceResponse),
    /// Instance details.
    Fetch(FetchInstanceInfoResponse),
}

impl From<ListInstanceResponse> for CallbackResponse {
    fn from(value: ListInstanceResponse) -> Self {
        Self::List(value)
    }
}

impl From<FetchInstanceInfoResponse> for CallbackResponse {
    fn from(value: FetchInstanceInfoResponse) -> Self {
        Self::Fetch(value)
    }
}
