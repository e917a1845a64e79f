//! Pagination window requested by a callback.

use serde::{Deserialize, Serialize};

/// Page size used when a callback omits its page window.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Offset and limit of a list callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Number of records to skip.
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

const fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

impl PageInfo {
    /// Creates a page window.
    #[must_use]
    pub const fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// Resolves an optional page, falling back to offset `0` and
    /// `default_limit`.
    #[must_use]
    pub fn resolve(page: Option<Self>, default_limit: u64) -> Self {
        page.unwrap_or(Self::new(0, default_limit))
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_LIMIT)
    }
}
