//! Result envelope wrapping every platform service response.

use serde::{Deserialize, Serialize};

use crate::iam_callback::ports::{DirectoryError, DirectoryResult};

/// Status reported by a successful service call.
const OK_STATUS: i64 = 0;

/// `{status, message, data}` wrapper used by the platform service APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEnvelope<T> {
    /// Zero on success, a message code otherwise.
    #[serde(default)]
    pub status: i64,
    /// Failure description, usually absent on success.
    pub message: Option<String>,
    /// Payload, absent when the service has nothing to return.
    pub data: Option<T>,
}

impl<T> ServiceEnvelope<T> {
    /// Unwraps the payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Remote`] when the status is non-zero.
    pub fn into_data(self) -> DirectoryResult<Option<T>> {
        if self.status != OK_STATUS {
            return Err(DirectoryError::remote(
                self.status,
                self.message.unwrap_or_default(),
            ));
        }
        Ok(self.data)
    }
}
