//! Token port guarding callback entry points.

use super::DirectoryResult;
use async_trait::async_trait;

/// Verifies the shared token the authorization system presents on every
/// callback.
#[async_trait]
pub trait CallbackTokenVerifier: Send + Sync {
    /// Returns `true` when the token is currently valid.
    ///
    /// # Errors
    ///
    /// Returns [`super::DirectoryError`] when the verification service
    /// cannot be reached or answers with a failure status.
    async fn verify(&self, token: &str) -> DirectoryResult<bool>;
}
