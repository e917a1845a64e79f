//! Fixed-set token verifier.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::iam_callback::ports::{CallbackTokenVerifier, DirectoryResult};

/// Token verifier that accepts a fixed set of tokens.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    accepted: HashSet<String>,
}

impl StaticTokenVerifier {
    /// Creates a verifier accepting the given tokens.
    #[must_use]
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl CallbackTokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> DirectoryResult<bool> {
        Ok(self.accepted.contains(token))
    }
}
