//! Uploaded artifact content.

use super::ComposerDomainError;
use sha2::{Digest, Sha256};

/// Artifact bytes together with their SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    content: Vec<u8>,
    sha256: String,
}

impl ArtifactFile {
    /// Wraps uploaded bytes, computing their digest.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerDomainError::EmptyArtifact`] when `content` is
    /// empty.
    pub fn new(content: Vec<u8>) -> Result<Self, ComposerDomainError> {
        if content.is_empty() {
            return Err(ComposerDomainError::EmptyArtifact);
        }
        let sha256 = hex::encode(Sha256::digest(&content));
        Ok(Self { content, sha256 })
    }

    /// Returns the content.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consumes the file, returning its content.
    #[must_use]
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Returns the lowercase hex SHA-256 digest.
    #[must_use]
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    /// Returns the content length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` when the content is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
