//! In-memory adapters for Composer ports.

mod access;
mod storage;

pub use access::{InMemoryPermissionChecker, InMemoryRepositoryCatalog};
pub use storage::InMemoryArtifactStorage;
