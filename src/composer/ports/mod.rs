//! Port contracts for Composer artifact operations.

pub mod access;
pub mod repository;
pub mod storage;

pub use access::{
    AccessError, AccessResult, PermissionChecker, RepositoryCatalog, RepositoryDetail,
};
pub use repository::{ComposerRepository, ComposerRepositoryError, ComposerRepositoryResult};
pub use storage::{ArtifactStorage, StorageError, StorageResult, validate_relative_path};
