//! Domain model for Composer artifact operations.

mod access;
mod artifact;
mod coordinates;
mod error;
mod file;

pub use access::{PermissionAction, Principal, RepositoryCategory, ResourceKind};
pub use artifact::ComposerArtifactInfo;
pub use coordinates::{ArchiveExtension, PackageCoordinates, PackageName};
pub use error::ComposerDomainError;
pub use file::ArtifactFile;

/// Directory holding uploaded dist archives.
pub const DIRECT_DISTS_DIR: &str = "direct-dists";

/// Directory holding per-package metadata documents.
pub const METADATA_DIR: &str = "p";
