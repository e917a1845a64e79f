//! Filesystem adapters for Composer ports.

mod storage;

pub use storage::FsArtifactStorage;
