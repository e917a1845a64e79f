//! Port contracts for IAM callback resolution.
//!
//! Each platform service that owns callback resources is reached through its
//! own directory port, so adapters can talk to the services independently.

pub mod directory;
pub mod token;

pub use directory::{
    DirectoryError, DirectoryResult, EnvironmentDirectory, PipelineDirectory, ProjectDirectory,
    RepositoryDirectory, TicketDirectory,
};
pub use token::CallbackTokenVerifier;
