//! In-memory adapters for IAM callback ports.

mod directory;
mod token;

pub use directory::InMemoryResourceDirectory;
pub use token::StaticTokenVerifier;
