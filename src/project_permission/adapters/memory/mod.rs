//! In-memory adapters for project permission ports.

mod iam;
mod store;

pub use iam::{InMemoryIam, RegisteredResource};
pub use store::InMemoryProjectStore;
