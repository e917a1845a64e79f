//! Composer semantics for local repositories.

mod metadata;
mod repository;

pub use repository::LocalComposerRepository;
