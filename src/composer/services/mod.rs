//! Application services for Composer artifact operations.

mod composer;

pub use composer::{ComposerService, ComposerServiceError, ComposerServiceResult};
