//! Error types for IAM callback domain parsing.

use thiserror::Error;

/// Error returned when a resource type name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown resource type: {0}")]
pub struct ParseResourceTypeError(pub String);
