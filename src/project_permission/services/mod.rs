//! Application services for project permission checks.

mod permission;

pub use permission::{ProjectPermissionError, ProjectPermissionResult, ProjectPermissionService};
