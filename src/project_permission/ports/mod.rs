//! Port contracts for project permission checks.
//!
//! IAM interactions are split by concern (membership, permission checks and
//! resource registration); project enumeration lives in the project store.

pub mod iam;
pub mod store;

pub use iam::{AuthPermissionApi, AuthProjectApi, AuthResourceApi, IamError, IamResult};
pub use store::{ProjectStore, ProjectStoreError, ProjectStoreResult};
