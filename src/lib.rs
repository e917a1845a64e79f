//! Tollgate: authorization glue for a CI/CD and artifact platform.
//!
//! This crate answers the IAM system's resource callbacks, wraps project
//! lifecycle operations in permission checks and guards Composer package
//! operations with repository permissions.
//!
//! # Architecture
//!
//! Tollgate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, files)
//!
//! # Modules
//!
//! - [`iam_callback`]: Resource list and instance callbacks for IAM
//! - [`project_permission`]: Permission checks around projects
//! - [`composer`]: Permission-guarded Composer repository operations
//! - [`config`] and [`telemetry`]: Settings loading and log output
//! - [`bootstrap`]: Adapter wiring from settings

pub mod bootstrap;
pub mod composer;
pub mod config;
pub mod iam_callback;
pub mod project_permission;
pub mod telemetry;
